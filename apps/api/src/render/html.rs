//! Small HTML node tree for the portfolio renderer.
//!
//! Section builders produce [`Node`] values; [`Node::write_to`] is the only place
//! markup is serialized, so every text node and attribute value is escaped here
//! and nowhere else. `Raw` exists for static theme assets only.

use url::Url;

/// Elements that never take children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["meta", "img", "br", "link"];

/// URL schemes a user-supplied link may use.
const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    Raw(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: &'static str,
    classes: Vec<String>,
    attrs: Vec<(&'static str, Option<String>)>,
    children: Vec<Node>,
}

pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        classes: Vec::new(),
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

pub fn text(value: impl Into<String>) -> Node {
    Node::Text(value.into())
}

impl Element {
    /// Adds a class; blank names are ignored so callers can pass conditional classes.
    pub fn class(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.trim().is_empty() {
            self.classes.push(name);
        }
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, Some(value.into())));
        self
    }

    /// Boolean attribute (`download`, `hidden`, ...).
    pub fn flag(mut self, name: &'static str) -> Self {
        self.attrs.push((name, None));
        self
    }

    /// Link that opens outside the page.
    pub fn external(self) -> Self {
        self.attr("target", "_blank")
            .attr("rel", "noopener noreferrer")
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn maybe(mut self, node: Option<impl Into<Node>>) -> Self {
        if let Some(node) = node {
            self.children.push(node.into());
        }
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, value: impl Into<String>) -> Self {
        self.child(text(value))
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    pub fn write_to(&self, out: &mut String) {
        match self {
            Node::Text(value) => push_escaped(value, out),
            Node::Raw(markup) => out.push_str(markup),
            Node::Element(element) => element.write_to(out),
        }
    }
}

impl Element {
    fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);

        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            push_escaped(&self.classes.join(" "), out);
            out.push('"');
        }

        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            if let Some(value) = value {
                out.push_str("=\"");
                push_escaped(value, out);
                out.push('"');
            }
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag) {
            return;
        }

        for child in &self.children {
            child.write_to(out);
        }

        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

fn push_escaped(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

/// Returns the trimmed URL if it is safe to put in an `href`.
///
/// Absolute URLs must use an allow-listed scheme. A bare host such as
/// `github.com/ada` becomes `https://github.com/ada`. Only explicit local paths
/// (`./resume.pdf`, `/about`, `#top`) stay relative; any other scheme-less text
/// yields no link.
pub fn safe_href(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match Url::parse(trimmed) {
        Ok(url) if SAFE_SCHEMES.contains(&url.scheme()) => Some(trimmed.to_string()),
        Ok(_) => None,
        Err(url::ParseError::RelativeUrlWithoutBase) if is_local_path(trimmed) => {
            Some(trimmed.to_string())
        }
        Err(url::ParseError::RelativeUrlWithoutBase) => bare_host_url(trimmed),
        Err(_) => None,
    }
}

fn is_local_path(value: &str) -> bool {
    ["./", "../", "/", "#"].iter().any(|prefix| value.starts_with(prefix))
}

fn bare_host_url(value: &str) -> Option<String> {
    let candidate = format!("https://{value}");
    let url = Url::parse(&candidate).ok()?;
    let host = url.host_str()?;
    (host.contains('.') && !host.starts_with('.') && !host.ends_with('.')).then_some(candidate)
}
