use crate::models::non_blank;
use crate::render::html::{el, Element, Node};
use crate::render::sections::{self, SectionContext};
use crate::render::styles;
use crate::render::theme::Theme;

const DEFAULT_TITLE: &str = "Portfolio";

/// Assembles the full page for one theme: head, backdrop, header, then the
/// four content sections in fixed order.
pub fn document(ctx: &SectionContext<'_>, theme: Theme) -> String {
    let title = non_blank(&ctx.data.personal.name).unwrap_or(DEFAULT_TITLE);

    let head = el("head")
        .child(el("meta").attr("charset", "UTF-8"))
        .child(
            el("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1.0"),
        )
        .child(el("title").text(title))
        .child(
            el("style")
                .child(Node::Raw(styles::BASE))
                .child(Node::Raw(ctx.skin.stylesheet)),
        );

    let content = [
        Some(sections::header(ctx)),
        sections::skills(ctx),
        sections::experience(ctx),
        sections::achievements(ctx),
        Some(sections::projects(ctx)),
    ];

    let body = el("body")
        .class(format!("theme-{}", theme.id()))
        .maybe(sections::backdrop(ctx.skin))
        .child(
            el("div")
                .class("container")
                .children(content.into_iter().flatten()),
        );

    let page: Element = el("html").attr("lang", "en").child(head).child(body);

    let mut out = String::from("<!DOCTYPE html>\n");
    Node::from(page).write_to(&mut out);
    out.push('\n');
    out
}
