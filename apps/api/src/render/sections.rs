//! Section builders shared by every theme.
//!
//! Each builder reads the portfolio and the active [`Skin`] and returns a node.
//! Optional sections return `None` when their list is empty so no wrapper is left
//! behind; the projects section always renders.

use crate::models::{non_blank, non_blank_opt, PortfolioData};
use crate::render::html::{el, safe_href, text, Element, Node};
use crate::render::icons::IconCatalog;
use crate::render::theme::{Backdrop, ProjectLayout, Skin};

pub const NAME_PLACEHOLDER: &str = "Your Name";
pub const BIO_PLACEHOLDER: &str = "Your professional bio will appear here...";
pub const BANNER_BIO_PLACEHOLDER: &str = "Your bio here...";
pub const PROJECTS_PLACEHOLDER: &str = "Your projects will appear here...";

pub const SKILLS_HEADING: &str = "Skills & Expertise";
pub const EXPERIENCE_HEADING: &str = "Work Experience";
pub const ACHIEVEMENTS_HEADING: &str = "Achievements";

const SKILLS_SUBTITLE: &str = "Technologies and tools I work with";
const EXPERIENCE_SUBTITLE: &str = "My professional journey and achievements";
const ACHIEVEMENTS_SUBTITLE: &str = "Recognition and accomplishments";
const PROJECTS_SUBTITLE: &str = "Explore my latest work and creative solutions";

const GLYPH_EMAIL: &str = "\u{2709}\u{fe0f}";
const GLYPH_LINK: &str = "\u{1f517}";
const GLYPH_LINKEDIN: &str = "\u{1f4bc}";
const GLYPH_RESUME: &str = "\u{1f4c4}";
const GLYPH_DEMO: &str = "\u{1f310}";

/// Where the resume lands inside the downloaded site.
pub const RESUME_HREF: &str = "./resume.pdf";

/// Number of accent colours technology tags cycle through.
const TECH_ACCENTS: usize = 3;

pub struct SectionContext<'a> {
    pub data: &'a PortfolioData,
    pub skin: &'static Skin,
    pub icons: &'a IconCatalog,
}

impl SectionContext<'_> {
    fn display_name(&self) -> &str {
        non_blank(&self.data.personal.name).unwrap_or(NAME_PLACEHOLDER)
    }

    fn display_bio(&self) -> &str {
        non_blank(&self.data.personal.bio).unwrap_or(BIO_PLACEHOLDER)
    }

    fn section(&self, id: &'static str, heading: &str, subtitle: &'static str) -> Element {
        let section = el("section")
            .class("section")
            .attr("id", id)
            .child(el("h2").text(heading));
        if self.skin.section_subtitles {
            section.child(el("p").class("section-subtitle").text(subtitle))
        } else {
            section
        }
    }
}

pub fn backdrop(skin: &Skin) -> Option<Node> {
    match skin.backdrop {
        Backdrop::None => None,
        Backdrop::Decorations => Some(
            el("div")
                .class("bg-decorations")
                .child(el("div").class("decoration-1"))
                .child(el("div").class("decoration-2"))
                .into(),
        ),
        Backdrop::Grid => Some(el("div").class("grid-bg").into()),
    }
}

pub fn header(ctx: &SectionContext<'_>) -> Node {
    let skin = ctx.skin;

    let name = el("h1")
        .class("name")
        .text(ctx.display_name())
        .maybe(
            skin.name_cursor
                .then(|| el("span").class("cursor").text("_")),
        );

    let content = vec![
        skin.terminal_banner.then(|| Node::from(terminal_banner(ctx))),
        Some(Node::from(name)),
        Some(el("p").class("bio").text(ctx.display_bio()).into()),
        contact_buttons(ctx).map(Node::from),
    ];
    let content = content.into_iter().flatten();

    if skin.header_card {
        el("header")
            .class("header")
            .child(el("div").class("header-card").children(content))
            .into()
    } else {
        el("header").class("header").children(content).into()
    }
}

/// `const developer = { name: "...", bio: "..." }` block.
fn terminal_banner(ctx: &SectionContext<'_>) -> Element {
    let personal = &ctx.data.personal;
    let name = non_blank(&personal.name).unwrap_or(NAME_PLACEHOLDER);
    let bio = non_blank(&personal.bio).unwrap_or(BANNER_BIO_PLACEHOLDER);
    let string_token = |value: &str| el("span").class("token-string").text(format!("\"{value}\""));

    el("div")
        .class("terminal")
        .child(
            el("div")
                .class("terminal-dots")
                .child(el("span").class("dot").class("dot-red"))
                .child(el("span").class("dot").class("dot-yellow"))
                .child(el("span").class("dot").class("dot-green")),
        )
        .child(
            el("div")
                .child(el("span").class("token-keyword").text("const"))
                .child(text(" "))
                .child(el("span").class("token-ident").text("developer"))
                .child(text(" = {")),
        )
        .child(
            el("div")
                .class("terminal-line")
                .child(text("name: "))
                .child(string_token(name))
                .child(text(",")),
        )
        .child(
            el("div")
                .class("terminal-line")
                .child(text("bio: "))
                .child(string_token(bio)),
        )
        .child(el("div").text("}"))
}

pub fn email_href(data: &PortfolioData) -> Option<String> {
    non_blank(&data.contact.email).and_then(|email| safe_href(&format!("mailto:{email}")))
}

pub fn github_href(data: &PortfolioData) -> Option<String> {
    safe_href(&data.personal.github)
}

/// LinkedIn is the only social profile the header links to.
pub fn linkedin_href(data: &PortfolioData) -> Option<String> {
    safe_href(&data.social.linkedin)
}

/// Email, GitHub, LinkedIn, resume, in that order; each only when backed by data.
fn contact_buttons(ctx: &SectionContext<'_>) -> Option<Element> {
    let data = ctx.data;
    let skin = ctx.skin;
    let (primary, secondary) = if skin.button_variants {
        ("button-primary", "button-secondary")
    } else {
        ("", "")
    };
    let button = |variant: &'static str, href: String| {
        el("a").class("button").class(variant).attr("href", href)
    };

    let email = email_href(data).map(|href| {
        button(primary, href).text(format!("{GLYPH_EMAIL} {}", skin.email_label))
    });

    let github = github_href(data).map(|href| {
        button(secondary, href)
            .external()
            .text(format!("{GLYPH_LINK} GitHub"))
    });

    let linkedin = linkedin_href(data).map(|href| {
        button(secondary, href)
            .external()
            .text(format!("{GLYPH_LINKEDIN} LinkedIn"))
    });

    let resume = data.has_resume().then(|| {
        button(secondary, RESUME_HREF.to_string())
            .flag("download")
            .text(format!("{GLYPH_RESUME} Resume"))
    });

    let row = el("div")
        .class(skin.button_row_class)
        .children([email, github, linkedin, resume].into_iter().flatten());

    (!row.is_empty()).then_some(row)
}

pub fn skills(ctx: &SectionContext<'_>) -> Option<Node> {
    let skills = &ctx.data.skills;
    if skills.is_empty() {
        return None;
    }

    let entries = skills.iter().map(|skill| {
        let icon = ctx.icons.lookup(&skill.name).map(|url| {
            el("img")
                .attr("src", url)
                .attr("alt", skill.name.trim())
        });
        el("div")
            .class("skill")
            .maybe(icon)
            .child(el("div").child(el("div").class("skill-name").text(skill.name.trim())))
    });

    Some(
        ctx.section("skills", SKILLS_HEADING, SKILLS_SUBTITLE)
            .child(el("div").class("skills").children(entries))
            .into(),
    )
}

pub fn experience(ctx: &SectionContext<'_>) -> Option<Node> {
    let experience = &ctx.data.experience;
    if experience.is_empty() {
        return None;
    }

    let entries = experience.iter().map(|exp| {
        let duration = match non_blank_opt(exp.location.as_deref()) {
            Some(location) => format!("{} \u{2022} {location}", exp.duration),
            None => exp.duration.clone(),
        };
        el("div")
            .class("experience")
            .child(el("h3").text(&exp.position))
            .child(el("div").class("company").text(&exp.company))
            .child(el("div").class("duration").text(duration))
            .child(el("p").class("entry-description").text(&exp.description))
    });

    Some(
        ctx.section("experience", EXPERIENCE_HEADING, EXPERIENCE_SUBTITLE)
            .children(entries)
            .into(),
    )
}

pub fn achievements(ctx: &SectionContext<'_>) -> Option<Node> {
    let achievements = &ctx.data.achievements;
    if achievements.is_empty() {
        return None;
    }

    let entries = achievements.iter().map(|achievement| {
        el("div")
            .class("achievement")
            .child(el("h3").text(&achievement.title))
            .child(el("p").class("entry-description").text(&achievement.description))
    });

    Some(
        ctx.section("achievements", ACHIEVEMENTS_HEADING, ACHIEVEMENTS_SUBTITLE)
            .children(entries)
            .into(),
    )
}

pub fn projects(ctx: &SectionContext<'_>) -> Node {
    let skin = ctx.skin;
    let section = ctx.section("projects", skin.projects_heading, PROJECTS_SUBTITLE);

    if ctx.data.projects.is_empty() {
        return section
            .child(
                el("div")
                    .class("projects-empty")
                    .child(el("p").text(PROJECTS_PLACEHOLDER)),
            )
            .into();
    }

    let (container_class, card_class) = match skin.project_layout {
        ProjectLayout::Grid => ("project-grid", "project-card"),
        ProjectLayout::List => ("project-list", "project"),
    };

    let cards = ctx.data.projects.iter().map(|project| {
        let repo = safe_href(&project.repo).map(|href| {
            el("a")
                .attr("href", href)
                .external()
                .text(format!("{GLYPH_LINK} GitHub"))
        });
        let demo = project
            .demo
            .as_deref()
            .and_then(safe_href)
            .map(|href| {
                el("a")
                    .attr("href", href)
                    .external()
                    .text(format!("{GLYPH_DEMO} Live Demo"))
            });
        let links = el("div")
            .class("project-links")
            .children([repo, demo].into_iter().flatten());

        let tags = el("div").class("technologies").children(
            project.technologies.iter().enumerate().map(|(index, tech)| {
                el("span")
                    .class("tech")
                    .class(format!("tech-accent-{}", index % TECH_ACCENTS))
                    .text(tech)
            }),
        );

        el("div")
            .class(card_class)
            .child(el("h3").text(&project.name))
            .child(el("p").text(&project.description))
            .maybe((!links.is_empty()).then_some(links))
            .maybe((!tags.is_empty()).then_some(tags))
    });

    section
        .child(el("div").class(container_class).children(cards))
        .into()
}
