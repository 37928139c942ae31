//! Portfolio rendering engine.
//!
//! `render(data, theme) -> String` is pure and total: the same portfolio and theme
//! always produce the same bytes, and any structurally valid portfolio (including
//! an empty one) renders. Preview and download both call through here.

pub mod document;
pub mod html;
pub mod icons;
pub mod sections;
pub mod styles;
pub mod theme;

use std::sync::OnceLock;

use crate::models::PortfolioData;

pub use icons::IconCatalog;
pub use theme::Theme;

use sections::SectionContext;

/// Renders portfolios against an injected icon catalog.
#[derive(Debug, Clone)]
pub struct Renderer {
    icons: IconCatalog,
}

impl Renderer {
    pub fn new(icons: IconCatalog) -> Self {
        Renderer { icons }
    }

    pub fn render(&self, data: &PortfolioData, theme: Theme) -> String {
        let ctx = SectionContext {
            data,
            skin: theme.skin(),
            icons: &self.icons,
        };
        document::document(&ctx, theme)
    }

    /// Unknown or mis-cased theme ids render as `minimalist`.
    pub fn render_id(&self, data: &PortfolioData, theme_id: &str) -> String {
        self.render(data, Theme::from_id(theme_id))
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::new(IconCatalog::builtin())
    }
}

/// Renders with the built-in icon catalog, for callers without an
/// [`AppState`](crate::state::AppState) at hand.
pub fn render(data: &PortfolioData, theme_id: &str) -> String {
    static DEFAULT: OnceLock<Renderer> = OnceLock::new();
    DEFAULT.get_or_init(Renderer::default).render_id(data, theme_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::{Achievement, Project, Skill, SkillLevel, WorkExperience};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const PYTHON_ICON: &str =
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/python/python-original.svg";

    fn ada() -> PortfolioData {
        serde_json::from_value(json!({
            "personal": {
                "name": "Ada Lovelace",
                "bio": "Mathematician.",
                "github": "https://github.com/ada"
            },
            "contact": { "email": "ada@x.com" },
            "skills": [{ "id": "1", "name": "Python", "level": "Expert" }],
            "experience": [],
            "achievements": [],
            "projects": []
        }))
        .unwrap()
    }

    fn full() -> PortfolioData {
        let mut data = ada();
        data.social.linkedin = "https://linkedin.com/in/ada".into();
        data.skills.push(Skill {
            id: "2".into(),
            name: "Difference Engines".into(),
            level: SkillLevel::Advanced,
        });
        data.experience.push(WorkExperience {
            id: "e1".into(),
            company: "Analytical Society".into(),
            position: "Analyst".into(),
            duration: "1842 - 1843".into(),
            description: "Wrote the first published algorithm.".into(),
            location: Some("London".into()),
        });
        data.achievements.push(Achievement {
            id: "a1".into(),
            title: "Note G".into(),
            description: "Bernoulli numbers on the engine.".into(),
        });
        data.projects.push(Project {
            id: "p1".into(),
            name: "Bernoulli Program".into(),
            description: "Computes Bernoulli numbers.".into(),
            repo: "https://github.com/ada/bernoulli".into(),
            demo: Some("https://ada.dev/bernoulli".into()),
            technologies: vec!["Punch cards".into(), "Gears".into(), "Ink".into(), "Steam".into()],
        });
        data
    }

    /// Visible text with tags and the `<style>` block stripped.
    fn visible_text(html: &str) -> String {
        let html = match (html.find("<style>"), html.find("</style>")) {
            (Some(start), Some(end)) => format!("{}{}", &html[..start], &html[end..]),
            _ => html.to_string(),
        };
        let mut out = String::new();
        let mut in_tag = false;
        for ch in html.chars() {
            match ch {
                '<' => in_tag = true,
                '>' => {
                    in_tag = false;
                    out.push(' ');
                }
                _ if !in_tag => out.push(ch),
                _ => {}
            }
        }
        out
    }

    #[test]
    fn test_render_is_deterministic() {
        let data = full();
        for theme in Theme::ALL {
            assert_eq!(render(&data, theme.id()), render(&data, theme.id()));
        }
    }

    #[test]
    fn test_document_shell() {
        let html = render(&ada(), "minimalist");
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\"><head>"));
        assert!(html.contains("<meta charset=\"UTF-8\">"));
        assert!(html.contains("<title>Ada Lovelace</title>"));
        assert_eq!(html.matches("<style>").count(), 1);
        assert!(html.contains("<body class=\"theme-minimalist\">"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_empty_skills_leave_no_markup() {
        let mut data = ada();
        data.skills.clear();
        let html = render(&data, "devfolio");
        assert!(!html.contains("id=\"skills\""));
        assert!(!html.contains("class=\"skill\""));
        assert!(!html.contains(sections::SKILLS_HEADING));
    }

    #[test]
    fn test_one_entry_per_skill_with_icon_when_known() {
        let data = full();
        for theme in Theme::ALL {
            let html = render(&data, theme.id());
            assert_eq!(html.matches("class=\"skill\"").count(), 2, "{}", theme.id());
            assert_eq!(html.matches("<img ").count(), 1, "{}", theme.id());
            assert!(html.contains(&format!("src=\"{PYTHON_ICON}\" alt=\"Python\"")));
            assert!(html.contains("Difference Engines"));
        }
    }

    #[test]
    fn test_empty_portfolio_uses_placeholders() {
        let data = PortfolioData::default();
        for theme in Theme::ALL {
            let html = render(&data, theme.id());
            assert!(html.contains("<title>Portfolio</title>"));
            assert!(html.contains(sections::NAME_PLACEHOLDER));
            assert!(html.contains(sections::PROJECTS_PLACEHOLDER));
            assert!(!html.contains("class=\"button"), "{}", theme.id());
            assert!(!html.contains("class=\"social-links\""));
            assert!(!html.contains("mailto:"));
            assert!(!html.contains("id=\"experience\""));
            assert!(!html.contains("id=\"achievements\""));
        }
        assert!(render(&data, "minimalist").contains(sections::BIO_PLACEHOLDER));
        assert!(render(&data, "devfolio").contains(sections::BANNER_BIO_PLACEHOLDER));
    }

    #[test]
    fn test_whitespace_name_counts_as_missing() {
        let mut data = ada();
        data.personal.name = "   ".into();
        let html = render(&data, "creative");
        assert!(html.contains("<title>Portfolio</title>"));
        assert!(html.contains(sections::NAME_PLACEHOLDER));
    }

    #[test]
    fn test_every_theme_surfaces_the_same_facts() {
        let data = full();
        let facts = [
            "Ada Lovelace",
            "Mathematician.",
            "Python",
            "Difference Engines",
            "Analyst",
            "Analytical Society",
            "1842 - 1843 \u{2022} London",
            "Note G",
            "Bernoulli Program",
            "Computes Bernoulli numbers.",
            "Punch cards",
            "Steam",
            "GitHub",
            "LinkedIn",
            "Live Demo",
        ];

        let documents: Vec<String> = Theme::ALL.iter().map(|t| render(&data, t.id())).collect();
        for (theme, html) in Theme::ALL.iter().zip(&documents) {
            let text = visible_text(html);
            for fact in facts {
                assert!(text.contains(fact), "{} is missing {fact:?}", theme.id());
            }
        }
        for (i, a) in documents.iter().enumerate() {
            for b in &documents[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_unknown_theme_renders_as_minimalist() {
        let data = full();
        let expected = render(&data, "minimalist");
        assert_eq!(render(&data, "vaporwave"), expected);
        assert_eq!(render(&data, ""), expected);
        assert_eq!(render(&data, "Minimalist"), expected);
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut data = ada();
        data.personal.name = "<script>alert(\"x\")</script>".into();
        data.personal.bio = "Tom's \"quoted\" <b>bio</b>".into();
        data.skills[0].name = "<img src=x onerror=alert(1)>".into();

        for theme in Theme::ALL {
            let html = render(&data, theme.id());
            assert!(!html.contains("<script>"), "{}", theme.id());
            assert!(!html.contains("<b>bio</b>"));
            assert!(!html.contains("<img src=x"));
            assert!(html.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"));
            assert!(html.contains("Tom&#39;s &quot;quoted&quot; &lt;b&gt;bio&lt;/b&gt;"));
        }
    }

    #[test]
    fn test_script_urls_never_become_links() {
        let mut data = ada();
        data.personal.github = "javascript:alert(1)".into();
        data.projects.push(Project {
            id: "p".into(),
            name: "Trap".into(),
            description: "Nothing to see.".into(),
            repo: "javascript:alert(2)".into(),
            demo: Some("data:text/html,hi".into()),
            technologies: vec![],
        });
        for theme in Theme::ALL {
            let html = render(&data, theme.id());
            assert!(!html.contains("javascript:"));
            assert!(!html.contains("data:text"));
            assert!(!html.contains("class=\"project-links\""));
            assert!(!html.contains("class=\"technologies\""));
            assert!(html.contains("Trap"));
        }
    }

    #[test]
    fn test_scenario_minimalist() {
        let html = render(&ada(), "minimalist");
        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("href=\"mailto:ada@x.com\""));
        assert!(html.contains("class=\"skill\""));
        assert!(html.contains(PYTHON_ICON));
        assert!(!html.contains("id=\"experience\""));
        assert!(!html.contains("id=\"achievements\""));
        assert!(html.contains(sections::PROJECTS_PLACEHOLDER));
        assert!(html.contains("class=\"social-links\""));
        assert!(html.contains("Selected Work"));
    }

    #[test]
    fn test_scenario_darkmode() {
        let html = render(&ada(), "darkmode");
        assert!(html.contains("<body class=\"theme-darkmode\">"));
        assert!(html.contains("<div class=\"grid-bg\"></div>"));
        assert!(html.contains("Ada Lovelace<span class=\"cursor\">_</span></h1>"));
        assert!(html.contains("href=\"mailto:ada@x.com\""));
        assert!(html.contains(PYTHON_ICON));
        assert!(!html.contains("id=\"experience\""));
        assert!(html.contains(sections::PROJECTS_PLACEHOLDER));
        assert_ne!(html, render(&ada(), "minimalist"));
    }

    #[test]
    fn test_button_order_and_resume() {
        let mut data = full();
        data.resume = Some(Default::default());
        let html = render(&data, "modern");
        let positions: Vec<usize> = ["mailto:", "github.com/ada\"", "linkedin.com", "resume.pdf"]
            .iter()
            .map(|needle| html.find(needle).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
        assert!(html.contains("href=\"./resume.pdf\" download>"));
        assert!(html.contains("Let&#39;s Connect"));
        assert!(html.contains("button button-primary"));
        assert!(html.contains("header-card"));
        assert!(html.contains("section-subtitle"));
    }

    #[test]
    fn test_no_resume_button_without_resume() {
        let html = render(&full(), "creative");
        assert!(!html.contains("resume.pdf"));
    }

    #[test]
    fn test_tech_tags_cycle_three_accents() {
        let html = render(&full(), "creative");
        let expected = concat!(
            "<span class=\"tech tech-accent-0\">Punch cards</span>",
            "<span class=\"tech tech-accent-1\">Gears</span>",
            "<span class=\"tech tech-accent-2\">Ink</span>",
            "<span class=\"tech tech-accent-0\">Steam</span>",
        );
        assert!(html.contains(expected));
    }

    #[test]
    fn test_project_layout_follows_skin() {
        let data = full();
        assert!(render(&data, "minimalist").contains("<div class=\"project\">"));
        assert!(render(&data, "devfolio").contains("<div class=\"project-card\">"));
        assert!(render(&data, "creative").contains("class=\"bg-decorations\""));
        assert!(render(&data, "devfolio").contains("<span class=\"token-ident\">developer</span>"));
    }

    #[test]
    fn test_injected_icon_catalog() {
        let renderer = Renderer::new(IconCatalog::from_entries([(
            "Python",
            "https://icons.test/py.svg",
        )]));
        let html = renderer.render(&ada(), Theme::Modern);
        assert!(html.contains("src=\"https://icons.test/py.svg\""));
        assert!(!html.contains("devicons"));
    }
}
