//! The five portfolio themes and the skin each one hands to the renderer.
//!
//! Every theme goes through the same section pipeline; a [`Skin`] only decides
//! stylesheet text, wrapper markup and a few labels. Adding a theme means adding
//! a variant, a stylesheet and a skin, never a new rendering function.

use serde::{Deserialize, Serialize};

use crate::render::styles;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Minimalist,
    DevFolio,
    Creative,
    DarkMode,
    Modern,
}

/// Decorative layer painted behind the page content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    None,
    /// Two blurred colour blobs.
    Decorations,
    /// Faint square grid.
    Grid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectLayout {
    List,
    Grid,
}

#[derive(Debug)]
pub struct Skin {
    pub stylesheet: &'static str,
    pub backdrop: Backdrop,
    /// `const developer = { ... }` code block above the name.
    pub terminal_banner: bool,
    /// Wraps the header content in a glass card.
    pub header_card: bool,
    /// Blinking-terminal `_` after the name.
    pub name_cursor: bool,
    pub project_layout: ProjectLayout,
    pub section_subtitles: bool,
    /// Email button gets `button-primary`, the rest `button-secondary`.
    pub button_variants: bool,
    pub button_row_class: &'static str,
    pub email_label: &'static str,
    pub projects_heading: &'static str,
}

static MINIMALIST: Skin = Skin {
    stylesheet: styles::MINIMALIST,
    backdrop: Backdrop::None,
    terminal_banner: false,
    header_card: false,
    name_cursor: false,
    project_layout: ProjectLayout::List,
    section_subtitles: false,
    button_variants: false,
    button_row_class: "social-links",
    email_label: "Email",
    projects_heading: "Selected Work",
};

static DEVFOLIO: Skin = Skin {
    stylesheet: styles::DEVFOLIO,
    backdrop: Backdrop::None,
    terminal_banner: true,
    header_card: false,
    name_cursor: false,
    project_layout: ProjectLayout::Grid,
    section_subtitles: false,
    button_variants: false,
    button_row_class: "buttons",
    email_label: "Email",
    projects_heading: "Projects",
};

static CREATIVE: Skin = Skin {
    stylesheet: styles::CREATIVE,
    backdrop: Backdrop::Decorations,
    terminal_banner: false,
    header_card: false,
    name_cursor: false,
    project_layout: ProjectLayout::Grid,
    section_subtitles: false,
    button_variants: false,
    button_row_class: "buttons",
    email_label: "Email",
    projects_heading: "Featured Work",
};

static DARKMODE: Skin = Skin {
    stylesheet: styles::DARKMODE,
    backdrop: Backdrop::Grid,
    terminal_banner: false,
    header_card: false,
    name_cursor: true,
    project_layout: ProjectLayout::Grid,
    section_subtitles: false,
    button_variants: false,
    button_row_class: "buttons",
    email_label: "Email",
    projects_heading: "Projects",
};

static MODERN: Skin = Skin {
    stylesheet: styles::MODERN,
    backdrop: Backdrop::None,
    terminal_banner: false,
    header_card: true,
    name_cursor: false,
    project_layout: ProjectLayout::Grid,
    section_subtitles: true,
    button_variants: true,
    button_row_class: "buttons",
    email_label: "Let's Connect",
    projects_heading: "Featured Projects",
};

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Minimalist,
        Theme::DevFolio,
        Theme::Creative,
        Theme::DarkMode,
        Theme::Modern,
    ];

    /// Exact, case-sensitive match on the theme id.
    pub fn parse(id: &str) -> Option<Theme> {
        Theme::ALL.into_iter().find(|t| t.id() == id)
    }

    /// Like [`Theme::parse`], but unknown ids silently become `Minimalist`.
    pub fn from_id(id: &str) -> Theme {
        Theme::parse(id).unwrap_or_default()
    }

    pub fn id(self) -> &'static str {
        match self {
            Theme::Minimalist => "minimalist",
            Theme::DevFolio => "devfolio",
            Theme::Creative => "creative",
            Theme::DarkMode => "darkmode",
            Theme::Modern => "modern",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Minimalist => "Minimalist",
            Theme::DevFolio => "DevFolio",
            Theme::Creative => "Creative Edge",
            Theme::DarkMode => "Dark Mode",
            Theme::Modern => "Modern Pro",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Theme::Minimalist => "Clean and simple design focused on content",
            Theme::DevFolio => "Perfect for developers with code-focused layout",
            Theme::Creative => "Bold and artistic with vibrant colors",
            Theme::DarkMode => "Sleek dark theme for modern professionals",
            Theme::Modern => "Professional layout with glassmorphism effects",
        }
    }

    pub fn skin(self) -> &'static Skin {
        match self {
            Theme::Minimalist => &MINIMALIST,
            Theme::DevFolio => &DEVFOLIO,
            Theme::Creative => &CREATIVE,
            Theme::DarkMode => &DARKMODE,
            Theme::Modern => &MODERN,
        }
    }
}
