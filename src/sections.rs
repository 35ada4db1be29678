//! Page sections and navigation entries.
//!
//! The site is a single page made of sections stacked in a fixed order.
//! Four sections are always present; the others follow the `[sections]`
//! switches in `config.toml`. The navigation bar lists exactly the
//! visible sections, each linking to its anchor.

use crate::config::SectionsConfig;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Skills,
    Experience,
    Education,
    Projects,
    Blog,
    Contact,
}

impl Section {
    /// Page order.
    pub const ALL: [Section; 8] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Education,
        Section::Projects,
        Section::Blog,
        Section::Contact,
    ];

    /// Navigation label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Education => "Education",
            Self::Projects => "Projects",
            Self::Blog => "Blog",
            Self::Contact => "Contact",
        }
    }

    /// In-page anchor, e.g. `#experience`.
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Home => "#home",
            Self::About => "#about",
            Self::Skills => "#skills",
            Self::Experience => "#experience",
            Self::Education => "#education",
            Self::Projects => "#projects",
            Self::Blog => "#blog",
            Self::Contact => "#contact",
        }
    }

    pub fn is_visible(self, config: &SectionsConfig) -> bool {
        match self {
            Self::Experience => config.show_experience,
            Self::Education => config.show_education,
            Self::Projects => config.show_projects,
            Self::Blog => config.show_blog,
            Self::Home | Self::About | Self::Skills | Self::Contact => true,
        }
    }
}

/// A navigation bar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

/// Visible sections in page order.
pub fn visible_sections(config: &SectionsConfig) -> Vec<Section> {
    Section::ALL
        .into_iter()
        .filter(|s| s.is_visible(config))
        .collect()
}

/// Navigation entries for the visible sections.
pub fn nav_items(config: &SectionsConfig) -> Vec<NavItem> {
    visible_sections(config)
        .into_iter()
        .map(|s| NavItem {
            name: s.label(),
            href: s.anchor(),
        })
        .collect()
}
