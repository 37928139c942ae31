use serde::{Deserialize, Serialize};

use crate::models::{non_blank, PortfolioData};
use crate::render::sections::{email_href, github_href, linkedin_href};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortfolioSection {
    Personal,
    Contact,
    Social,
    Skills,
    Experience,
    Achievements,
    Resume,
    Projects,
}

impl PortfolioSection {
    pub fn label(self) -> &'static str {
        match self {
            PortfolioSection::Personal => "Personal information",
            PortfolioSection::Contact => "Contact details",
            PortfolioSection::Social => "Social links",
            PortfolioSection::Skills => "Skills",
            PortfolioSection::Experience => "Work experience",
            PortfolioSection::Achievements => "Achievements",
            PortfolioSection::Resume => "Resume",
            PortfolioSection::Projects => "Projects",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionCoverage {
    pub section: PortfolioSection,
    /// Real data will render (rather than a placeholder or nothing).
    pub included: bool,
    pub entry_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletenessReport {
    pub overall_score: f64,
    pub sections: Vec<SectionCoverage>,
    pub missing_sections: Vec<PortfolioSection>,
}

const SECTION_WEIGHTS: &[(PortfolioSection, f64)] = &[
    (PortfolioSection::Personal, 0.25),
    (PortfolioSection::Contact, 0.15),
    (PortfolioSection::Social, 0.05),
    (PortfolioSection::Skills, 0.15),
    (PortfolioSection::Experience, 0.15),
    (PortfolioSection::Achievements, 0.05),
    (PortfolioSection::Resume, 0.05),
    (PortfolioSection::Projects, 0.15),
];

pub fn compute_completeness_report(data: &PortfolioData) -> CompletenessReport {
    let mut sections = Vec::with_capacity(SECTION_WEIGHTS.len());
    let mut missing_sections = Vec::new();
    let mut weighted_score_sum = 0.0;

    for &(section, weight) in SECTION_WEIGHTS {
        let entry_count = entry_count(data, section);
        let included = entry_count > 0;

        if included {
            weighted_score_sum += weight;
        } else {
            missing_sections.push(section);
        }
        sections.push(SectionCoverage {
            section,
            included,
            entry_count,
        });
    }

    let total_weight: f64 = SECTION_WEIGHTS.iter().map(|(_, w)| w).sum();
    let overall_score = if total_weight > 0.0 {
        (weighted_score_sum / total_weight).clamp(0.0, 1.0)
    } else {
        0.0
    };

    CompletenessReport {
        overall_score,
        sections,
        missing_sections,
    }
}

/// Rendered fields for the single-record sections, list length for the rest.
///
/// Fields the page never shows (phone, twitter, instagram) and links the
/// renderer drops do not count.
fn entry_count(data: &PortfolioData, section: PortfolioSection) -> usize {
    match section {
        PortfolioSection::Personal => {
            let p = &data.personal;
            [
                non_blank(&p.name).is_some(),
                non_blank(&p.bio).is_some(),
                github_href(data).is_some(),
            ]
            .into_iter()
            .filter(|&rendered| rendered)
            .count()
        }
        PortfolioSection::Contact => usize::from(email_href(data).is_some()),
        PortfolioSection::Social => usize::from(linkedin_href(data).is_some()),
        PortfolioSection::Skills => data.skills.len(),
        PortfolioSection::Experience => data.experience.len(),
        PortfolioSection::Achievements => data.achievements.len(),
        PortfolioSection::Resume => usize::from(data.has_resume()),
        PortfolioSection::Projects => data.projects.len(),
    }
}
