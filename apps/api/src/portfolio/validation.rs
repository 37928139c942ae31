use std::collections::HashSet;
use std::sync::OnceLock;

use email_address::EmailAddress;
use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::models::{non_blank, non_blank_opt, PortfolioData};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Dotted path into the portfolio, e.g. `projects[2].repo`.
    pub field: String,
    pub message: String,
}

const NAME_MIN_CHARS: usize = 2;
const TEXT_MIN_CHARS: usize = 10;

// ASCII digits only.
const PHONE_PATTERN: &str = r"^\+?[1-9][0-9]{0,15}$";

/// Checks a portfolio against the form rules.
///
/// Advisory only: preview and download render whatever they are given. Issues come
/// back in form order (personal, contact, social, skills, experience,
/// achievements, projects) and list items in stored order.
pub fn validate_portfolio(data: &PortfolioData) -> Vec<ValidationIssue> {
    let mut issues = Issues::default();

    let personal = &data.personal;
    issues.min_chars("personal.name", &personal.name, NAME_MIN_CHARS, "Name");
    issues.min_chars("personal.bio", &personal.bio, TEXT_MIN_CHARS, "Bio");
    match non_blank(&personal.github) {
        None => issues.push("personal.github", "GitHub URL is required"),
        Some(url) if !is_web_url(url) => {
            issues.push("personal.github", "Please enter a valid GitHub URL")
        }
        Some(_) => {}
    }

    match non_blank(&data.contact.email) {
        None => issues.push("contact.email", "Email is required"),
        Some(email) if !EmailAddress::is_valid(email) => {
            issues.push("contact.email", "Please enter a valid email")
        }
        Some(_) => {}
    }
    if let Some(phone) = non_blank(&data.contact.phone) {
        if !is_phone(phone) {
            issues.push("contact.phone", "Please enter a valid phone number");
        }
    }

    let social = &data.social;
    for (field, value, label) in [
        ("social.linkedin", &social.linkedin, "LinkedIn"),
        ("social.twitter", &social.twitter, "Twitter"),
        ("social.instagram", &social.instagram, "Instagram"),
    ] {
        if non_blank(value).is_some_and(|url| !is_web_url(url)) {
            issues.push(field, format!("Please enter a valid {label} URL"));
        }
    }

    for (i, skill) in data.skills.iter().enumerate() {
        issues.required(&format!("skills[{i}].name"), &skill.name, "Skill name is required");
    }
    issues.duplicate_ids("skills", data.skills.iter().map(|s| s.id.as_str()));

    for (i, exp) in data.experience.iter().enumerate() {
        let path = format!("experience[{i}]");
        issues.required(&format!("{path}.company"), &exp.company, "Company name is required");
        issues.required(&format!("{path}.position"), &exp.position, "Position is required");
        issues.required(&format!("{path}.duration"), &exp.duration, "Duration is required");
        issues.description(&format!("{path}.description"), &exp.description);
    }
    issues.duplicate_ids("experience", data.experience.iter().map(|e| e.id.as_str()));

    for (i, achievement) in data.achievements.iter().enumerate() {
        let path = format!("achievements[{i}]");
        issues.required(
            &format!("{path}.title"),
            &achievement.title,
            "Achievement title is required",
        );
        issues.description(&format!("{path}.description"), &achievement.description);
    }
    issues.duplicate_ids(
        "achievements",
        data.achievements.iter().map(|a| a.id.as_str()),
    );

    for (i, project) in data.projects.iter().enumerate() {
        let path = format!("projects[{i}]");
        issues.required(&format!("{path}.name"), &project.name, "Project name is required");
        issues.description(&format!("{path}.description"), &project.description);
        match non_blank(&project.repo) {
            None => issues.push(format!("{path}.repo"), "Repository URL is required"),
            Some(url) if !is_web_url(url) => {
                issues.push(format!("{path}.repo"), "Please enter a valid repository URL")
            }
            Some(_) => {}
        }
        if non_blank_opt(project.demo.as_deref()).is_some_and(|url| !is_web_url(url)) {
            issues.push(format!("{path}.demo"), "Please enter a valid demo URL");
        }
        if !project.technologies.iter().any(|t| non_blank(t).is_some()) {
            issues.push(
                format!("{path}.technologies"),
                "At least one technology is required",
            );
        }
    }
    issues.duplicate_ids("projects", data.projects.iter().map(|p| p.id.as_str()));

    issues.0
}

/// The fields a download cannot go ahead without.
pub fn missing_download_fields(data: &PortfolioData) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if non_blank(&data.personal.name).is_none() {
        missing.push("personal.name");
    }
    if non_blank(&data.contact.email).is_none() {
        missing.push("contact.email");
    }
    missing
}

#[derive(Default)]
struct Issues(Vec<ValidationIssue>);

impl Issues {
    fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(ValidationIssue {
            field: field.into(),
            message: message.into(),
        });
    }

    fn required(&mut self, field: &str, value: &str, message: &str) {
        if non_blank(value).is_none() {
            self.push(field, message);
        }
    }

    fn min_chars(&mut self, field: &str, value: &str, min: usize, label: &str) {
        match non_blank(value) {
            None => self.push(field, format!("{label} is required")),
            Some(v) if v.chars().count() < min => {
                self.push(field, format!("{label} must be at least {min} characters"))
            }
            Some(_) => {}
        }
    }

    fn description(&mut self, field: &str, value: &str) {
        self.min_chars(field, value, TEXT_MIN_CHARS, "Description");
    }

    fn duplicate_ids<'a>(&mut self, list: &str, ids: impl Iterator<Item = &'a str>) {
        let mut seen = HashSet::new();
        for (i, id) in ids.enumerate() {
            if !seen.insert(id) {
                self.push(format!("{list}[{i}].id"), format!("Duplicate id \"{id}\""));
            }
        }
    }
}

/// Absolute `http`/`https` URL with a host.
fn is_web_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())
        .unwrap_or(false)
}

fn is_phone(value: &str) -> bool {
    static PHONE: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    matches!(PHONE.get_or_init(|| Regex::new(PHONE_PATTERN)), Ok(re) if re.is_match(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::{Achievement, Project, Skill, SkillLevel, WorkExperience};
    use serde_json::json;

    fn valid() -> PortfolioData {
        serde_json::from_value(json!({
            "personal": {
                "name": "Ada Lovelace",
                "bio": "First programmer, of sorts.",
                "github": "https://github.com/ada"
            },
            "contact": { "email": "ada@example.com", "phone": "+447700900123" },
            "social": { "linkedin": "https://linkedin.com/in/ada" },
            "skills": [{ "id": "s1", "name": "Python", "level": "Expert" }],
            "experience": [{
                "id": "e1",
                "company": "Analytical Society",
                "position": "Analyst",
                "duration": "1842 - 1843",
                "description": "Annotated the engine paper."
            }],
            "achievements": [{
                "id": "a1",
                "title": "Note G",
                "description": "Published the first algorithm."
            }],
            "projects": [{
                "id": "p1",
                "name": "Bernoulli",
                "description": "Bernoulli numbers on gears.",
                "repo": "https://github.com/ada/bernoulli",
                "technologies": ["Gears"]
            }]
        }))
        .unwrap()
    }

    fn fields(issues: &[ValidationIssue]) -> Vec<&str> {
        issues.iter().map(|i| i.field.as_str()).collect()
    }

    #[test]
    fn test_valid_portfolio_has_no_issues() {
        assert_eq!(validate_portfolio(&valid()), vec![]);
    }

    #[test]
    fn test_empty_portfolio_reports_required_fields() {
        let issues = validate_portfolio(&PortfolioData::default());
        assert_eq!(
            fields(&issues),
            vec!["personal.name", "personal.bio", "personal.github", "contact.email"]
        );
        assert_eq!(issues[0].message, "Name is required");
    }

    #[test]
    fn test_length_minimums() {
        let mut data = valid();
        data.personal.name = "A".into();
        data.personal.bio = "Too short".into();
        let issues = validate_portfolio(&data);
        assert_eq!(issues[0].message, "Name must be at least 2 characters");
        assert_eq!(issues[1].message, "Bio must be at least 10 characters");
    }

    #[test]
    fn test_url_rules() {
        let mut data = valid();
        data.personal.github = "github.com/ada".into();
        data.social.twitter = "javascript:alert(1)".into();
        data.projects[0].demo = Some("ftp://files.example.com".into());
        let issues = validate_portfolio(&data);
        assert_eq!(
            fields(&issues),
            vec!["personal.github", "social.twitter", "projects[0].demo"]
        );
        assert_eq!(issues[1].message, "Please enter a valid Twitter URL");
    }

    #[test]
    fn test_contact_rules() {
        let mut data = valid();
        data.contact.email = "not-an-email".into();
        data.contact.phone = "0123".into();
        let issues = validate_portfolio(&data);
        assert_eq!(fields(&issues), vec!["contact.email", "contact.phone"]);

        data.contact.email = "ada@example.com".into();
        data.contact.phone = String::new();
        assert!(validate_portfolio(&data).is_empty());
    }

    #[test]
    fn test_phone_pattern() {
        assert!(is_phone("+15550100"));
        assert!(is_phone("9"));
        assert!(!is_phone("+0123"));
        assert!(!is_phone("555-0100"));
        assert!(!is_phone("12345678901234567"));
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        assert!(!is_phone("+1\u{661}\u{662}\u{663}"));
        assert!(!is_phone("\u{967}\u{968}"));
    }

    #[test]
    fn test_list_item_rules() {
        let mut data = valid();
        data.skills.push(Skill {
            id: "s2".into(),
            name: "  ".into(),
            level: SkillLevel::Beginner,
        });
        data.experience.push(WorkExperience {
            id: "e2".into(),
            company: String::new(),
            position: "Dev".into(),
            duration: "2020".into(),
            description: "Short".into(),
            location: None,
        });
        data.achievements.push(Achievement {
            id: "a2".into(),
            title: String::new(),
            description: "Long enough description.".into(),
        });
        data.projects.push(Project {
            id: "p2".into(),
            name: "Thing".into(),
            description: "A thing that exists.".into(),
            repo: String::new(),
            demo: None,
            technologies: vec![" ".into()],
        });

        let issues = validate_portfolio(&data);
        assert_eq!(
            fields(&issues),
            vec![
                "skills[1].name",
                "experience[1].company",
                "experience[1].description",
                "achievements[1].title",
                "projects[1].repo",
                "projects[1].technologies",
            ]
        );
        assert_eq!(issues[2].message, "Description must be at least 10 characters");
        assert_eq!(issues[4].message, "Repository URL is required");
    }

    #[test]
    fn test_duplicate_ids_are_reported() {
        let mut data = valid();
        let mut copy = data.skills[0].clone();
        copy.name = "Rust".into();
        data.skills.push(copy);
        let issues = validate_portfolio(&data);
        assert_eq!(fields(&issues), vec!["skills[1].id"]);
        assert_eq!(issues[0].message, "Duplicate id \"s1\"");
    }

    #[test]
    fn test_missing_download_fields() {
        assert!(missing_download_fields(&valid()).is_empty());

        let mut data = valid();
        data.contact.email = " ".into();
        assert_eq!(missing_download_fields(&data), vec!["contact.email"]);

        assert_eq!(
            missing_download_fields(&PortfolioData::default()),
            vec!["personal.name", "contact.email"]
        );
    }
}
