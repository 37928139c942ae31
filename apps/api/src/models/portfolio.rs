use bytes::Bytes;
use serde::{Deserialize, Deserializer, Serialize};

/// Treats a missing field and an explicit `null` the same way: both become `T::default()`.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Returns the trimmed value, or `None` when nothing but whitespace is left.
pub fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Same as [`non_blank`] for optional fields.
pub fn non_blank_opt(value: Option<&str>) -> Option<&str> {
    value.and_then(non_blank)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub bio: String,
    #[serde(deserialize_with = "nullable")]
    pub github: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    #[serde(deserialize_with = "nullable")]
    pub email: String,
    #[serde(deserialize_with = "nullable")]
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialInfo {
    #[serde(deserialize_with = "nullable")]
    pub linkedin: String,
    #[serde(deserialize_with = "nullable")]
    pub twitter: String,
    #[serde(deserialize_with = "nullable")]
    pub instagram: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub level: SkillLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub company: String,
    #[serde(default, deserialize_with = "nullable")]
    pub position: String,
    /// Free text ("Jan 2020 - Present"); never parsed.
    #[serde(default, deserialize_with = "nullable")]
    pub duration: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub repo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    /// Order matters: tag colours cycle by position.
    #[serde(default, deserialize_with = "nullable")]
    pub technologies: Vec<String>,
}

/// Opaque handle to an uploaded resume.
///
/// The renderer only asks whether one exists. Browsers serialize a `File` as `{}`,
/// so any non-null JSON value counts as present; the bytes only arrive through
/// the multipart download path.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResumeRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip)]
    pub bytes: Bytes,
}

impl<'de> Deserialize<'de> for ResumeRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let file_name = match &value {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Object(map) => map
                .get("file_name")
                .or_else(|| map.get("name"))
                .and_then(|v| v.as_str())
                .map(String::from),
            _ => None,
        };
        Ok(ResumeRef {
            file_name,
            bytes: Bytes::new(),
        })
    }
}

/// Aggregate root for one portfolio. Lists are never absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioData {
    #[serde(deserialize_with = "nullable")]
    pub personal: PersonalInfo,
    #[serde(deserialize_with = "nullable")]
    pub contact: ContactInfo,
    #[serde(deserialize_with = "nullable")]
    pub social: SocialInfo,
    #[serde(deserialize_with = "nullable")]
    pub skills: Vec<Skill>,
    #[serde(deserialize_with = "nullable")]
    pub experience: Vec<WorkExperience>,
    #[serde(deserialize_with = "nullable")]
    pub achievements: Vec<Achievement>,
    #[serde(deserialize_with = "nullable")]
    pub projects: Vec<Project>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume: Option<ResumeRef>,
}

impl PortfolioData {
    pub fn has_resume(&self) -> bool {
        self.resume.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_deserializes_to_default() {
        let data: PortfolioData = serde_json::from_value(json!({})).unwrap();
        assert_eq!(data, PortfolioData::default());
        assert!(data.skills.is_empty());
        assert!(!data.has_resume());
    }

    #[test]
    fn test_nulls_become_defaults() {
        let data: PortfolioData = serde_json::from_value(json!({
            "personal": { "name": null, "bio": "Hi" },
            "contact": null,
            "skills": null,
            "projects": [{ "id": "p1", "name": "Engine", "technologies": null }]
        }))
        .unwrap();
        assert_eq!(data.personal.name, "");
        assert_eq!(data.personal.bio, "Hi");
        assert_eq!(data.contact, ContactInfo::default());
        assert!(data.skills.is_empty());
        assert!(data.projects[0].technologies.is_empty());
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let result: Result<PortfolioData, _> = serde_json::from_value(json!({
            "skills": [{ "name": "Rust", "level": "Expert" }]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_skill_level_is_rejected() {
        let result: Result<Skill, _> =
            serde_json::from_value(json!({ "id": "1", "name": "Rust", "level": "Guru" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_skill_level_defaults_to_intermediate() {
        let skill: Skill = serde_json::from_value(json!({ "id": "1", "name": "Rust" })).unwrap();
        assert_eq!(skill.level, SkillLevel::Intermediate);
    }

    #[test]
    fn test_browser_file_object_counts_as_resume() {
        let data: PortfolioData = serde_json::from_value(json!({ "resume": {} })).unwrap();
        assert!(data.has_resume());

        let data: PortfolioData = serde_json::from_value(json!({ "resume": null })).unwrap();
        assert!(!data.has_resume());

        let data: PortfolioData =
            serde_json::from_value(json!({ "resume": { "name": "cv.pdf" } })).unwrap();
        assert_eq!(
            data.resume.and_then(|r| r.file_name).as_deref(),
            Some("cv.pdf")
        );
    }

    #[test]
    fn test_technology_order_is_preserved() {
        let project: Project = serde_json::from_value(json!({
            "id": "p", "technologies": ["Rust", "Axum", "Tokio", "Serde"]
        }))
        .unwrap();
        assert_eq!(project.technologies, vec!["Rust", "Axum", "Tokio", "Serde"]);
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("  ada  "), Some("ada"));
        assert_eq!(non_blank("   "), None);
        assert_eq!(non_blank_opt(None), None);
        assert_eq!(non_blank_opt(Some(" x")), Some("x"));
    }
}
