//! Job posting and lookup domain models.
//!
//! These are plain records returned by the job-board API. The client never
//! mutates or persists them; they are held in memory only while a view is
//! mounted. Identifiers arrive as numbers from some boards and as strings from
//! others, so both are normalized to `String`.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// A reference record: department, location or function.
///
/// Lookup lists populate the filter dropdowns and resolve display labels for
/// active filters. Jobs embed the same shape for their department and location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lookup {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub title: String,
}

impl Lookup {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// A single posted position.
///
/// # Fields
///
/// - `id`: Board identifier, used in the detail path `/jobs/{id}`
/// - `department` / `location`: Optional embedded lookups
/// - `job_type`: Employment type tag (`full-time`, `contract`, ...)
/// - `description`: Trusted HTML, rendered as structured text
/// - `apply_url`: External application page
/// - `company`: Hiring company, when the board reports one
/// - `posted_date`: Raw posting timestamp as sent by the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub department: Option<Lookup>,
    #[serde(default)]
    pub location: Option<Lookup>,
    #[serde(default, rename = "type")]
    pub job_type: Option<String>,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub experience: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub apply_url: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub posted_date: Option<String>,
}

impl Job {
    /// Creates a job with only an identifier and title set.
    ///
    /// # Examples
    ///
    /// ```
    /// use zjobs::domain::{Job, Lookup};
    ///
    /// let mut job = Job::new("1", "Engineer");
    /// job.department = Some(Lookup::new("d1", "Engineering"));
    /// assert_eq!(job.department_id(), Some("d1"));
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            department: None,
            location: None,
            job_type: None,
            experience: None,
            description: None,
            apply_url: None,
            company: None,
            posted_date: None,
        }
    }

    /// Identifier of the embedded department, if any.
    #[must_use]
    pub fn department_id(&self) -> Option<&str> {
        self.department.as_ref().map(|d| d.id.as_str())
    }

    /// The description markup, or an empty string when the board sent none.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Upper-cased type tag, as shown on cards and the detail panel.
    #[must_use]
    pub fn type_tag(&self) -> Option<String> {
        self.job_type
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .map(str::to_uppercase)
    }

    /// Parses `posted_date`, accepting RFC 3339 and zone-less ISO timestamps.
    #[must_use]
    pub fn posted_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.posted_date.as_deref()?.trim();
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Utc));
        }
        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(|naive| naive.and_utc())
    }

    /// Returns a short human-readable age of the posting relative to `now`.
    ///
    /// - Less than 1 minute: "just posted"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - 1 day or more: "Xd ago"
    ///
    /// Returns `None` when the posting date is missing or unparseable.
    #[must_use]
    pub fn posted_ago(&self, now: DateTime<Utc>) -> Option<String> {
        let diff = (now - self.posted_at()?).num_seconds().max(0);

        Some(if diff < SECONDS_PER_MINUTE {
            "just posted".to_string()
        } else if diff < SECONDS_PER_HOUR {
            format!("{}m ago", diff / SECONDS_PER_MINUTE)
        } else if diff < SECONDS_PER_DAY {
            format!("{}h ago", diff / SECONDS_PER_HOUR)
        } else {
            format!("{}d ago", diff / SECONDS_PER_DAY)
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Int(i64),
    Float(f64),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Int(i) => i.to_string(),
            StringOrNumber::Float(f) => f.to_string(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(String::from)
}

fn optional_string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?
        .map(String::from)
        .filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn numeric_ids_are_normalized_to_strings() {
        let job: Job = serde_json::from_str(
            r#"{"id": 42, "title": "Engineer", "department": {"id": 7, "title": "Engineering"}}"#,
        )
        .unwrap();

        assert_eq!(job.id, "42");
        assert_eq!(job.department_id(), Some("7"));
    }

    #[test]
    fn optional_fields_default_when_absent_or_null() {
        let job: Job =
            serde_json::from_str(r#"{"id": "a", "title": "Designer", "description": null}"#).unwrap();

        assert!(job.location.is_none());
        assert!(job.apply_url.is_none());
        assert_eq!(job.description(), "");
        assert!(job.type_tag().is_none());
    }

    #[test]
    fn camel_case_fields_are_mapped() {
        let job: Job = serde_json::from_str(
            r#"{"id": 1, "title": "T", "type": "full-time", "applyUrl": "https://apply", "experience": 3}"#,
        )
        .unwrap();

        assert_eq!(job.type_tag().as_deref(), Some("FULL-TIME"));
        assert_eq!(job.apply_url.as_deref(), Some("https://apply"));
        assert_eq!(job.experience.as_deref(), Some("3"));
    }

    #[test]
    fn posted_ago_handles_zone_less_timestamps() {
        let mut job = Job::new("1", "T");
        job.posted_date = Some("2024-01-01T00:00:00".to_string());
        let now = Utc.with_ymd_and_hms(2024, 1, 4, 1, 0, 0).unwrap();

        assert_eq!(job.posted_ago(now).as_deref(), Some("3d ago"));

        job.posted_date = Some("not a date".to_string());
        assert!(job.posted_ago(now).is_none());
    }
}
