//! External lesson record shape.
//!
//! [`LessonRecord`] is the typed form of one entry in a lessons file. Every
//! field has a documented default so a sparse record decodes the same way
//! from JSON or YAML:
//!
//! | field             | default       |
//! |-------------------|---------------|
//! | `title`           | `""`          |
//! | `objectives`      | `[]`          |
//! | `plan`            | `[]`          |
//! | `is_topic`        | `true`        |
//! | `is_continuation` | `false`       |
//! | `id`              | `"Undefined"` |
//! | `count_within`    | absent        |
//!
//! Files written by the older tool are accepted as well: `continue_topic` is
//! read as `is_continuation`, the `__lesson__` marker key is ignored, and
//! objectives stored as a single string (`""` meaning none) are read as a
//! list.
//!
//! # Examples
//!
//! ```
//! use lps_core::LessonRecord;
//!
//! let record: LessonRecord = serde_json::from_str(r#"{"title": "Intro", "id": "L1"}"#).unwrap();
//! assert!(record.is_topic);
//! assert!(record.plan.is_empty());
//! ```

use crate::LessonId;
use serde::{Deserialize, Deserializer, Serialize};
use std::num::NonZeroU32;

/// One lesson as stored in a lessons file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonRecord {
    /// Display text
    #[serde(default)]
    pub title: String,

    /// Learning objectives, in order
    #[serde(default, deserialize_with = "string_or_list")]
    pub objectives: Vec<String>,

    /// Plan bullets, in order
    #[serde(default, deserialize_with = "string_or_list")]
    pub plan: Vec<String>,

    /// Whether the lesson carries a topic prefix
    #[serde(default = "default_is_topic")]
    pub is_topic: bool,

    /// Whether the lesson continues the previous lesson's topic
    #[serde(default, alias = "continue_topic")]
    pub is_continuation: bool,

    /// Unique id keying the objectives macro
    #[serde(default = "default_id")]
    pub id: String,

    /// Explicit 1-based position in a continuation chain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count_within: Option<NonZeroU32>,
}

const fn default_is_topic() -> bool {
    true
}

fn default_id() -> String {
    LessonId::UNDEFINED.to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrList {
    One(String),
    Many(Vec<String>),
}

fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<StringOrList>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(StringOrList::One(s)) if s.is_empty() => Vec::new(),
        Some(StringOrList::One(s)) => vec![s],
        Some(StringOrList::Many(items)) => items,
    })
}

impl Default for LessonRecord {
    fn default() -> Self {
        Self {
            title: String::new(),
            objectives: Vec::new(),
            plan: Vec::new(),
            is_topic: default_is_topic(),
            is_continuation: false,
            id: default_id(),
            count_within: None,
        }
    }
}

/// Produces `count` blank records for an authoring skeleton.
///
/// Every record carries the placeholder id `Undefined`, so a unit built from
/// an unedited skeleton fails duplicate-id validation until authors assign
/// real ids.
///
/// # Examples
///
/// ```
/// use lps_core::blank_records;
///
/// let records = blank_records(3);
/// assert_eq!(records.len(), 3);
/// assert!(records.iter().all(|r| r.id == "Undefined"));
/// ```
#[must_use]
pub fn blank_records(count: usize) -> Vec<LessonRecord> {
    vec![LessonRecord::default(); count]
}
