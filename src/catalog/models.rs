use crate::timing::duration::parse_duration;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

pub const UNKNOWN_COURSE: &str = "Unknown Course";
pub const UNTITLED_SECTION: &str = "Untitled Section";
pub const UNKNOWN_TIME: &str = "Unknown Time";
pub const NO_TITLE: &str = "No Title";
pub const UNKNOWN_DURATION: &str = "Unknown";
pub const LECTURE_ITEM_TYPE: &str = "lecture";

/// Nested record: `null` or the wrong JSON type falls back to the default.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(value).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Malformed record in export, using defaults");
        T::default()
    }))
}

/// List field: elements that fail to deserialize are dropped, the rest keep
/// their order. A non-array value is an empty list.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let elements = match Value::deserialize(deserializer)? {
        Value::Array(elements) => elements,
        Value::Null => return Ok(Vec::new()),
        other => {
            tracing::warn!(value = %other, "Expected a list in export, ignoring");
            return Ok(Vec::new());
        }
    };

    Ok(elements
        .into_iter()
        .filter_map(|element| match serde_json::from_value(element) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping malformed list entry");
                None
            }
        })
        .collect())
}

/// Text field: numbers and booleans are rendered as text, anything else is absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// One entry of the export's course map.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Course {
    /// Key of the course in the export; filled in by the catalog loader.
    #[serde(skip)]
    pub id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub curriculum_context: CurriculumContext,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CurriculumContext {
    #[serde(default, deserialize_with = "lenient")]
    pub data: CurriculumData,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CurriculumData {
    #[serde(default, deserialize_with = "lenient_text")]
    pub course_title: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub sections: Vec<Section>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Section {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub content_length_text: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub items: Vec<Item>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Item {
    #[serde(default, deserialize_with = "lenient_text")]
    pub item_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub content_summary: Option<String>,
}

impl Course {
    pub fn title(&self) -> &str {
        self.curriculum_context
            .data
            .course_title
            .as_deref()
            .unwrap_or(UNKNOWN_COURSE)
    }

    /// Sections in export order. Empty means "no sections".
    pub fn list_sections(&self) -> &[Section] {
        &self.curriculum_context.data.sections
    }
}

impl Section {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED_SECTION)
    }

    pub fn length_label(&self) -> &str {
        self.content_length_text.as_deref().unwrap_or(UNKNOWN_TIME)
    }

    /// Lecture items only, in their original order.
    pub fn list_lectures(&self) -> Vec<Lecture<'_>> {
        self.items
            .iter()
            .filter(|item| item.is_lecture())
            .map(Lecture::from_item)
            .collect()
    }

    pub fn lecture_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_lecture()).count()
    }
}

impl Item {
    pub fn is_lecture(&self) -> bool {
        self.item_type.as_deref() == Some(LECTURE_ITEM_TYPE)
    }
}

/// Borrowed view of a lecture item with its duration already parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Lecture<'a> {
    pub title: &'a str,
    pub duration: Option<&'a str>,
    pub seconds: u64,
}

impl<'a> Lecture<'a> {
    pub fn new(title: &'a str, duration: Option<&'a str>) -> Self {
        Self {
            title,
            duration,
            seconds: parse_duration(duration.unwrap_or("0:00")),
        }
    }

    pub fn from_item(item: &'a Item) -> Self {
        Self::new(
            item.title.as_deref().unwrap_or(NO_TITLE),
            item.content_summary.as_deref(),
        )
    }

    pub fn duration_label(&self) -> &'a str {
        self.duration.unwrap_or(UNKNOWN_DURATION)
    }
}

impl fmt::Display for Lecture<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.title, self.duration_label())
    }
}
