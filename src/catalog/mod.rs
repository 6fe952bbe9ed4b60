//! Read-only snapshot of a course curriculum export.
//!
//! The export is a JSON object whose root key (normally `json_data`) maps
//! course ids to course records. Course order follows the file.

pub mod models;
pub mod outline;

use crate::error::CatalogError;
use models::{Course, Section};
use serde_json::Value;
use std::path::Path;

pub const DEFAULT_ROOT_KEY: &str = "json_data";

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        Self::from_json_str_with_root(text, DEFAULT_ROOT_KEY)
    }

    pub fn from_json_str_with_root(text: &str, root_key: &str) -> Result<Self, CatalogError> {
        let raw: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(raw, root_key))
    }

    pub fn load<P: AsRef<Path>>(path: P, root_key: &str) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str_with_root(&text, root_key)?;
        tracing::info!(
            path = %path.display(),
            courses = catalog.courses.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    fn from_value(mut raw: Value, root_key: &str) -> Self {
        let Some(Value::Object(entries)) = raw.get_mut(root_key).map(Value::take) else {
            tracing::warn!(root_key, "Catalog has no course map under root key");
            return Self::default();
        };

        let mut courses = Vec::with_capacity(entries.len());
        for (id, value) in entries {
            match serde_json::from_value::<Course>(value) {
                Ok(mut course) => {
                    course.id = id;
                    courses.push(course);
                }
                Err(e) => tracing::warn!(course_id = %id, error = %e, "Skipping malformed course"),
            }
        }

        Self { courses }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// `(id, title)` pairs in export order.
    pub fn list_courses(&self) -> Vec<(&str, &str)> {
        self.courses
            .iter()
            .map(|c| (c.id.as_str(), c.title()))
            .collect()
    }

    /// Look a course up by id, falling back to its 1-based position.
    pub fn course(&self, selector: &str) -> Result<&Course, CatalogError> {
        if let Some(course) = self.courses.iter().find(|c| c.id == selector) {
            return Ok(course);
        }

        selector
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| self.courses.get(idx))
            .ok_or_else(|| CatalogError::CourseNotFound(selector.to_string()))
    }
}

impl Course {
    /// 1-based section lookup.
    pub fn section(&self, index: usize) -> Result<&Section, CatalogError> {
        let sections = self.list_sections();
        index
            .checked_sub(1)
            .and_then(|idx| sections.get(idx))
            .ok_or(CatalogError::SectionOutOfRange {
                index,
                count: sections.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = r#"{
        "json_data": {
            "9001": {
                "curriculum_context": {
                    "data": {
                        "course_title": "Async Rust",
                        "sections": [
                            {"title": "Futures", "items": [
                                {"item_type": "lecture", "title": "Poll", "content_summary": "10:00"}
                            ]}
                        ]
                    }
                }
            },
            "17": {"curriculum_context": {"data": {}}},
            "broken": 42
        }
    }"#;

    #[test]
    fn test_courses_keep_file_order() {
        let catalog = Catalog::from_json_str(EXPORT).unwrap();
        assert_eq!(
            catalog.list_courses(),
            vec![("9001", "Async Rust"), ("17", "Unknown Course")]
        );
    }

    #[test]
    fn test_course_lookup_by_id_then_position() {
        let catalog = Catalog::from_json_str(EXPORT).unwrap();
        assert_eq!(catalog.course("17").unwrap().id, "17");
        assert_eq!(catalog.course("1").unwrap().id, "9001");
        assert_eq!(catalog.course("2").unwrap().id, "17");
        assert!(matches!(
            catalog.course("3"),
            Err(CatalogError::CourseNotFound(_))
        ));
        assert!(catalog.course("0").is_err());
    }

    #[test]
    fn test_section_lookup() {
        let catalog = Catalog::from_json_str(EXPORT).unwrap();
        let course = catalog.course("9001").unwrap();
        assert_eq!(course.section(1).unwrap().title(), "Futures");
        assert!(matches!(
            course.section(2),
            Err(CatalogError::SectionOutOfRange { index: 2, count: 1 })
        ));
        assert!(course.section(0).is_err());
    }

    #[test]
    fn test_mistyped_item_keeps_course_and_sections() {
        let export = r#"{"json_data": {"c1": {"curriculum_context": {"data": {
            "course_title": "Robust",
            "sections": [
                {"title": "S1", "items": [
                    {"item_type": "lecture", "title": "Good", "content_summary": "10:00"}
                ]},
                {"title": "S2", "items": [
                    {"item_type": "lecture", "title": 7, "content_summary": "5:00"}
                ]}
            ]
        }}}}}"#;

        let catalog = Catalog::from_json_str(export).unwrap();
        assert_eq!(catalog.list_courses(), vec![("c1", "Robust")]);

        let course = catalog.course("c1").unwrap();
        assert_eq!(course.list_sections().len(), 2);
        assert_eq!(course.section(1).unwrap().list_lectures()[0].seconds, 600);

        let second = course.section(2).unwrap().list_lectures();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].title, "7");
        assert_eq!(second[0].seconds, 300);
    }

    #[test]
    fn test_missing_root_key_is_empty() {
        let catalog = Catalog::from_json_str(r#"{"other": {}}"#).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_custom_root_key() {
        let catalog =
            Catalog::from_json_str_with_root(r#"{"courses": {"a": {}}}"#, "courses").unwrap();
        assert_eq!(catalog.list_courses(), vec![("a", "Unknown Course")]);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(matches!(
            Catalog::from_json_str("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
