use lecture_planner::catalog::Catalog;
use lecture_planner::catalog::models::Lecture;
use lecture_planner::error::CatalogError;
use lecture_planner::timing::chunks::split_into_chunks;
use lecture_planner::timing::duration::{format_duration, parse_duration};
use lecture_planner::timing::range::summarize_range;
use std::io::Write;
use tempfile::NamedTempFile;

const EXPORT: &str = r#"{
    "json_data": {
        "4021": {
            "curriculum_context": {
                "data": {
                    "course_title": "Operating Systems",
                    "sections": [
                        {
                            "title": "Processes",
                            "content_length_text": "2hr 15min",
                            "items": [
                                {"item_type": "lecture", "title": "Fork", "content_summary": "12:30"},
                                {"item_type": "quiz", "title": "Quiz 1"},
                                {"item_type": "lecture", "title": "Exec", "content_summary": "48:10"},
                                {"item_type": "lecture", "title": "Signals", "content_summary": "1:05:00"},
                                {"item_type": "lecture", "title": "Pipes", "content_summary": "n/a"},
                                {"item_type": "lecture", "title": "Threads", "content_summary": "9:20"}
                            ]
                        }
                    ]
                }
            }
        }
    }
}"#;

fn write_export(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_catalog_from_disk() {
    let file = write_export(EXPORT);
    let catalog = Catalog::load(file.path(), "json_data").unwrap();

    assert_eq!(catalog.list_courses(), vec![("4021", "Operating Systems")]);
    let section = catalog.course("4021").unwrap().section(1).unwrap();
    let titles: Vec<&str> = section.list_lectures().iter().map(|l| l.title).collect();
    assert_eq!(titles, vec!["Fork", "Exec", "Signals", "Pipes", "Threads"]);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = Catalog::load(dir.path().join("autosave.json"), "json_data");
    assert!(matches!(result, Err(CatalogError::Read { .. })));
}

#[test]
fn test_chunks_reconstruct_input_in_order() {
    let catalog = Catalog::from_json_str(EXPORT).unwrap();
    let lectures = catalog.course("1").unwrap().section(1).unwrap().list_lectures();

    for threshold in [1, 300, 1800, 3600, 7200, 100_000] {
        let chunks = split_into_chunks(&lectures, threshold);

        let flattened: Vec<Lecture> = chunks
            .iter()
            .flat_map(|c| c.lectures.iter().copied())
            .collect();
        assert_eq!(flattened, lectures, "threshold {}", threshold);

        let (last, rest) = chunks.split_last().unwrap();
        for chunk in rest {
            assert!(chunk.total_seconds >= threshold);
        }
        assert!(!last.lectures.is_empty());
        let expected: u64 = last.lectures.iter().map(|l| l.seconds).sum();
        assert_eq!(last.total_seconds, expected);
    }
}

#[test]
fn test_full_range_matches_sum_of_lectures() {
    let catalog = Catalog::from_json_str(EXPORT).unwrap();
    let lectures = catalog.course("4021").unwrap().section(1).unwrap().list_lectures();

    let expected: u64 = lectures.iter().map(|l| l.seconds).sum();
    let summary = summarize_range(&lectures, 1, lectures.len());

    assert_eq!(summary.total_seconds, expected);
    assert_eq!(summary.total_seconds, 750 + 2890 + 3900 + 560);
    assert_eq!(summary.average_seconds, expected / 5);
}

#[test]
fn test_unparseable_lecture_counts_in_average() {
    let catalog = Catalog::from_json_str(EXPORT).unwrap();
    let lectures = catalog.course("4021").unwrap().section(1).unwrap().list_lectures();

    // "Pipes" has no usable duration but still counts as a lecture.
    let summary = summarize_range(&lectures, 4, 5);
    assert_eq!(summary.count, 2);
    assert_eq!(summary.total_seconds, 560);
    assert_eq!(summary.average_seconds, 280);
    assert_eq!(summary.average, "4m 40s");
}

#[test]
fn test_codec_examples() {
    assert_eq!(parse_duration("1:02:03"), 3723);
    assert_eq!(parse_duration("5:30"), 330);
    assert_eq!(parse_duration("garbage"), 0);
    assert_eq!(parse_duration(""), 0);
    assert_eq!(format_duration(3723), "1h 2m 3s");
    assert_eq!(format_duration(330), "5m 30s");
    assert_eq!(format_duration(0), "0m 0s");
}
