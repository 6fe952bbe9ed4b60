use super::print_json;
use crate::OutputFormat;
use crate::catalog::Catalog;
use crate::timing::range::{RangeSummary, summarize_range, validate_range};
use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Serialize)]
pub struct SumReport<'a> {
    pub course: &'a str,
    pub section: &'a str,
    #[serde(flatten)]
    pub summary: RangeSummary,
}

pub fn write_summary<W: Write>(out: &mut W, summary: &RangeSummary) -> io::Result<()> {
    writeln!(out, "\nLecture Time Summary")?;
    writeln!(out, "Total Time: {}", summary.total)?;
    writeln!(out, "Average Time per Lecture: {}", summary.average)?;
    Ok(())
}

pub fn sum(
    catalog: &Catalog,
    course: &str,
    section: usize,
    start: usize,
    end: usize,
    format: OutputFormat,
) -> Result<()> {
    let course = catalog.course(course)?;
    let section = course.section(section)?;

    let lectures = section.list_lectures();
    if lectures.is_empty() {
        println!("No lectures available.");
        return Ok(());
    }

    validate_range(lectures.len(), start, end)?;
    let summary = summarize_range(&lectures, start, end);

    match format {
        OutputFormat::Json => print_json(&SumReport {
            course: course.title(),
            section: section.title(),
            summary,
        }),
        OutputFormat::Text => {
            write_summary(&mut io::stdout().lock(), &summary)?;
            Ok(())
        }
    }
}
