use super::print_json;
use crate::OutputFormat;
use crate::catalog::Catalog;
use crate::timing::chunks::{Chunk, chunk_threshold_secs, split_into_chunks};
use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Serialize)]
pub struct ChunkPlan<'a> {
    pub course: &'a str,
    pub section: &'a str,
    pub chunk_minutes: u32,
    pub chunks: Vec<Chunk<'a>>,
}

pub fn write_chunks<W: Write>(
    out: &mut W,
    section_title: &str,
    minutes: u32,
    chunks: &[Chunk<'_>],
) -> io::Result<()> {
    writeln!(
        out,
        "\nSplitting Section: {} into {}-minute chunks",
        section_title, minutes
    )?;

    for (idx, chunk) in chunks.iter().enumerate() {
        writeln!(out, "\nChunk {}:", idx + 1)?;
        for lecture in &chunk.lectures {
            writeln!(out, "  {}", lecture)?;
        }
        writeln!(out, "Total Time: {}", chunk.total)?;
    }

    Ok(())
}

pub fn split(
    catalog: &Catalog,
    course: &str,
    section: usize,
    minutes: u32,
    format: OutputFormat,
) -> Result<()> {
    let course = catalog.course(course)?;
    let section = course.section(section)?;
    let threshold = chunk_threshold_secs(minutes)?;

    let lectures = section.list_lectures();
    if lectures.is_empty() {
        println!("No lectures available.");
        return Ok(());
    }

    let chunks = split_into_chunks(&lectures, threshold);
    tracing::debug!(
        section = section.title(),
        lectures = lectures.len(),
        chunks = chunks.len(),
        "Split section"
    );

    match format {
        OutputFormat::Json => print_json(&ChunkPlan {
            course: course.title(),
            section: section.title(),
            chunk_minutes: minutes,
            chunks,
        }),
        OutputFormat::Text => {
            write_chunks(&mut io::stdout().lock(), section.title(), minutes, &chunks)?;
            Ok(())
        }
    }
}
