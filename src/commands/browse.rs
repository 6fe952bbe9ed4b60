use super::print_json;
use crate::OutputFormat;
use crate::catalog::Catalog;
use crate::catalog::models::{Course, Lecture};
use crate::catalog::outline::print_outline;
use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct CourseEntry<'a> {
    index: usize,
    id: &'a str,
    title: &'a str,
}

#[derive(Serialize)]
struct SectionEntry<'a> {
    index: usize,
    title: &'a str,
    lecture_count: usize,
    length: &'a str,
}

pub fn write_courses<W: Write>(out: &mut W, catalog: &Catalog) -> io::Result<()> {
    writeln!(out, "Available Courses")?;
    for (idx, (id, title)) in catalog.list_courses().into_iter().enumerate() {
        writeln!(out, "{}. {} [{}]", idx + 1, title, id)?;
    }
    Ok(())
}

pub fn write_sections<W: Write>(out: &mut W, course: &Course) -> io::Result<()> {
    writeln!(out, "Sections Available")?;
    for (idx, section) in course.list_sections().iter().enumerate() {
        writeln!(
            out,
            "{}. {} ({} lectures, {})",
            idx + 1,
            section.title(),
            section.lecture_count(),
            section.length_label()
        )?;
    }
    Ok(())
}

pub fn write_lectures<W: Write>(out: &mut W, lectures: &[Lecture<'_>]) -> io::Result<()> {
    writeln!(out, "Lectures Available")?;
    for (idx, lecture) in lectures.iter().enumerate() {
        writeln!(out, "{}. {}", idx + 1, lecture)?;
    }
    Ok(())
}

pub fn courses(catalog: &Catalog, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let entries: Vec<CourseEntry> = catalog
                .list_courses()
                .into_iter()
                .enumerate()
                .map(|(idx, (id, title))| CourseEntry {
                    index: idx + 1,
                    id,
                    title,
                })
                .collect();
            print_json(&entries)
        }
        OutputFormat::Text => {
            if catalog.is_empty() {
                println!("No courses available.");
                return Ok(());
            }
            write_courses(&mut io::stdout().lock(), catalog)?;
            Ok(())
        }
    }
}

pub fn sections(catalog: &Catalog, course: &str, format: OutputFormat) -> Result<()> {
    let course = catalog.course(course)?;

    match format {
        OutputFormat::Json => {
            let entries: Vec<SectionEntry> = course
                .list_sections()
                .iter()
                .enumerate()
                .map(|(idx, s)| SectionEntry {
                    index: idx + 1,
                    title: s.title(),
                    lecture_count: s.lecture_count(),
                    length: s.length_label(),
                })
                .collect();
            print_json(&entries)
        }
        OutputFormat::Text => {
            if course.list_sections().is_empty() {
                println!("No sections available.");
                return Ok(());
            }
            write_sections(&mut io::stdout().lock(), course)?;
            Ok(())
        }
    }
}

pub fn lectures(
    catalog: &Catalog,
    course: &str,
    section: usize,
    format: OutputFormat,
) -> Result<()> {
    let section = catalog.course(course)?.section(section)?;
    let lectures = section.list_lectures();

    match format {
        OutputFormat::Json => print_json(&lectures),
        OutputFormat::Text => {
            if lectures.is_empty() {
                println!("No lectures available.");
                return Ok(());
            }
            write_lectures(&mut io::stdout().lock(), &lectures)?;
            Ok(())
        }
    }
}

pub fn outline(catalog: &Catalog, course: &str) -> Result<()> {
    print_outline(catalog.course(course)?);
    Ok(())
}
