use super::browse::{write_courses, write_lectures, write_sections};
use super::split::write_chunks;
use super::sum::write_summary;
use crate::catalog::Catalog;
use crate::catalog::models::{Course, Section};
use crate::prompt::Prompter;
use crate::timing::chunks::{chunk_threshold_secs, split_into_chunks};
use crate::timing::range::{summarize_range, validate_range};
use anyhow::Result;
use std::io::{BufRead, Write};

/// Outcome of one menu task. `Closed` means input ran out mid-task.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Done,
    Closed,
}

/// Interactive task loop. Returns when the user exits or input ends.
pub fn run<R: BufRead, W: Write>(catalog: &Catalog, prompter: &mut Prompter<R, W>) -> Result<()> {
    loop {
        let out = prompter.out();
        writeln!(out, "\nChoose a Task")?;
        writeln!(out, "1. Split Section into Time Chunks")?;
        writeln!(out, "2. Sum Time Between Selected Lectures")?;
        writeln!(out, "3. Exit")?;

        let Some(choice) = prompter.read_line("\nEnter choice (1-3): ")? else {
            break;
        };

        let flow = match choice.as_str() {
            "1" => split_section_by_time(catalog, prompter)?,
            "2" => sum_lecture_time(catalog, prompter)?,
            "3" => {
                writeln!(prompter.out(), "Exiting... Goodbye!")?;
                break;
            }
            _ => {
                writeln!(prompter.out(), "Invalid choice. Try again.")?;
                Flow::Done
            }
        };

        if flow == Flow::Closed {
            break;
        }
    }

    Ok(())
}

fn select_course<'c, R: BufRead, W: Write>(
    catalog: &'c Catalog,
    prompter: &mut Prompter<R, W>,
) -> Result<Option<&'c Course>> {
    let courses = catalog.courses();
    if courses.is_empty() {
        writeln!(prompter.out(), "No courses available.")?;
        return Ok(None);
    }

    writeln!(prompter.out())?;
    write_courses(prompter.out(), catalog)?;
    let choice = prompter.choose("\nSelect a course (1 to n): ", courses.len())?;
    Ok(choice.map(|n| &courses[n - 1]))
}

fn select_section<'c, R: BufRead, W: Write>(
    course: &'c Course,
    prompter: &mut Prompter<R, W>,
) -> Result<Option<&'c Section>> {
    let sections = course.list_sections();
    if sections.is_empty() {
        writeln!(prompter.out(), "No sections available.")?;
        return Ok(None);
    }

    writeln!(prompter.out())?;
    write_sections(prompter.out(), course)?;
    let choice = prompter.choose("\nSelect a section (1 to n): ", sections.len())?;
    Ok(choice.map(|n| &sections[n - 1]))
}

/// Course then section, or `None` when either is unavailable or input ended.
fn select_target<'c, R: BufRead, W: Write>(
    catalog: &'c Catalog,
    prompter: &mut Prompter<R, W>,
) -> Result<Option<&'c Section>> {
    let Some(course) = select_course(catalog, prompter)? else {
        return Ok(None);
    };
    select_section(course, prompter)
}

fn split_section_by_time<R: BufRead, W: Write>(
    catalog: &Catalog,
    prompter: &mut Prompter<R, W>,
) -> Result<Flow> {
    let Some(section) = select_target(catalog, prompter)? else {
        return Ok(Flow::Done);
    };

    let lectures = section.list_lectures();
    if lectures.is_empty() {
        writeln!(prompter.out(), "No lectures available.")?;
        return Ok(Flow::Done);
    }

    let (minutes, threshold) = loop {
        let prompt = "\nEnter chunk time in minutes (e.g., 60 for 1-hour sections): ";
        let Some(n) = prompter.read_number(prompt)? else {
            return Ok(Flow::Closed);
        };
        let Ok(minutes) = u32::try_from(n) else {
            writeln!(prompter.out(), "Enter a valid number.")?;
            continue;
        };
        match chunk_threshold_secs(minutes) {
            Ok(threshold) => break (minutes, threshold),
            Err(e) => writeln!(prompter.out(), "{}.", e)?,
        }
    };

    let chunks = split_into_chunks(&lectures, threshold);
    write_chunks(prompter.out(), section.title(), minutes, &chunks)?;
    Ok(Flow::Done)
}

fn sum_lecture_time<R: BufRead, W: Write>(
    catalog: &Catalog,
    prompter: &mut Prompter<R, W>,
) -> Result<Flow> {
    let Some(section) = select_target(catalog, prompter)? else {
        return Ok(Flow::Done);
    };

    let lectures = section.list_lectures();
    if lectures.is_empty() {
        writeln!(prompter.out(), "No lectures available.")?;
        return Ok(Flow::Done);
    }

    writeln!(prompter.out())?;
    write_lectures(prompter.out(), &lectures)?;

    let (start, end) = loop {
        let Some(start) = prompter.read_number("\nSelect START lecture (1 to n): ")? else {
            return Ok(Flow::Closed);
        };
        let Some(end) = prompter.read_number("Select END lecture (1 to n): ")? else {
            return Ok(Flow::Closed);
        };
        if validate_range(lectures.len(), start, end).is_ok() {
            break (start, end);
        }
        writeln!(prompter.out(), "Invalid range. Try again.")?;
    };

    let summary = summarize_range(&lectures, start, end);
    write_summary(prompter.out(), &summary)?;
    Ok(Flow::Done)
}
