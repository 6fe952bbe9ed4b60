use super::models::{Course, Section};
use std::fmt;
use termtree::Tree;

struct SectionLabel<'a>(&'a Section);

impl fmt::Display for SectionLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let section = self.0;
        write!(
            f,
            "{} ({} lectures, {})",
            section.title(),
            section.lecture_count(),
            section.length_label()
        )
    }
}

/// Course -> sections -> lectures.
pub fn build_outline(course: &Course) -> Tree<String> {
    let mut tree = Tree::new(course.title().to_string());

    for section in course.list_sections() {
        let mut node = Tree::new(SectionLabel(section).to_string());
        for lecture in section.list_lectures() {
            node.push(Tree::new(lecture.to_string()));
        }
        tree.push(node);
    }

    tree
}

pub fn print_outline(course: &Course) {
    println!("{}", build_outline(course));
}
