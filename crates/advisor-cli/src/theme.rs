//! Terminal styling for advisories.
//!
//! All colours are chosen here so the renderer references semantic roles
//! rather than raw `colored` calls.
use colored::{ColoredString, Colorize};

/// Width of the deletion summary box, border included.
pub const BOX_WIDTH: usize = 60;

/// Width of the label column inside the box.
pub const LABEL_WIDTH: usize = 15;

pub fn heading(text: &str) -> ColoredString {
    text.bold()
}

pub fn danger(text: &str) -> ColoredString {
    text.red().bold()
}

pub fn warning_label(text: &str) -> ColoredString {
    text.yellow().bold()
}

pub fn label(text: &str) -> ColoredString {
    format!("{text:<LABEL_WIDTH$}").as_str().dimmed()
}

pub fn value(text: &str) -> ColoredString {
    text.cyan()
}

pub fn muted(text: &str) -> ColoredString {
    text.dimmed()
}

pub fn border(text: &str) -> ColoredString {
    text.bright_black()
}

/// Top border carrying a title: `┌─ Title ─────…`.
pub fn box_top(title: &str) -> String {
    let used = 3 + title.chars().count() + 1;
    format!("┌─ {title} {}", "─".repeat(BOX_WIDTH.saturating_sub(used)))
}

pub fn box_bottom() -> String {
    format!("└{}", "─".repeat(BOX_WIDTH - 1))
}

/// Turn colours off for the whole process.
pub fn disable_color() {
    colored::control::set_override(false);
}
