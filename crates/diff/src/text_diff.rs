use std::io::{self, Write};

use crate::diff_line::LineDiff;
use crate::lcs::{compute_with, TieBreak};
use crate::lines::split_lines;
use crate::render::{layout, render, Markup};

/// Unchanged lines shown on each side of a change unless configured otherwise
pub const DEFAULT_CONTEXT_LINES: usize = 3;

/// Options for diffing and rendering two snapshots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffConfig {
    context_lines: usize,
    markup: Markup,
    tie_break: TieBreak,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            context_lines: DEFAULT_CONTEXT_LINES,
            markup: Markup::plain(),
            tie_break: TieBreak::default(),
        }
    }
}

impl DiffConfig {
    /// Set the number of context lines around each change
    pub fn context_lines(mut self, context_lines: usize) -> Self {
        self.context_lines = context_lines;
        self
    }

    /// Set the markers and colors used for output
    pub fn markup(mut self, markup: Markup) -> Self {
        self.markup = markup;
        self
    }

    /// Set how ambiguous alignments are resolved
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn get_context_lines(&self) -> usize {
        self.context_lines
    }

    pub fn get_markup(&self) -> &Markup {
        &self.markup
    }

    /// Diff two snapshots line by line
    pub fn diff<'a>(&self, old_text: &'a str, new_text: &'a str) -> LineDiff<'a> {
        let old = split_lines(old_text);
        let new = split_lines(new_text);
        LineDiff::from_diff_lines(compute_with(&old, &new, self.tie_break))
    }

    /// Generate a unified diff string; empty when the snapshots are identical
    pub fn unified_diff(&self, old_text: &str, new_text: &str) -> String {
        if old_text == new_text {
            return String::new();
        }

        let diff = self.diff(old_text, new_text);
        let mut result = String::new();
        for line in layout(diff.lines(), self.context_lines) {
            result.push_str(&self.markup.paint(&line).to_string());
            result.push('\n');
        }
        result
    }

    /// Write a unified diff to `out`; writes nothing when the snapshots are identical
    pub fn write_unified<W: Write>(&self, old_text: &str, new_text: &str, out: &mut W) -> io::Result<()> {
        if old_text == new_text {
            return Ok(());
        }

        let diff = self.diff(old_text, new_text);
        render(diff.lines(), &self.markup, self.context_lines, out)
    }
}

/// Wrapper around text diff operations
pub struct TextDiff;

impl TextDiff {
    /// Create a diff between two texts
    pub fn diff<'a>(old_text: &'a str, new_text: &'a str) -> LineDiff<'a> {
        DiffConfig::default().diff(old_text, new_text)
    }

    /// Generate a plain unified diff string with the given amount of context
    pub fn unified_diff(old_text: &str, new_text: &str, context_lines: usize) -> String {
        DiffConfig::default()
            .context_lines(context_lines)
            .unified_diff(old_text, new_text)
    }

    /// Start building a diff configuration
    pub fn configure() -> DiffConfig {
        DiffConfig::default()
    }
}
