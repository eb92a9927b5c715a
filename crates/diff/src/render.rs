use std::fmt;
use std::io::{self, Write};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::diff_line::{DiffLine, DiffOp};

/// One line of rendered output, before any markup is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum RenderedLine<'a> {
    /// Unchanged line shown around a change
    Context(&'a str),
    /// Line removed from the old version
    Delete(&'a str),
    /// Line added in the new version
    Insert(&'a str),
    /// Unchanged lines were skipped between two hunks
    Gap,
}

/// Position of the last line written during a layout scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    /// Nothing written yet
    Fresh,
    /// The diff line at this index was the last one written
    After(usize),
}

impl Cursor {
    /// First index that has not been written yet
    fn next_unwritten(self) -> usize {
        match self {
            Cursor::Fresh => 0,
            Cursor::After(index) => index + 1,
        }
    }

    /// Whether a window starting at `start` leaves skipped lines behind the cursor
    fn leaves_gap(self, start: usize) -> bool {
        match self {
            Cursor::Fresh => false,
            Cursor::After(index) => start > index + 1,
        }
    }
}

/// Select the lines to show for a diff with `context` lines around each change
///
/// Every change line appears exactly once, context lines at most once, and
/// unchanged lines far from any change are dropped. A `Gap` separates hunks
/// whose context windows do not touch.
pub fn layout<'a>(diff: &[DiffLine<'a>], context: usize) -> Vec<RenderedLine<'a>> {
    let mut out = Vec::new();
    let mut cursor = Cursor::Fresh;

    for (i, line) in diff.iter().enumerate() {
        let change = match line.op {
            DiffOp::Equal => continue,
            DiffOp::Delete => RenderedLine::Delete(line.text),
            DiffOp::Insert => RenderedLine::Insert(line.text),
        };

        let start = i
            .saturating_sub(context)
            .max(cursor.next_unwritten())
            .min(i);

        if cursor.leaves_gap(start) {
            out.push(RenderedLine::Gap);
        }

        // Lines in [start, i) after the cursor are all unchanged
        for leading in &diff[start..i] {
            if leading.op == DiffOp::Equal {
                out.push(RenderedLine::Context(leading.text));
            }
        }

        out.push(change);
        cursor = Cursor::After(i);

        let end = (i + 1 + context).min(diff.len());
        for (offset, trailing) in diff[i + 1..end].iter().enumerate() {
            if trailing.op != DiffOp::Equal {
                break;
            }
            out.push(RenderedLine::Context(trailing.text));
            cursor = Cursor::After(i + 1 + offset);
        }
    }

    out
}

/// Prefix and optional color for one class of output line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineStyle {
    pub prefix: String,
    pub color: Option<String>,
}

impl LineStyle {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            color: None,
        }
    }

    pub fn colored(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Markers and colors used when writing a diff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup {
    pub delete: LineStyle,
    pub insert: LineStyle,
    pub context: LineStyle,
    /// The gap style's prefix is the whole separator line
    pub gap: LineStyle,
    pub header: LineStyle,
    /// Written after any colored line
    pub reset: String,
}

impl Markup {
    /// Markers without escape sequences, for files and pipes
    pub fn plain() -> Self {
        Self {
            delete: LineStyle::new("- "),
            insert: LineStyle::new("+ "),
            context: LineStyle::new("  "),
            gap: LineStyle::new("@@ ... @@"),
            header: LineStyle::new(""),
            reset: String::new(),
        }
    }

    /// Markers with ANSI colors for terminals
    pub fn ansi() -> Self {
        let plain = Self::plain();
        Self {
            delete: plain.delete.colored("\x1b[31m"),
            insert: plain.insert.colored("\x1b[32m"),
            context: plain.context,
            gap: plain.gap.colored("\x1b[36m"),
            header: plain.header.colored("\x1b[33m"),
            reset: "\x1b[0m".to_string(),
        }
    }

    /// Pick `ansi` or `plain`
    pub fn with_color(enabled: bool) -> Self {
        if enabled {
            Self::ansi()
        } else {
            Self::plain()
        }
    }

    /// Style a rendered line for display
    pub fn paint<'m>(&'m self, line: &RenderedLine<'m>) -> Painted<'m> {
        let (style, text) = match *line {
            RenderedLine::Context(text) => (&self.context, text),
            RenderedLine::Delete(text) => (&self.delete, text),
            RenderedLine::Insert(text) => (&self.insert, text),
            RenderedLine::Gap => (&self.gap, ""),
        };
        Painted {
            style,
            text,
            reset: &self.reset,
        }
    }

    fn paint_header<'m>(&'m self, text: &'m str) -> Painted<'m> {
        Painted {
            style: &self.header,
            text,
            reset: &self.reset,
        }
    }
}

impl Default for Markup {
    fn default() -> Self {
        Self::plain()
    }
}

/// A line of text together with the style it is written in
#[derive(Debug, Clone, Copy)]
pub struct Painted<'a> {
    style: &'a LineStyle,
    text: &'a str,
    reset: &'a str,
}

impl fmt::Display for Painted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.style.color {
            Some(color) => write!(f, "{}{}{}{}", color, self.style.prefix, self.text, self.reset),
            None => write!(f, "{}{}", self.style.prefix, self.text),
        }
    }
}

/// Write the hunks of `diff` to `out`, one line per rendered line
pub fn render<W: Write>(
    diff: &[DiffLine<'_>],
    markup: &Markup,
    context: usize,
    out: &mut W,
) -> io::Result<()> {
    for line in layout(diff, context) {
        writeln!(out, "{}", markup.paint(&line))?;
    }
    Ok(())
}

/// Write the `---`/`+++` header naming both versions, then a blank line
pub fn render_header<W: Write>(
    old_label: impl fmt::Display,
    new_label: impl fmt::Display,
    markup: &Markup,
    out: &mut W,
) -> io::Result<()> {
    let old = format!("--- {}", old_label);
    let new = format!("+++ {}", new_label);
    writeln!(out, "{}", markup.paint_header(&old))?;
    writeln!(out, "{}", markup.paint_header(&new))?;
    writeln!(out)
}
