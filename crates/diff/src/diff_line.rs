use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The operation attached to a single line of a diff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiffOp {
    /// The line is present in both versions
    #[display(fmt = "Equal")]
    Equal,

    /// The line only exists in the old version
    #[display(fmt = "Delete")]
    Delete,

    /// The line only exists in the new version
    #[display(fmt = "Insert")]
    Insert,
}

impl DiffOp {
    /// Check if this operation is a change (delete or insert)
    pub fn is_change(self) -> bool {
        self != DiffOp::Equal
    }
}

/// A tagged line borrowing its text from one of the compared snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DiffLine<'a> {
    /// What happened to the line
    pub op: DiffOp,

    /// The line text, without its terminator
    pub text: &'a str,
}

impl<'a> DiffLine<'a> {
    pub fn new(op: DiffOp, text: &'a str) -> Self {
        Self { op, text }
    }

    pub fn equal(text: &'a str) -> Self {
        Self::new(DiffOp::Equal, text)
    }

    pub fn delete(text: &'a str) -> Self {
        Self::new(DiffOp::Delete, text)
    }

    pub fn insert(text: &'a str) -> Self {
        Self::new(DiffOp::Insert, text)
    }

    /// Check if this line is a delete or an insert
    pub fn is_change(&self) -> bool {
        self.op.is_change()
    }

    /// Copy the text out so the line can outlive its snapshot
    pub fn to_owned_line(&self) -> OwnedDiffLine {
        OwnedDiffLine {
            op: self.op,
            text: self.text.to_string(),
        }
    }
}

/// A tagged line that owns its text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OwnedDiffLine {
    pub op: DiffOp,
    pub text: String,
}

/// The full edit script between two line sequences
///
/// Reading the `Equal` and `Delete` lines in order gives back the old
/// sequence; reading the `Equal` and `Insert` lines gives back the new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineDiff<'a> {
    lines: Vec<DiffLine<'a>>,
}

impl<'a> LineDiff<'a> {
    /// Diff two line sequences
    pub fn from_lines(old: &[&'a str], new: &[&'a str]) -> Self {
        Self {
            lines: crate::lcs::compute(old, new),
        }
    }

    /// Wrap an edit script that was computed elsewhere
    pub fn from_diff_lines(lines: Vec<DiffLine<'a>>) -> Self {
        Self { lines }
    }

    /// Get the tagged lines
    pub fn lines(&self) -> &[DiffLine<'a>] {
        &self.lines
    }

    /// Consume the diff, returning the tagged lines
    pub fn into_lines(self) -> Vec<DiffLine<'a>> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Check if the diff has any changes
    pub fn has_changes(&self) -> bool {
        self.lines.iter().any(DiffLine::is_change)
    }

    /// Get the number of inserted lines
    pub fn added_lines(&self) -> usize {
        self.count(DiffOp::Insert)
    }

    /// Get the number of deleted lines
    pub fn deleted_lines(&self) -> usize {
        self.count(DiffOp::Delete)
    }

    /// Get the number of unchanged lines
    pub fn unchanged_lines(&self) -> usize {
        self.count(DiffOp::Equal)
    }

    /// Rebuild the old sequence from the edit script
    pub fn old_lines(&self) -> Vec<&'a str> {
        self.side(DiffOp::Delete)
    }

    /// Rebuild the new sequence from the edit script
    pub fn new_lines(&self) -> Vec<&'a str> {
        self.side(DiffOp::Insert)
    }

    fn count(&self, op: DiffOp) -> usize {
        self.lines.iter().filter(|line| line.op == op).count()
    }

    fn side(&self, change: DiffOp) -> Vec<&'a str> {
        self.lines
            .iter()
            .filter(|line| line.op == DiffOp::Equal || line.op == change)
            .map(|line| line.text)
            .collect()
    }
}

impl<'a> IntoIterator for LineDiff<'a> {
    type Item = DiffLine<'a>;
    type IntoIter = std::vec::IntoIter<DiffLine<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}
