use log::trace;

use crate::diff_line::DiffLine;

/// Longest-common-subsequence lengths for every pair of prefixes
///
/// Cell `(i, j)` holds the LCS length of the first `i` old lines and the
/// first `j` new lines. Row 0 and column 0 are all zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    cells: Vec<usize>,
    width: usize,
}

impl LcsTable {
    /// Fill the table for two line sequences in O(m·n) time and space
    pub fn build(old: &[&str], new: &[&str]) -> Self {
        let width = new.len() + 1;
        let mut cells = vec![0; (old.len() + 1) * width];

        for i in 1..=old.len() {
            for j in 1..=new.len() {
                cells[i * width + j] = if old[i - 1] == new[j - 1] {
                    cells[(i - 1) * width + (j - 1)] + 1
                } else {
                    cells[(i - 1) * width + j].max(cells[i * width + (j - 1)])
                };
            }
        }

        Self { cells, width }
    }

    /// Get the LCS length of `old[..i]` and `new[..j]`
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.width + j]
    }

    /// Number of old lines the table was built for
    pub fn rows(&self) -> usize {
        self.cells.len() / self.width - 1
    }

    /// Number of new lines the table was built for
    pub fn cols(&self) -> usize {
        self.width - 1
    }

    /// Length of the longest common subsequence of the full inputs
    pub fn len(&self) -> usize {
        self.get(self.rows(), self.cols())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A non-diagonal step taken while backtracking through the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Emit `new[j - 1]` as an insert and step left
    Insert,
    /// Emit `old[i - 1]` as a delete and step up
    Delete,
}

/// Which move to take when both keep the same LCS value
///
/// Backtracking runs from the end of both inputs, so preferring `Insert`
/// puts deletes before inserts in the final script: a replaced line shows
/// as `- old` followed by `+ new`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    #[default]
    PreferInsert,
    PreferDelete,
}

impl TieBreak {
    /// Pick the move at `(i, j)` when the current lines differ
    ///
    /// At least one of `i` and `j` must be positive.
    pub fn choose(self, table: &LcsTable, i: usize, j: usize) -> Move {
        match self {
            TieBreak::PreferInsert => {
                if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
                    Move::Insert
                } else {
                    Move::Delete
                }
            }
            TieBreak::PreferDelete => {
                if i > 0 && (j == 0 || table.get(i - 1, j) >= table.get(i, j - 1)) {
                    Move::Delete
                } else {
                    Move::Insert
                }
            }
        }
    }
}

/// Compute a minimal line diff with the default tie-break
pub fn compute<'a>(old: &[&'a str], new: &[&'a str]) -> Vec<DiffLine<'a>> {
    compute_with(old, new, TieBreak::default())
}

/// Compute a minimal line diff, resolving ambiguous alignments with `tie_break`
pub fn compute_with<'a>(old: &[&'a str], new: &[&'a str], tie_break: TieBreak) -> Vec<DiffLine<'a>> {
    trace!(
        "building LCS table for {} old and {} new lines",
        old.len(),
        new.len()
    );
    let table = LcsTable::build(old, new);

    let mut result = Vec::with_capacity(old.len() + new.len() - table.len());
    let (mut i, mut j) = (old.len(), new.len());

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && old[i - 1] == new[j - 1] {
            result.push(DiffLine::equal(old[i - 1]));
            i -= 1;
            j -= 1;
            continue;
        }

        match tie_break.choose(&table, i, j) {
            Move::Insert => {
                result.push(DiffLine::insert(new[j - 1]));
                j -= 1;
            }
            Move::Delete => {
                result.push(DiffLine::delete(old[i - 1]));
                i -= 1;
            }
        }
    }

    result.reverse();
    trace!("LCS length {}, {} diff lines", table.len(), result.len());
    result
}
