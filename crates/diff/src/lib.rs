// Line diff engine for record-set snapshots
// This crate computes an LCS-based edit script between two snapshots and
// renders it as a unified diff with bounded context

mod diff_line;
mod lcs;
mod lines;
mod render;
mod text_diff;

pub use diff_line::{DiffLine, DiffOp, LineDiff, OwnedDiffLine};
pub use lcs::{compute, compute_with, LcsTable, Move, TieBreak};
pub use lines::split_lines;
pub use render::{layout, render, render_header, LineStyle, Markup, Painted, RenderedLine};
pub use text_diff::{DiffConfig, TextDiff, DEFAULT_CONTEXT_LINES};
