use anyhow::{Context, Result};
use log::info;
use record_diff::{render, render_header, split_lines, LineDiff, Markup};
use std::io::Write;

use crate::revision::Revision;
use crate::store::SnapshotStore;

/// Arguments for comparing two revisions
#[derive(Debug, Clone)]
pub struct DiffOptions {
    pub old: Revision,
    pub new: Revision,
    pub context: usize,
    pub markup: Markup,
}

/// Compare two revisions from `store` and write the result to `out`
pub fn execute<S, W>(store: &S, options: &DiffOptions, out: &mut W) -> Result<()>
where
    S: SnapshotStore + ?Sized,
    W: Write,
{
    let old_text = read(store, options.old)?;
    let new_text = read(store, options.new)?;

    if old_text == new_text {
        return report_no_differences(out);
    }

    let old_lines = split_lines(&old_text);
    let new_lines = split_lines(&new_text);
    let diff = LineDiff::from_lines(&old_lines, &new_lines);

    // The blobs can differ while their lines do not
    if !diff.has_changes() {
        return report_no_differences(out);
    }

    info!(
        "{} -> {}: {} added, {} deleted",
        options.old,
        options.new,
        diff.added_lines(),
        diff.deleted_lines()
    );

    render_header(options.old, options.new, &options.markup, out)?;
    render(diff.lines(), &options.markup, options.context, out)?;
    Ok(())
}

fn read<S: SnapshotStore + ?Sized>(store: &S, revision: Revision) -> Result<String> {
    store
        .read_revision(revision)
        .with_context(|| format!("failed to read {}", revision))
}

fn report_no_differences<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "No differences found.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DirStore;
    use anyhow::anyhow;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    struct MemoryStore(HashMap<Revision, String>);

    impl SnapshotStore for MemoryStore {
        fn read_revision(&self, revision: Revision) -> Result<String> {
            self.0
                .get(&revision)
                .cloned()
                .ok_or_else(|| anyhow!("{} not found", revision))
        }
    }

    fn options(old: i64, new: i64) -> DiffOptions {
        DiffOptions {
            old: Revision::from(old),
            new: Revision::from(new),
            context: 3,
            markup: Markup::plain(),
        }
    }

    fn run(store: &dyn SnapshotStore, options: &DiffOptions) -> Result<String> {
        let mut out = Vec::new();
        execute(store, options, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_identical_revisions() {
        let store = MemoryStore(HashMap::from([
            (Revision::Numbered(1), "10.0.0.1 a.local\n".to_string()),
            (Revision::Current, "10.0.0.1 a.local\n".to_string()),
        ]));

        assert_eq!(run(&store, &options(1, 0)).unwrap(), "No differences found.\n");
    }

    #[test]
    fn test_changed_revisions() {
        let store = MemoryStore(HashMap::from([
            (
                Revision::Numbered(100),
                "10.0.0.1 web.local\n10.0.0.2 db.local\n".to_string(),
            ),
            (
                Revision::Numbered(200),
                "10.0.0.1 web.local\n10.0.0.3 api.local\n".to_string(),
            ),
        ]));

        assert_eq!(
            run(&store, &options(100, 200)).unwrap(),
            "--- revision 100\n\
             +++ revision 200\n\
             \n  \
             10.0.0.1 web.local\n\
             - 10.0.0.2 db.local\n\
             + 10.0.0.3 api.local\n"
        );
    }

    #[test]
    fn test_missing_revision_is_an_error() {
        let store = MemoryStore(HashMap::new());
        let err = run(&store, &options(5, 0)).unwrap_err();
        assert_eq!(err.to_string(), "failed to read revision 5");
        assert_eq!(format!("{:#}", err), "failed to read revision 5: revision 5 not found");
    }

    #[test]
    fn test_same_lines_in_different_blobs() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("1.hosts"), "10.0.0.1 a.local
").unwrap();
        fs::write(dir.path().join("2.hosts"), "10.0.0.1 a.local").unwrap();
        fs::write(dir.path().join("3.hosts"), "   \n").unwrap();
        fs::write(dir.path().join("4.hosts"), "").unwrap();

        let store = DirStore::new(dir.path());

        // Only the trailing newline differs
        assert_eq!(run(&store, &options(1, 2)).unwrap(), "No differences found.\n");
        // Whitespace-only and empty snapshots both have no lines
        assert_eq!(run(&store, &options(3, 4)).unwrap(), "No differences found.\n");
    }

    #[test]
    fn test_missing_file_names_revision_and_path() {
        let dir = TempDir::new().unwrap();
        let store = DirStore::new(dir.path());

        let err = run(&store, &options(9, 0)).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.starts_with("failed to read revision 9: failed to read "));
        assert!(message.contains("9.hosts"));
    }

    #[test]
    fn test_dir_store_against_current() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("3.hosts"), "10.0.0.1 a.local\n").unwrap();
        fs::write(
            dir.path().join("current.hosts"),
            "10.0.0.1 a.local\n10.0.0.2 b.local\n",
        )
        .unwrap();

        let store = DirStore::new(dir.path());
        let mut options = options(3, 0);
        options.context = 0;

        assert_eq!(
            run(&store, &options).unwrap(),
            "--- revision 3\n+++ current\n\n+ 10.0.0.2 b.local\n"
        );
    }
}
