use std::io;

use record_diff::{render_header, DiffOp, Markup, TextDiff};

fn main() -> io::Result<()> {
    // Two revisions of a record set
    let rev1 = "192.168.1.1 web.local\n192.168.1.2 db.local\n192.168.1.3 cache.local\n";
    let rev2 = "192.168.1.1 web.local\n192.168.1.4 api.local\n192.168.1.3 cache.local\n";

    let diff = TextDiff::diff(rev1, rev2);

    println!("Diff statistics:");
    println!("  Added lines: {}", diff.added_lines());
    println!("  Deleted lines: {}", diff.deleted_lines());
    println!("  Unchanged lines: {}", diff.unchanged_lines());

    println!("\nTagged lines:");
    for line in diff {
        match line.op {
            DiffOp::Delete => println!("  \x1b[31m{:<6}\x1b[0m {}", line.op.to_string(), line.text),
            DiffOp::Insert => println!("  \x1b[32m{:<6}\x1b[0m {}", line.op.to_string(), line.text),
            DiffOp::Equal => println!("  {:<6} {}", line.op.to_string(), line.text),
        }
    }

    println!("\nUnified diff:");
    let markup = Markup::ansi();
    let mut stdout = io::stdout().lock();
    render_header("revision 1", "revision 2", &markup, &mut stdout)?;
    TextDiff::configure()
        .markup(markup)
        .write_unified(rev1, rev2, &mut stdout)
}
