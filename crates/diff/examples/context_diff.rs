use record_diff::{Markup, TextDiff};

fn main() {
    // A hosts snapshot with two edits far apart
    let old: String = (1..=20)
        .map(|i| format!("10.0.0.{} host{}.local\n", i, i))
        .collect();
    let new = old
        .replace("10.0.0.3 host3.local", "10.0.0.3 host3.internal")
        .replace("10.0.0.17 host17.local\n", "");

    for context in [0, 1, 3] {
        println!("=== {} context lines ===", context);
        print!("{}", TextDiff::unified_diff(&old, &new, context));
        println!();
    }

    println!("=== Colored, 2 context lines ===");
    print!(
        "{}",
        TextDiff::configure()
            .context_lines(2)
            .markup(Markup::ansi())
            .unified_diff(&old, &new)
    );
}
