//! dnsdiff
//!
//! Compare two revisions of a DNS record-set snapshot store

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::debug;
use record_diff::{Markup, DEFAULT_CONTEXT_LINES};

mod diff_cmd;
mod revision;
mod store;

use revision::Revision;
use store::DirStore;

#[derive(Debug, Parser)]
#[command(name = "dnsdiff")]
#[command(about = "Compare two versions of DNS records", long_about = None)]
#[command(after_help = "Examples:\n  dnsdiff 100 200\n  dnsdiff 100 0      # compare revision 100 with current")]
struct Cli {
    /// First revision to compare
    #[arg(allow_negative_numbers = true)]
    revision1: i64,

    /// Second revision to compare (0 means the current snapshot)
    #[arg(allow_negative_numbers = true)]
    revision2: i64,

    /// Directory holding `<revision>.hosts` and `current.hosts` snapshots
    #[arg(long, env = "DNSDIFF_STORE", default_value = ".")]
    store: PathBuf,

    /// Unchanged lines shown around each change
    #[arg(short = 'U', long, default_value_t = DEFAULT_CONTEXT_LINES)]
    context: usize,

    /// When to color the output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn enabled(self, stdout: &io::Stdout) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => stdout.is_terminal() && std::env::var_os("NO_COLOR").is_none(),
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    debug!("parsed arguments: {:?}", cli);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let markup = Markup::with_color(cli.color.enabled(&stdout));
    let store = DirStore::new(&cli.store);

    let options = diff_cmd::DiffOptions {
        old: Revision::from(cli.revision1),
        new: Revision::from(cli.revision2),
        context: cli.context,
        markup,
    };

    let mut out = stdout.lock();
    diff_cmd::execute(&store, &options, &mut out)?;
    out.flush()?;
    Ok(())
}
