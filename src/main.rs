//! CLI entry point for mdoutline

use std::io::{self, BufWriter};
use std::process;

use clap::Parser;

use mdoutline::{MarkdownWriter, OutlineWalker};

/// The outline is a function of the current working directory alone; there
/// are no behavior flags, only the clap built-ins.
#[derive(Parser, Debug)]
#[command(name = "mdoutline")]
#[command(about = "Print the current directory tree as a nested markdown outline")]
#[command(version)]
struct Args {}

fn main() {
    let _args = Args::parse();

    let root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("mdoutline: cannot determine current directory: {}", e);
            process::exit(1);
        }
    };

    if !root.is_dir() {
        eprintln!(
            "mdoutline: cannot access '{}': Not a directory",
            root.display()
        );
        process::exit(1);
    }

    let stdout = io::stdout();
    let mut writer = MarkdownWriter::new(BufWriter::new(stdout.lock()));

    if let Err(e) = OutlineWalker::new().walk(&root, &mut writer) {
        let _ = writer.flush();
        eprintln!("mdoutline: {}", e);
        process::exit(1);
    }

    if let Err(e) = writer.flush() {
        eprintln!("mdoutline: error writing output: {}", e);
        process::exit(1);
    }
}
