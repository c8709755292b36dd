//! CLI entry point for dirwalk

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use dirwalk::{collate, write_paths, DiagnosticSink, FilterSet, PathCollector, Walker};

#[derive(Parser, Debug)]
#[command(name = "dirwalk")]
#[command(about = "List filesystem entries beneath a directory, find-style")]
#[command(version)]
struct Args {
    /// Directory to walk
    #[arg(default_value = ".")]
    start_dir: PathBuf,

    /// Report symbolic links
    #[arg(short = 'l', long = "links")]
    links: bool,

    /// Report directories
    #[arg(short = 'd', long = "dirs")]
    dirs: bool,

    /// Report regular files
    #[arg(short = 'f', long = "files")]
    files: bool,

    /// Sort output in the locale's collation order
    #[arg(short = 's', long = "sort")]
    sort: bool,
}

fn main() {
    collate::init_locale();
    let args = Args::parse();

    let filter = FilterSet {
        symlinks: args.links,
        dirs: args.dirs,
        files: args.files,
    };

    // Per-entry failures go straight to stderr as the walk runs; they
    // do not change the exit status.
    let mut results = PathCollector::new();
    let mut diagnostics = DiagnosticSink::new(io::stderr().lock());
    Walker::new(filter).walk(&args.start_dir, &mut results, &mut diagnostics);

    let mut paths = results.into_paths();
    if args.sort {
        collate::sort_paths(&mut paths);
    }

    let mut out = io::BufWriter::new(io::stdout().lock());
    if let Err(e) = write_paths(&mut out, &paths).and_then(|()| out.flush()) {
        eprintln!("dirwalk: error writing output: {}", e);
        process::exit(1);
    }
}
