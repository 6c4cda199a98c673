/*
MIT License

Copyright (c) 2026 posdiff developers
*/

//! Command Line Interface (CLI) module
//!
//! One-shot pipeline: resolve the two structure files, parse both, compare
//! them for the requested element, then print the report and write it to
//! `{run_index}output.txt`. The element symbol is prompted for interactively
//! only when it is not supplied on the command line.

use crate::displacement::{self, normalize_element};
use crate::files::{self, FileSelection};
use crate::structure::parse_poscar_file;

use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Compare atomic positions between two POSCAR/CONTCAR structure snapshots
#[derive(Parser, Debug)]
#[command(name = "posdiff", version, about)]
pub struct Cli {
    /// First structure file (reference frame for the comparison)
    #[arg(requires = "file2")]
    pub file1: Option<PathBuf>,

    /// Second structure file
    pub file2: Option<PathBuf>,

    /// Element symbol to analyze; prompted for interactively when omitted
    #[arg(short, long)]
    pub element: Option<String>,

    /// Scan the working directory for POSCAR/CONTCAR files instead of the
    /// fixed default names
    #[arg(short, long, conflicts_with = "file1")]
    pub discover: bool,

    /// Working directory for default file names, discovery, and the output file
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Index used to name the output file ({index}output.txt)
    #[arg(long, default_value_t = 0)]
    pub run_index: usize,
}

impl Cli {
    fn selection(&self) -> FileSelection {
        match (&self.file1, &self.file2) {
            (Some(file1), Some(file2)) => FileSelection::Explicit(file1.clone(), file2.clone()),
            _ if self.discover => FileSelection::Discover,
            _ => FileSelection::Fixed,
        }
    }
}

/// Run one comparison with the given arguments
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let element = match &cli.element {
        Some(element) => normalize_element(element),
        None => normalize_element(&prompt_element()?),
    };

    let (file1, file2) = files::resolve(&cli.selection(), &cli.dir)?;
    println!("compare: {} and {}", file1.display(), file2.display());

    let structure1 = parse_poscar_file(&file1)
        .with_context(|| format!("failed to parse {}", file1.display()))?;
    let structure2 = parse_poscar_file(&file2)
        .with_context(|| format!("failed to parse {}", file2.display()))?;

    let report = displacement::compare(&structure1, &structure2, &element)?;
    let body = displacement::format_report(&report);
    println!("{}", body);

    displacement::write_report(
        &cli.dir,
        cli.run_index,
        &file1.display().to_string(),
        &file2.display().to_string(),
        &body,
    )?;

    Ok(())
}

fn prompt_element() -> anyhow::Result<String> {
    print!("elements (e.g. Pt, O, H): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
