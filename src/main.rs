use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use dialoguer::Confirm;
use directories::UserDirs;
use gitsweep::prompt::InteractivePrompt;
use gitsweep::scanner::{scan, ExclusionSet};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Find temporary files via the .gitignore files of repositories and interactively remove them",
    long_about = None
)]
struct Args {
    /// Directory to search for .gitignore files (defaults to the home directory)
    path: Option<PathBuf>,

    /// File of substrings, one per line; paths containing any of them are
    /// skipped during traversal
    #[arg(long, short = 'x', value_name = "FILE")]
    exclude_from: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let root = match args.path {
        Some(path) => path,
        None => UserDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .context("no path given and the home directory could not be determined")?,
    };

    let exclusions = match &args.exclude_from {
        Some(file) => load_exclusions(file)?,
        None => ExclusionSet::default(),
    };

    println!(
        "Searching temporary files by looking at .gitignore files of repositories located in {}...",
        root.display()
    );

    if !exclusions.is_empty() {
        println!("{}", "The following paths will be ignored:".yellow());
        for substring in exclusions.iter() {
            println!("- {substring}");
        }
        if !confirm_proceed() {
            return Ok(());
        }
    }
    println!();

    let mut prompt = InteractivePrompt;
    scan(&root, &exclusions, &mut prompt)
}

/// Load the newline-delimited exclusion list. An empty line would match every
/// path as a substring, so blank lines are dropped here.
fn load_exclusions(file: &Path) -> Result<ExclusionSet> {
    let contents =
        fs::read_to_string(file).with_context(|| format!("cannot open {} file", file.display()))?;
    let substrings = contents
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    Ok(ExclusionSet::new(substrings))
}

/// Top-level gate shown before any traversal happens. Declining, or a prompt
/// failure on a non-terminal, ends the run without scanning.
fn confirm_proceed() -> bool {
    Confirm::new()
        .with_prompt("Do you want to proceed?")
        .interact()
        .unwrap_or(false)
}
