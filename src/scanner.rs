//! `.gitignore` discovery and candidate resolution.

use crate::patterns::{expand_rule, in_metadata_dir, parse_rule};
use crate::prompt::{Decision, RemovalPrompt};

use anyhow::{bail, Result};
use colored::Colorize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Caller-supplied substrings that suppress traversal into matching paths.
/// Immutable for the whole run.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    substrings: Vec<String>,
}

impl ExclusionSet {
    pub fn new(substrings: Vec<String>) -> Self {
        Self { substrings }
    }

    pub fn is_empty(&self) -> bool {
        self.substrings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.substrings.iter().map(String::as_str)
    }

    /// Substring containment against the full path string, not a component
    /// or glob match. Callers wanting exact-path exclusion must supply a
    /// sufficiently specific string.
    pub fn matches(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.substrings.iter().any(|s| path_str.contains(s.as_str()))
    }
}

/// Walk `root` depth-first and hand every regular file named `.gitignore` to
/// [`process_gitignore`]. Entries matching the exclusion set are pruned,
/// subtree included, and are never descended into. The walker itself never
/// deletes anything.
///
/// Fails only when `root` is not an existing directory; everything below
/// that is reported and survived.
pub fn scan(root: &Path, exclusions: &ExclusionSet, prompt: &mut dyn RemovalPrompt) -> Result<()> {
    if !root.is_dir() {
        bail!("invalid root: {} is not an existing directory", root.display());
    }

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| !exclusions.matches(entry.path()));

    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!("{} failed to access entry: {err}", "Warning:".yellow());
                continue;
            }
        };

        if entry.file_type().is_file() && entry.file_name() == ".gitignore" {
            process_gitignore(entry.path(), prompt);
        }
    }

    Ok(())
}

/// Resolve one `.gitignore` file into a deduplicated candidate set and offer
/// each candidate to the prompt, deleting on approval. Returns the number of
/// candidates offered.
///
/// Never fails: an unreadable file is reported and skipped so the caller's
/// traversal can continue with its siblings.
pub fn process_gitignore(gitignore: &Path, prompt: &mut dyn RemovalPrompt) -> usize {
    println!("Found .gitignore file: {}", gitignore.display());

    let contents = match fs::read_to_string(gitignore) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!(
                "{} cannot read {} file: {err}",
                "ERROR:".red(),
                gitignore.display()
            );
            return 0;
        }
    };

    // A .gitignore at the filesystem root has no parent to resolve against.
    let Some(parent) = gitignore.parent() else {
        return 0;
    };

    // Dedup is keyed by path string so two lines matching the same concrete
    // path prompt only once; first-seen order is what gets offered.
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();
    for line in contents.lines() {
        let Some(rule) = parse_rule(line) else {
            continue;
        };
        for path in expand_rule(&rule, parent) {
            if in_metadata_dir(&path) {
                continue;
            }
            if seen.insert(path.to_string_lossy().into_owned()) {
                candidates.push(path);
            }
        }
    }

    if candidates.is_empty() {
        println!("No regular files or directories found to remove. Skipping!");
        println!();
        return 0;
    }

    let offered = candidates.len();
    for candidate in &candidates {
        if prompt.confirm(candidate) == Decision::Approve {
            remove_path(candidate);
        }
    }
    println!();
    offered
}

/// Delete an approved candidate: just the file for a regular file, the whole
/// subtree for a directory. Failure is reported and the run continues with
/// the next candidate.
pub fn remove_path(path: &Path) {
    let result = if path.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    match result {
        Ok(()) => println!("{}", "REMOVED.".green()),
        Err(err) => eprintln!(
            "{} cannot remove {}: {err}",
            "ERROR:".red(),
            path.display()
        ),
    }
}
