//! `.gitignore` line classification and filesystem expansion.

use colored::Colorize;
use regex::Regex;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory name whose contents must never be offered for deletion.
pub const VCS_METADATA_DIR: &str = ".git";

/// One actionable line from a `.gitignore` file, trailing `/` already
/// stripped. Exists only while its file is being processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreRule {
    /// Line contains `*`: matched as a regex with every `*` widened to `.*`.
    /// All other regex metacharacters in the line stay live.
    Glob(String),
    /// Line contains `**/`: the prefix before `**/` is matched by plain
    /// substring containment against full path strings. Shadowed by `Glob`
    /// in [`parse_rule`] since `**/` always contains `*`; the kind is kept
    /// because its containment semantics differ.
    RecursiveDir(String),
    /// Anything else: a single path joined onto the `.gitignore`'s parent.
    Literal(String),
}

/// Convert one raw line into a rule, or `None` for lines that never produce
/// candidates: blank lines, `#` comments, and lines containing `!` anywhere
/// (negations are unsupported and conservatively skipped rather than
/// inverted).
pub fn parse_rule(line: &str) -> Option<IgnoreRule> {
    if line.is_empty() || line.starts_with('#') || line.contains('!') {
        return None;
    }

    // Directory-marker simplification: "build/" means the same as "build".
    let line = line.strip_suffix('/').unwrap_or(line);

    if line.contains('*') {
        Some(IgnoreRule::Glob(line.replace('*', ".*")))
    } else if let Some(idx) = line.find("**/") {
        Some(IgnoreRule::RecursiveDir(line[..idx].to_string()))
    } else {
        Some(IgnoreRule::Literal(line.to_string()))
    }
}

/// True if any component of `path` is the VCS metadata directory.
pub fn in_metadata_dir(path: &Path) -> bool {
    path.components()
        .any(|c| c.as_os_str() == VCS_METADATA_DIR)
}

/// Expand one rule against the tree rooted at the `.gitignore`'s parent
/// directory. Enumeration errors count as "no match for that entry", and a
/// pattern that fails to parse yields no candidates for its line; neither
/// aborts the rest of the file.
pub fn expand_rule(rule: &IgnoreRule, parent: &Path) -> Vec<PathBuf> {
    match rule {
        IgnoreRule::Glob(pattern) => {
            // Full-path match, so anchor the pattern. Anything the line
            // contained besides `*` is live regex syntax.
            let regex = match Regex::new(&format!("^(?:{pattern})$")) {
                Ok(regex) => regex,
                Err(err) => {
                    eprintln!("{} unusable pattern {pattern}: {err}", "Warning:".yellow());
                    return Vec::new();
                }
            };
            descendants(parent)
                .filter(|path| regex.is_match(&path.to_string_lossy()))
                .collect()
        }
        IgnoreRule::RecursiveDir(fragment) => descendants(parent)
            .filter(|path| path.to_string_lossy().contains(fragment.as_str()))
            .collect(),
        IgnoreRule::Literal(name) => {
            let candidate = parent.join(name);
            if candidate.exists() {
                vec![candidate]
            } else {
                Vec::new()
            }
        }
    }
}

/// Every entry beneath `parent` eligible for matching: unreadable entries are
/// dropped and anything under the VCS metadata directory is filtered out.
fn descendants(parent: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(parent)
        .min_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.into_path())
        .filter(|path| !in_metadata_dir(path))
}
