//! gitsweep - Interactive `.gitignore`-driven cleanup
//!
//! gitsweep walks a directory tree, finds `.gitignore` files, expands their
//! patterns against the surrounding filesystem, and offers every match for
//! deletion, one prompt at a time. Only a small pattern subset is understood:
//! literal paths, `*` globs, and `**/` prefixes. Negation lines are skipped,
//! never inverted, and nothing under a `.git` directory is ever offered.

pub mod patterns;
pub mod prompt;
pub mod scanner;

// Re-export commonly used items
pub use patterns::{expand_rule, parse_rule, IgnoreRule};
pub use prompt::{Decision, InteractivePrompt, RemovalPrompt};
pub use scanner::{process_gitignore, remove_path, scan, ExclusionSet};
