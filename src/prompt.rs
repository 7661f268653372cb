//! Removal decisions: the callback the resolver suspends on, plus the
//! interactive terminal implementation.

use colored::Colorize;
use dialoguer::Confirm;
use std::path::Path;

/// Outcome of offering one candidate path. Consumed immediately, never
/// stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Skip,
}

/// Supplies a decision for each candidate the resolver offers. The resolver
/// blocks on this call; implementations own any retry-on-invalid-input loop.
pub trait RemovalPrompt {
    fn confirm(&mut self, path: &Path) -> Decision;
}

/// Prompts on the controlling terminal. Invalid keystrokes are discarded and
/// the prompt repeats until a yes/no answer arrives; a prompt I/O failure
/// (for example, no terminal at all) is reported and treated as a skip.
pub struct InteractivePrompt;

impl RemovalPrompt for InteractivePrompt {
    fn confirm(&mut self, path: &Path) -> Decision {
        let kind = if path.is_dir() { "directory" } else { "file" };
        let question = format!("- Remove {} {kind}?", path.display());
        match Confirm::new().with_prompt(question).interact() {
            Ok(true) => Decision::Approve,
            Ok(false) => Decision::Skip,
            Err(err) => {
                eprintln!("{} prompt failed: {err}", "Warning:".yellow());
                Decision::Skip
            }
        }
    }
}
