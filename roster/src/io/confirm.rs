//! Confirmation capability gating destructive operations.
//!
//! A reset wipes every group and the persisted snapshot, so the store only
//! proceeds after the supplied [`Confirmation`] answers yes. Injecting the
//! capability keeps the flow testable without a real interactive prompt.

use std::io::{self, BufRead, Write};

/// Synchronous yes/no check invoked before a destructive mutation.
pub trait Confirmation {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Interactive y/N prompt on stderr, answer read from stdin.
///
/// Anything other than an explicit yes declines, including a read error.
#[derive(Debug, Default)]
pub struct StdinConfirm;

impl Confirmation for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        eprint!("{prompt} [y/N] ");
        if io::stderr().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        let answer = answer.trim();
        answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
    }
}

/// Always confirms. Used for `--yes` invocations.
#[derive(Debug, Default)]
pub struct AssumeYes;

impl Confirmation for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}
