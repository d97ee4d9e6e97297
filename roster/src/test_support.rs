//! Test-only helpers: deterministic groups, in-memory backend, scripted
//! confirmation.

use std::cell::{Cell, RefCell};

use anyhow::{Result, anyhow};

use crate::group::{Group, Status};
use crate::io::confirm::Confirmation;
use crate::io::snapshot_store::SnapshotBackend;

/// Create a group with explicit fields.
pub fn group(id: u64, name: &str, count: u32, status: Status) -> Group {
    Group {
        id,
        name: name.to_string(),
        count,
        status,
    }
}

/// Snapshot backend held in memory, inspectable after use.
///
/// Saves can be switched to fail for exercising the write-failure path.
#[derive(Debug, Default)]
pub struct MemorySnapshot {
    payload: RefCell<Option<String>>,
    fail_saves: Cell<bool>,
    saves: Cell<usize>,
}

impl MemorySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-seeded with raw snapshot text.
    pub fn with_payload(payload: &str) -> Self {
        Self {
            payload: RefCell::new(Some(payload.to_string())),
            ..Self::default()
        }
    }

    /// Make subsequent saves fail (or succeed again).
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    /// The currently stored payload, if any.
    pub fn saved(&self) -> Option<String> {
        self.payload.borrow().clone()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl SnapshotBackend for MemorySnapshot {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.payload.borrow().clone())
    }

    fn save(&self, payload: &str) -> Result<()> {
        if self.fail_saves.get() {
            return Err(anyhow!("backend unavailable"));
        }
        *self.payload.borrow_mut() = Some(payload.to_string());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.payload.borrow_mut() = None;
        Ok(())
    }
}

/// Confirmation with a fixed answer, counting invocations.
#[derive(Debug)]
pub struct ScriptedConfirm {
    answer: bool,
    asked: Cell<usize>,
}

impl ScriptedConfirm {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: Cell::new(0),
        }
    }

    /// How many times the store asked for confirmation.
    pub fn asked(&self) -> usize {
        self.asked.get()
    }
}

impl Confirmation for ScriptedConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        self.asked.set(self.asked.get() + 1);
        self.answer
    }
}
