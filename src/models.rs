//! Task Model
//!
//! Data structure persisted to the task-list slot.

use serde::{Deserialize, Serialize};

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: u64, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}
