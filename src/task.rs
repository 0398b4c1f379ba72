use std::fmt;

use serde::Serialize;

/// A single to-do item. Ids are assigned by [`TaskList`](crate::list::TaskList)
/// at creation time and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: u32,
    pub description: String,
    pub done: bool,
}

impl Task {
    pub(crate) fn new(id: u32, description: String) -> Self {
        Self {
            id,
            description,
            done: false,
        }
    }

    /// Mark the task as complete. Idempotent.
    pub fn mark_done(&mut self) {
        self.done = true;
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.done { "[x]" } else { "[ ]" };
        write!(f, "{status} (#{}) {}", self.id, self.description)
    }
}
