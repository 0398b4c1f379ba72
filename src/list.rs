use crate::error::{Error, Result};
use crate::task::Task;

/// Owns the ordered collection of tasks for one session.
///
/// Ids are sequential from 1 in creation order and are never reused. Tasks
/// cannot be removed. Accessors return snapshots; `mark_done` on the list is
/// the only way to mutate a task after creation.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new task and return a copy of it. The Nth task added gets
    /// id N. The description is taken as-is, empty text included.
    pub fn add_task(&mut self, description: impl Into<String>) -> Task {
        let id = self.tasks.len() as u32 + 1;
        let task = Task::new(id, description.into());
        self.tasks.push(task.clone());
        task
    }

    /// Mark the task with `id` as done. Unknown ids leave the collection
    /// untouched and report which id was requested.
    pub fn mark_done(&mut self, id: u32) -> Result<()> {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.mark_done();
                Ok(())
            }
            None => Err(Error::TaskNotFound(id)),
        }
    }

    /// Snapshot of every task in creation order.
    pub fn all(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Tasks not yet done, in creation order.
    pub fn incomplete(&self) -> Vec<Task> {
        self.tasks.iter().filter(|t| !t.done).cloned().collect()
    }

    /// Tasks already done, in creation order.
    pub fn complete(&self) -> Vec<Task> {
        self.tasks.iter().filter(|t| t.done).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
