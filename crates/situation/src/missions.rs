//! Mission queue
//!
//! Operator-tracked tasks with progress and priority. Tasks are retained
//! for the whole session; a task reaching 100% progress becomes terminal
//! and can no longer regress, though its priority may still be edited for
//! record-keeping.

use crate::error::{Result, SituationError};
use crate::types::{MissionTask, TaskPriority};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// Thread-safe queue of mission tasks
#[derive(Debug, Clone, Default)]
pub struct MissionQueue {
    tasks: Arc<Mutex<HashMap<String, MissionTask>>>,
}

impl MissionQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a task with zero progress
    ///
    /// Fails with `DuplicateTask` if the id already exists.
    pub fn create_task(&self, task_id: &str, description: &str, priority: TaskPriority) -> Result<()> {
        let mut tasks = self.tasks.lock().unwrap();
        if tasks.contains_key(task_id) {
            return Err(SituationError::DuplicateTask(task_id.to_string()));
        }

        info!(task = task_id, ?priority, "mission task created");
        tasks.insert(
            task_id.to_string(),
            MissionTask {
                task_id: task_id.to_string(),
                description: description.to_string(),
                progress_pct: 0,
                priority,
            },
        );
        Ok(())
    }

    /// Report task progress
    ///
    /// Fails with `UnknownTask` if the id does not exist, `InvalidRange`
    /// above 100, and `TerminalTask` when a task already at 100% is asked
    /// to regress below 100. Re-reporting 100 on a terminal task is
    /// accepted as a no-op.
    pub fn report_progress(&self, task_id: &str, progress_pct: u8) -> Result<()> {
        let mut tasks = self.tasks.lock().unwrap();
        let task = tasks
            .get_mut(task_id)
            .ok_or_else(|| SituationError::UnknownTask(task_id.to_string()))?;

        if progress_pct > 100 {
            return Err(SituationError::InvalidRange {
                field: "progress_pct",
                value: progress_pct as i64,
            });
        }

        if task.is_terminal() && progress_pct < 100 {
            return Err(SituationError::TerminalTask(task_id.to_string()));
        }

        task.progress_pct = progress_pct;
        if task.is_terminal() {
            info!(task = task_id, "mission task complete");
        } else {
            debug!(task = task_id, progress_pct, "mission progress updated");
        }
        Ok(())
    }

    /// Change a task's priority
    ///
    /// Always allowed, including on terminal tasks.
    pub fn set_priority(&self, task_id: &str, priority: TaskPriority) -> Result<()> {
        let mut tasks = self.tasks.lock().unwrap();
        let task = tasks
            .get_mut(task_id)
            .ok_or_else(|| SituationError::UnknownTask(task_id.to_string()))?;

        task.priority = priority;
        debug!(task = task_id, ?priority, "mission priority changed");
        Ok(())
    }

    /// Get an immutable copy of all tasks, most urgent first
    ///
    /// Ordered by priority severity descending (Critical > High > Normal),
    /// ties broken by ascending task id.
    pub fn snapshot(&self) -> Vec<MissionTask> {
        let tasks = self.tasks.lock().unwrap();
        let mut out: Vec<MissionTask> = tasks.values().cloned().collect();
        out.sort_by(|a, b| {
            b.priority
                .severity_level()
                .cmp(&a.priority.severity_level())
                .then_with(|| a.task_id.cmp(&b.task_id))
        });
        out
    }
}
