//! Task edits over a board's column list.
//!
//! New tasks are appended to the end of their column. Edits keep the task's
//! id and position and merge a [`TaskPatch`]: fields the patch leaves unset
//! keep their current value.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use super::column::clean_title;
use super::MutationError;
use crate::board::{locate_task, Column, Task, TaskId};

/// Editable fields of a task, as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl TaskDraft {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Write the trimmed draft onto `task`.
    fn apply(&self, task: &mut Task) -> Result<(), MutationError> {
        task.title = clean_title(&self.title)?;
        task.description = clean_description(&self.description);
        task.tags = clean_tags(&self.tags);
        Ok(())
    }
}

/// Partial edit of a task. `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl TaskPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Merge the set fields onto `task`, trimmed like a draft.
    fn apply(&self, task: &mut Task) -> Result<(), MutationError> {
        let title = self.title.as_deref().map(clean_title).transpose()?;
        if let Some(title) = title {
            task.title = title;
        }
        if let Some(description) = &self.description {
            task.description = clean_description(description);
        }
        if let Some(tags) = &self.tags {
            task.tags = clean_tags(tags);
        }
        Ok(())
    }
}

/// Blank descriptions are stored as absent.
fn clean_description(description: &str) -> Option<String> {
    let description = description.trim();
    (!description.is_empty()).then(|| description.to_owned())
}

/// Tags are trimmed, blanks dropped, and an empty list stored as absent.
fn clean_tags(tags: &[String]) -> Option<Vec<String>> {
    let tags: Vec<String> = tags
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect();
    (!tags.is_empty()).then_some(tags)
}

/// Append a new task built from `draft` to column `column_id`.
///
/// # Errors
///
/// Returns [`MutationError::EmptyTitle`] for a blank title, or
/// [`MutationError::ColumnNotFound`] if no such column exists.
pub fn add_task(columns: &[Column], column_id: &str, draft: &TaskDraft) -> Result<(Vec<Column>, TaskId), MutationError> {
    let mut task = Task::new(String::new());
    draft.apply(&mut task)?;
    let id = task.id.clone();

    let mut next = columns.to_vec();
    let column = next
        .iter_mut()
        .find(|c| c.id == column_id)
        .ok_or_else(|| MutationError::ColumnNotFound(column_id.to_owned()))?;
    column.tasks.push(task);
    Ok((next, id))
}

/// Remove the task `task_id` from whichever column holds it.
///
/// # Errors
///
/// Returns [`MutationError::TaskNotFound`] if no column holds the task.
pub fn delete_task(columns: &[Column], task_id: &str) -> Result<Vec<Column>, MutationError> {
    let (ci, ti) = find_task(columns, task_id)?;
    let mut next = columns.to_vec();
    next[ci].tasks.remove(ti);
    Ok(next)
}

/// Merge `patch` onto task `task_id`.
///
/// # Errors
///
/// Returns [`MutationError::EmptyTitle`] if the patch sets a blank title, or
/// [`MutationError::TaskNotFound`] if no column holds the task.
pub fn update_task(columns: &[Column], task_id: &str, patch: &TaskPatch) -> Result<Vec<Column>, MutationError> {
    let (ci, ti) = find_task(columns, task_id)?;
    let mut next = columns.to_vec();
    patch.apply(&mut next[ci].tasks[ti])?;
    Ok(next)
}

fn find_task(columns: &[Column], task_id: &str) -> Result<(usize, usize), MutationError> {
    locate_task(columns, task_id).ok_or_else(|| MutationError::TaskNotFound(task_id.to_owned()))
}
