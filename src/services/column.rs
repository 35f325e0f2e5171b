//! Column edits over a board's column list.

#[cfg(test)]
#[path = "column_test.rs"]
mod column_test;

use super::MutationError;
use crate::board::{Column, ColumnId};

/// Trim `title`, rejecting a blank result.
pub(crate) fn clean_title(title: &str) -> Result<String, MutationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(MutationError::EmptyTitle);
    }
    Ok(title.to_owned())
}

/// Append an empty column titled `title`.
///
/// # Errors
///
/// Returns [`MutationError::EmptyTitle`] if `title` is blank after trimming.
pub fn add_column(columns: &[Column], title: &str) -> Result<(Vec<Column>, ColumnId), MutationError> {
    let column = Column::new(clean_title(title)?);
    let id = column.id.clone();
    let mut next = columns.to_vec();
    next.push(column);
    Ok((next, id))
}

/// Remove the column `column_id` together with its tasks.
///
/// # Errors
///
/// Returns [`MutationError::ColumnNotFound`] if no such column exists.
pub fn delete_column(columns: &[Column], column_id: &str) -> Result<Vec<Column>, MutationError> {
    if !columns.iter().any(|c| c.id == column_id) {
        return Err(MutationError::ColumnNotFound(column_id.to_owned()));
    }
    Ok(columns.iter().filter(|c| c.id != column_id).cloned().collect())
}

/// Retitle the column `column_id`.
///
/// # Errors
///
/// Returns [`MutationError::EmptyTitle`] for a blank title, or
/// [`MutationError::ColumnNotFound`] if no such column exists.
pub fn rename_column(columns: &[Column], column_id: &str, title: &str) -> Result<Vec<Column>, MutationError> {
    let title = clean_title(title)?;
    let mut next = columns.to_vec();
    let column = next
        .iter_mut()
        .find(|c| c.id == column_id)
        .ok_or_else(|| MutationError::ColumnNotFound(column_id.to_owned()))?;
    column.title = title;
    Ok(next)
}
