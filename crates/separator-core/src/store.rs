//! Ordered, id-addressed task list.
//!
//! The store keeps an ordered `Vec` of ids and a map from id to content.
//! Every operation re-establishes two invariants before returning:
//!
//! - the sequence is never empty (at least one row, possibly blank);
//! - ids are unique and the order and content map hold the same id set.
//!
//! Focus management belongs to the presentation layer.  Operations that
//! affect focus return a [`FocusHint`] instead of performing side effects.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::StoreError;
use crate::types::{TaskId, TaskItem};

/// Tells the presentation layer which row should receive input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusHint {
    pub id: TaskId,
}

/// Outcome of [`TaskListStore::insert_after`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    /// Id of the new blank row.
    pub id: TaskId,
    /// Set only when the new row became the last row.
    pub focus: Option<FocusHint>,
    /// The sequence after the insert.
    pub items: Vec<TaskItem>,
}

/// The ordered task collection edited by the user.
#[derive(Debug, Clone)]
pub struct TaskListStore {
    order: Vec<TaskId>,
    contents: HashMap<TaskId, String>,
}

impl TaskListStore {
    /// A store holding a single blank row.
    pub fn new() -> Self {
        let id = TaskId::new();
        Self {
            order: vec![id],
            contents: HashMap::from([(id, String::new())]),
        }
    }

    /// Build a store from row texts in order.  No texts yields one blank row.
    pub fn from_contents<I, S>(contents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut order = Vec::new();
        let mut map = HashMap::new();
        for content in contents {
            let id = TaskId::new();
            order.push(id);
            map.insert(id, content.into());
        }
        if order.is_empty() {
            return Self::new();
        }
        Self {
            order,
            contents: map,
        }
    }

    // -----------------------------------------------------------------------
    // Readers
    // -----------------------------------------------------------------------

    /// Number of rows (always at least 1).
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always `false`; present for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Snapshot of the rows in order.
    pub fn items(&self) -> Vec<TaskItem> {
        self.order
            .iter()
            .map(|id| TaskItem {
                id: *id,
                content: self.contents.get(id).cloned().unwrap_or_default(),
            })
            .collect()
    }

    /// Ids in order.
    pub fn ids(&self) -> &[TaskId] {
        &self.order
    }

    /// Content of the row with `id`, if present.
    pub fn get(&self, id: TaskId) -> Option<&str> {
        self.contents.get(&id).map(String::as_str)
    }

    /// Zero-based position of the row with `id`, if present.
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.order.iter().position(|x| *x == id)
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Insert a blank row immediately after `index`.
    ///
    /// An index past the end appends.  The new row is the focus target only
    /// when it ends up last.
    pub fn insert_after(&mut self, index: usize) -> Insertion {
        let at = index.saturating_add(1).min(self.order.len());
        let id = TaskId::new();
        self.order.insert(at, id);
        self.contents.insert(id, String::new());

        let is_last = at + 1 == self.order.len();
        debug!(position = at, len = self.order.len(), is_last, "task row inserted");

        Insertion {
            id,
            focus: is_last.then_some(FocusHint { id }),
            items: self.items(),
        }
    }

    /// Replace the content of `id`.  Unknown ids are ignored.
    pub fn update_content(&mut self, id: TaskId, text: impl Into<String>) {
        if let Some(slot) = self.contents.get_mut(&id) {
            *slot = text.into();
        }
    }

    /// Remove the row with `id`.
    ///
    /// Removing the sole remaining row clears its content instead.  Unknown
    /// ids are ignored.
    pub fn delete(&mut self, id: TaskId) {
        let Some(pos) = self.position(id) else {
            return;
        };

        if self.order.len() == 1 {
            self.update_content(id, String::new());
            debug!("sole task row cleared instead of removed");
            return;
        }

        self.order.remove(pos);
        self.contents.remove(&id);
        debug!(position = pos, len = self.order.len(), "task row removed");
    }

    /// Backward-delete on an empty field.
    ///
    /// Applies only when the row exists and its content is empty; returns the
    /// row that should receive focus afterwards (the previous row, else the
    /// new first row, else the cleared sole row).
    pub fn delete_if_empty(&mut self, id: TaskId) -> Option<FocusHint> {
        let pos = self.position(id)?;
        if !self.contents.get(&id).is_some_and(String::is_empty) {
            return None;
        }

        self.delete(id);

        let neighbor = if self.order.len() == 1 {
            self.order[0]
        } else if pos > 0 {
            self.order[pos - 1]
        } else {
            self.order[0]
        };
        Some(FocusHint { id: neighbor })
    }

    /// Replace the order wholesale.
    ///
    /// `new_order` must be a permutation of the stored ids; anything else is
    /// rejected and the current order is kept.
    pub fn reorder(&mut self, new_order: Vec<TaskId>) -> Result<(), StoreError> {
        let expected = self.order.len();
        if new_order.len() != expected {
            return Err(StoreError::NotAPermutation {
                expected,
                reason: format!("got {} ids", new_order.len()),
            });
        }

        let mut seen = HashSet::with_capacity(expected);
        for id in &new_order {
            if !self.contents.contains_key(id) {
                return Err(StoreError::NotAPermutation {
                    expected,
                    reason: format!("unknown id {id}"),
                });
            }
            if !seen.insert(*id) {
                return Err(StoreError::NotAPermutation {
                    expected,
                    reason: format!("duplicate id {id}"),
                });
            }
        }

        self.order = new_order;
        debug!(len = expected, "task rows reordered");
        Ok(())
    }

    /// Move the row at `from` so that it ends up at `to`.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<(), StoreError> {
        let len = self.order.len();
        for index in [from, to] {
            if index >= len {
                return Err(StoreError::IndexOutOfRange { index, len });
            }
        }
        let mut next = self.order.clone();
        let id = next.remove(from);
        next.insert(to, id);
        self.reorder(next)
    }

    /// Reset to a single blank row.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Default for TaskListStore {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
