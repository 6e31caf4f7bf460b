//! In-memory task record store.

use super::{StoreError, TaskId, TaskRecord, ValidatedSubmission};
use mockable::Clock;
use std::collections::HashSet;

/// Ordered collection of task records, newest first.
///
/// The store is owned by whoever drives it; it holds no global state and
/// performs no I/O.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    records: Vec<TaskRecord>,
    last_issued: Option<i64>,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrates a store from previously persisted records.
    ///
    /// Record order is kept. When an identifier appears more than once only
    /// the first record is retained. New identifiers are issued above the
    /// highest loaded one.
    #[must_use]
    pub fn from_records(records: Vec<TaskRecord>) -> Self {
        let mut seen = HashSet::with_capacity(records.len());
        let mut kept = Vec::with_capacity(records.len());
        for record in records {
            if seen.insert(record.id()) {
                kept.push(record);
            } else {
                tracing::warn!(task_id = %record.id(), "dropping task with duplicate identifier");
            }
        }
        let last_issued = kept.iter().map(|record| record.id().value()).max();
        Self {
            records: kept,
            last_issued,
        }
    }

    /// Adds a validated task at the front of the store and returns it.
    pub fn add(&mut self, submission: ValidatedSubmission, clock: &impl Clock) -> TaskRecord {
        let created_at = clock.utc();
        let id = self.issue_id(created_at.timestamp_millis());
        let record = TaskRecord::new(id, submission, created_at);
        self.records.insert(0, record.clone());
        record
    }

    /// Flips the completion flag of a task and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no task has the identifier.
    pub fn toggle_completed(&mut self, id: TaskId) -> Result<bool, StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(record.toggle_completed())
    }

    /// Removes a task and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no task has the identifier; the
    /// store is left unchanged.
    pub fn remove(&mut self, id: TaskId) -> Result<TaskRecord, StoreError> {
        let position = self
            .records
            .iter()
            .position(|record| record.id() == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(self.records.remove(position))
    }

    /// Returns every record in store order.
    #[must_use]
    pub fn all(&self) -> &[TaskRecord] {
        &self.records
    }

    /// Looks up a record by identifier.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&TaskRecord> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Issues an identifier no lower than `candidate` and strictly above any
    /// previously issued or loaded identifier.
    ///
    /// When no identifier is left above, an unused one below the held
    /// records is issued instead.
    fn issue_id(&mut self, candidate: i64) -> TaskId {
        let Some(last) = self.last_issued else {
            self.last_issued = Some(candidate);
            return TaskId::from_raw(candidate);
        };
        match last.checked_add(1) {
            Some(bumped) => {
                let next = candidate.max(bumped);
                self.last_issued = Some(next);
                TaskId::from_raw(next)
            }
            None => TaskId::from_raw(self.unused_id_below_records(candidate)),
        }
    }

    fn unused_id_below_records(&self, candidate: i64) -> i64 {
        let held = |id: i64| self.records.iter().any(|record| record.id().value() == id);
        if !held(candidate) {
            return candidate;
        }
        self.records
            .iter()
            .map(|record| record.id().value())
            .min()
            .and_then(|lowest| lowest.checked_sub(1))
            .or_else(|| (i64::MIN..i64::MAX).find(|id| !held(*id)))
            .unwrap_or(candidate)
    }
}
