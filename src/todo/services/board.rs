//! Service layer driving the task list: validate, mutate, persist, view.

use crate::todo::{
    domain::{ExportDocument, ExportError, StoreError, TaskId, TaskRecord, TaskStore},
    ports::{StoredTasks, TaskStorage},
    services::{CommandOutcome, SubmitTaskRequest, TodoCommand},
    validation::{
        DateError, NameError, SubmissionError, SubmissionValidator, ValidationConfig,
    },
    view::{FilterCriteria, FilterUpdate, TaskStats, ViewModel, build_view, compute_stats},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for to-do commands.
#[derive(Debug, Error)]
pub enum TodoServiceError {
    /// The submission failed validation.
    #[error(transparent)]
    Validation(#[from] SubmissionError),
    /// The store rejected the mutation.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The export could not be produced.
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Result type for to-do service operations.
pub type TodoServiceResult<T> = Result<T, TodoServiceError>;

/// Owns the task store and the current filter criteria, and handles the
/// commands a frontend raises.
///
/// Every mutation is written back to storage. Storage failures are logged
/// and otherwise ignored; the in-memory store stays authoritative.
pub struct TodoService<S, C>
where
    S: TaskStorage,
    C: Clock + Send + Sync,
{
    store: TaskStore,
    criteria: FilterCriteria,
    validator: SubmissionValidator,
    storage: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> TodoService<S, C>
where
    S: TaskStorage,
    C: Clock + Send + Sync,
{
    /// Creates a service with default validation, loading any saved tasks.
    #[must_use]
    pub fn new(storage: Arc<S>, clock: Arc<C>) -> Self {
        Self::with_config(storage, clock, ValidationConfig::default())
    }

    /// Creates a service with a custom validation configuration, loading any
    /// saved tasks.
    ///
    /// A storage slot that cannot be read yields an empty list.
    #[must_use]
    pub fn with_config(storage: Arc<S>, clock: Arc<C>, config: ValidationConfig) -> Self {
        let store = load_store(&*storage);
        Self {
            store,
            criteria: FilterCriteria::default(),
            validator: SubmissionValidator::with_config(config),
            storage,
            clock,
        }
    }

    /// Validates and adds a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Validation`] with every failing field when
    /// the submission is rejected; the store is left unchanged.
    pub fn submit_new_task(&mut self, request: &SubmitTaskRequest) -> TodoServiceResult<TaskRecord> {
        let submission = self.validator.validate_submission(
            request.name(),
            request.due_date(),
            request.priority(),
            self.store.all(),
            self.today(),
        )?;
        let record = self.store.add(submission, &*self.clock);
        tracing::debug!(task_id = %record.id(), priority = %record.priority(), "task added");
        self.persist();
        Ok(record)
    }

    /// Checks a task name against the current tasks without submitting.
    ///
    /// # Errors
    ///
    /// Returns the [`NameError`] the submission would fail with.
    pub fn check_name(&self, name: &str) -> Result<(), NameError> {
        self.validator.validate_name(name, self.store.all())
    }

    /// Checks a due date against today without submitting.
    ///
    /// # Errors
    ///
    /// Returns the [`DateError`] the submission would fail with.
    pub fn check_date(&self, date: Option<NaiveDate>) -> Result<NaiveDate, DateError> {
        self.validator.validate_date(date, self.today())
    }

    /// Flips a task between pending and completed, returning the new state.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Store`] when the task does not exist.
    pub fn toggle_task(&mut self, id: TaskId) -> TodoServiceResult<bool> {
        let completed = self.store.toggle_completed(id)?;
        tracing::debug!(task_id = %id, completed, "task toggled");
        self.persist();
        Ok(completed)
    }

    /// Deletes a task, returning the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Store`] when the task does not exist.
    pub fn delete_task(&mut self, id: TaskId) -> TodoServiceResult<TaskRecord> {
        let removed = self.store.remove(id)?;
        tracing::debug!(task_id = %id, "task deleted");
        self.persist();
        Ok(removed)
    }

    /// Applies a partial filter change.
    pub fn set_filter(&mut self, update: FilterUpdate) {
        self.criteria.apply(update);
    }

    /// Resets every filter criterion.
    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    /// Resets the search text, keeping the other criteria.
    pub fn clear_search(&mut self) {
        self.criteria.clear_search();
    }

    /// Serialises every task, in store order, as a dated JSON export.
    ///
    /// The file name carries the UTC calendar day of the export.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Export`] when serialisation fails.
    pub fn export_all(&self) -> TodoServiceResult<ExportDocument> {
        let exported_on = self.clock.utc().date_naive();
        let document = ExportDocument::from_records(self.store.all(), exported_on)?;
        Ok(document)
    }

    /// Handles a single frontend command.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying operation.
    pub fn dispatch(&mut self, command: TodoCommand) -> TodoServiceResult<CommandOutcome> {
        match command {
            TodoCommand::SubmitNewTask(request) => {
                self.submit_new_task(&request).map(CommandOutcome::TaskAdded)
            }
            TodoCommand::SetFilter(update) => {
                self.set_filter(update);
                Ok(CommandOutcome::FiltersChanged)
            }
            TodoCommand::ClearFilters => {
                self.clear_filters();
                Ok(CommandOutcome::FiltersChanged)
            }
            TodoCommand::ClearSearch => {
                self.clear_search();
                Ok(CommandOutcome::FiltersChanged)
            }
            TodoCommand::ToggleTask(id) => self
                .toggle_task(id)
                .map(|completed| CommandOutcome::TaskToggled { id, completed }),
            TodoCommand::DeleteTask(id) => self.delete_task(id).map(CommandOutcome::TaskDeleted),
            TodoCommand::ExportAll => self.export_all().map(CommandOutcome::Exported),
        }
    }

    /// Returns every task in store order, newest first.
    #[must_use]
    pub fn tasks(&self) -> &[TaskRecord] {
        self.store.all()
    }

    /// Returns the active filter criteria.
    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Returns counts over the whole store.
    #[must_use]
    pub fn stats(&self) -> TaskStats {
        compute_stats(self.store.all())
    }

    /// Derives the current view model.
    #[must_use]
    pub fn view(&self) -> ViewModel {
        build_view(self.store.all(), &self.criteria, self.stats(), self.today())
    }

    fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }

    fn persist(&self) {
        let snapshot = StoredTasks::new(self.store.all().to_vec(), self.clock.utc());
        if let Err(err) = self.storage.save(&snapshot) {
            tracing::error!(error = %err, tasks = self.store.len(), "failed to save task list");
        }
    }
}

fn load_store(storage: &impl TaskStorage) -> TaskStore {
    match storage.load() {
        Ok(Some(snapshot)) => {
            tracing::info!(
                tasks = snapshot.todos().len(),
                last_updated = %snapshot.last_updated(),
                "loaded saved task list"
            );
            TaskStore::from_records(snapshot.into_todos())
        }
        Ok(None) => TaskStore::new(),
        Err(err) => {
            tracing::error!(error = %err, "failed to load saved task list; starting empty");
            TaskStore::new()
        }
    }
}
