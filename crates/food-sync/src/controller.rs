//! Form Controller
//!
//! Drives one add or edit session of the food modal:
//!
//! ```text
//! Idle → Validating → Submitting → Success | ValidationFailed | SubmitFailed
//! ```
//!
//! Submission is split in three steps so a UI can release the controller
//! while the request is on the wire: [`FormController::prepare`] validates
//! and builds a [`Submission`], [`Submission::send`] talks to the collection,
//! [`FormController::complete`] decides what gets committed. Responses for a
//! session that was closed in the meantime are dropped.

use log::{debug, warn};
use thiserror::Error;

use crate::domain::{FoodDraft, FoodForm, FoodItem, FoodPatch};
use crate::notify::{Notifier, Operation, OperationError};
use crate::remote::{RemoteCollection, TransportResult};
use crate::store::Commit;
use crate::validation::{validate, FieldErrors, ValidationSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    ValidationFailed,
    SubmitFailed,
}

/// Identifies one open/close cycle of the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

/// Add a new dish, or edit the one held by the session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionMode {
    Add,
    Edit(FoodItem),
}

#[derive(Debug, Clone, PartialEq)]
struct Session {
    id: SessionId,
    mode: SessionMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("validation failed: {0}")]
    Invalid(FieldErrors),
    #[error("no form is open")]
    NoSession,
    #[error("a submission is already in flight")]
    InFlight,
}

/// Remote call a validated form turns into
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Create(FoodDraft),
    Update { id: i64, patch: FoodPatch },
}

/// A validated form, ready to be sent
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    session: SessionId,
    request: Request,
}

impl Submission {
    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn operation(&self) -> Operation {
        match self.request {
            Request::Create(_) => Operation::Add,
            Request::Update { .. } => Operation::Update,
        }
    }

    pub async fn send<C>(&self, client: &C) -> TransportResult<FoodItem>
    where
        C: RemoteCollection<FoodItem> + ?Sized,
    {
        match &self.request {
            Request::Create(draft) => client.create(draft).await,
            Request::Update { id, patch } => client.update(*id, patch).await,
        }
    }
}

/// How a submit attempt ended
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Server confirmed; apply the commit to the list
    Committed(Commit<FoodItem>),
    /// Field errors published, modal stays open
    Invalid(FieldErrors),
    /// Remote call failed and the user was alerted
    Failed(OperationError),
    /// Response arrived for a session that is no longer open
    Stale,
    /// Nothing was sent
    Rejected(FormError),
}

#[derive(Debug, Clone)]
pub struct FormController {
    schema: ValidationSchema,
    session: Option<Session>,
    next_session: u64,
    state: FormState,
    errors: FieldErrors,
    id_source: fn() -> i64,
}

impl FormController {
    pub fn new() -> Self {
        Self {
            schema: ValidationSchema::food(),
            session: None,
            next_session: 0,
            state: FormState::Idle,
            errors: FieldErrors::default(),
            id_source: FoodDraft::provisional_id,
        }
    }

    pub fn with_schema(mut self, schema: ValidationSchema) -> Self {
        self.schema = schema;
        self
    }

    /// Source of provisional ids for new dishes
    pub fn with_id_source(mut self, id_source: fn() -> i64) -> Self {
        self.id_source = id_source;
        self
    }

    // ========================
    // Session
    // ========================

    pub fn open_add(&mut self) -> SessionId {
        self.open(SessionMode::Add)
    }

    pub fn open_edit(&mut self, food: FoodItem) -> SessionId {
        self.open(SessionMode::Edit(food))
    }

    fn open(&mut self, mode: SessionMode) -> SessionId {
        self.next_session += 1;
        let id = SessionId(self.next_session);
        debug!("form session {:?} opened ({:?})", id, mode);
        self.session = Some(Session { id, mode });
        self.errors = FieldErrors::default();
        self.state = FormState::Idle;
        id
    }

    /// Close the modal; an in-flight response for this session becomes stale
    pub fn close(&mut self) {
        if let Some(session) = self.session.take() {
            debug!("form session {:?} closed", session.id);
        }
        self.errors = FieldErrors::default();
        self.state = FormState::Idle;
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session_id(&self) -> Option<SessionId> {
        self.session.as_ref().map(|session| session.id)
    }

    pub fn mode(&self) -> Option<&SessionMode> {
        self.session.as_ref().map(|session| &session.mode)
    }

    /// The dish being edited, if this is an edit session
    pub fn editing(&self) -> Option<&FoodItem> {
        match self.mode() {
            Some(SessionMode::Edit(food)) => Some(food),
            _ => None,
        }
    }

    /// Values the inputs start with
    pub fn initial_form(&self) -> FoodForm {
        self.editing().map(FoodForm::from).unwrap_or_default()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    fn transition(&mut self, next: FormState) {
        debug!("form {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    // ========================
    // Submit
    // ========================

    /// Validate `form` and build the request for the open session
    pub fn prepare(&mut self, form: &FoodForm) -> Result<Submission, FormError> {
        let (session, editing_id) = match &self.session {
            Some(session) => (session.id, self.editing().map(|food| food.id)),
            None => return Err(FormError::NoSession),
        };
        if self.is_submitting() {
            return Err(FormError::InFlight);
        }

        self.transition(FormState::Validating);
        let food = match validate(form, &self.schema) {
            Ok(food) => food,
            Err(errors) => {
                self.transition(FormState::ValidationFailed);
                debug!("form rejected: {}", errors);
                self.errors = errors.clone();
                self.transition(FormState::Idle);
                return Err(FormError::Invalid(errors));
            }
        };

        self.errors = FieldErrors::default();
        let request = match editing_id {
            None => Request::Create(FoodDraft::new(food, (self.id_source)())),
            Some(id) => Request::Update {
                id,
                patch: FoodPatch::from(food),
            },
        };
        self.transition(FormState::Submitting);
        Ok(Submission { session, request })
    }

    /// Settle a sent submission
    pub fn complete(
        &mut self,
        submission: &Submission,
        result: TransportResult<FoodItem>,
        notifier: &dyn Notifier,
    ) -> SubmitOutcome {
        if self.session_id() != Some(submission.session) {
            warn!("dropping response for closed form session {:?}", submission.session);
            return SubmitOutcome::Stale;
        }

        match result {
            Ok(food) => {
                let commit = match &submission.request {
                    Request::Create(_) => Commit::Append(food),
                    Request::Update { id, .. } => {
                        if food.id != *id {
                            warn!("server answered update of {} with id {}", id, food.id);
                        }
                        Commit::Replace(*id, food)
                    }
                };
                self.transition(FormState::Success);
                self.session = None;
                self.errors = FieldErrors::default();
                SubmitOutcome::Committed(commit)
            }
            Err(source) => {
                let error = OperationError::new(submission.operation(), source);
                warn!("{}", error);
                error.report(notifier);
                self.transition(FormState::SubmitFailed);
                SubmitOutcome::Failed(error)
            }
        }
    }

    /// Prepare, send and complete in one go
    pub async fn submit<C>(
        &mut self,
        client: &C,
        form: &FoodForm,
        notifier: &dyn Notifier,
    ) -> SubmitOutcome
    where
        C: RemoteCollection<FoodItem> + ?Sized,
    {
        let submission = match self.prepare(form) {
            Ok(submission) => submission,
            Err(FormError::Invalid(errors)) => return SubmitOutcome::Invalid(errors),
            Err(rejected) => return SubmitOutcome::Rejected(rejected),
        };
        let result = submission.send(client).await;
        self.complete(&submission, result, notifier)
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}
