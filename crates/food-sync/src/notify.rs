//! User Notifications
//!
//! Transport failures are reported to the user through a single
//! `alert(message)` capability, with one fixed message per operation.

use std::cell::RefCell;
use std::fmt;

use thiserror::Error;

use crate::remote::TransportError;

/// Remote operations the dashboard performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Load,
    Add,
    Update,
    Delete,
    ToggleAvailability,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Load => "load",
            Operation::Add => "add",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::ToggleAvailability => "toggle availability",
        }
    }

    /// What the user is told when the operation fails
    pub fn alert_message(&self) -> &'static str {
        match self {
            Operation::Load => "Não foi possível carregar as informações. Verifique a conexão",
            Operation::Add => "Não foi possível adicionar o prato. Verifique a conexão",
            Operation::Update => "Não foi possível atualizar o prato",
            Operation::Delete => "Não foi possível remover o prato",
            Operation::ToggleAvailability => "Não foi possível alterar a disponibilidade do prato",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A remote operation that did not go through
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} failed: {source}")]
pub struct OperationError {
    pub operation: Operation,
    #[source]
    pub source: TransportError,
}

impl OperationError {
    pub fn new(operation: Operation, source: TransportError) -> Self {
        Self { operation, source }
    }

    /// Tell the user, without the underlying cause
    pub fn report(&self, notifier: &dyn Notifier) {
        notifier.alert(self.operation.alert_message());
    }
}

/// Presentation-layer alert
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// Keeps every alert; handy in tests and headless runs
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
