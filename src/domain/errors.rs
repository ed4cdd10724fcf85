//! Domain validation errors.

use std::fmt;

/// A single broken invariant on a domain entity or command.
///
/// `campo` names the offending field (used as the notification key) and
/// `mensagem` is the user-facing message returned in error payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    campo: &'static str,
    mensagem: String,
}

impl ValidationError {
    /// Create a new validation error for `campo`.
    pub fn new(campo: &'static str, mensagem: impl Into<String>) -> Self {
        Self {
            campo,
            mensagem: mensagem.into(),
        }
    }

    /// The field that failed validation.
    pub fn campo(&self) -> &'static str {
        self.campo
    }

    /// The user-facing message.
    pub fn mensagem(&self) -> &str {
        &self.mensagem
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.campo, self.mensagem)
    }
}

impl std::error::Error for ValidationError {}

/// Convenience type alias for domain operations that can fail validation.
pub type DomainResult<T> = Result<T, ValidationError>;
