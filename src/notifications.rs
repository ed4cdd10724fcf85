//! Request-scoped domain notifications.
//!
//! A [`Notifications`] value is created per request by the HTTP layer and
//! passed by `&mut` through the mediator and the queries. Handlers push
//! recoverable failures into it instead of returning hard errors; the
//! controller then asks [`Notifications::operacao_valida`] to pick the
//! response.

use crate::domain::ValidationError;
use serde::Serialize;

/// A recoverable failure raised while handling a command or query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainNotification {
    /// Field or concern the notification is about
    pub chave: String,

    /// User-facing message
    pub valor: String,
}

impl DomainNotification {
    pub fn new(chave: impl Into<String>, valor: impl Into<String>) -> Self {
        Self {
            chave: chave.into(),
            valor: valor.into(),
        }
    }
}

impl From<ValidationError> for DomainNotification {
    fn from(err: ValidationError) -> Self {
        Self::new(err.campo(), err.mensagem())
    }
}

/// Notifications collected during one request.
#[derive(Debug, Default, Clone)]
pub struct Notifications {
    items: Vec<DomainNotification>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a notification.
    pub fn notificar(&mut self, notification: impl Into<DomainNotification>) {
        let notification = notification.into();
        tracing::debug!(
            chave = %notification.chave,
            valor = %notification.valor,
            "Domain notification raised"
        );
        self.items.push(notification);
    }

    /// Record every error in `errors`.
    pub fn notificar_todos<I>(&mut self, errors: I)
    where
        I: IntoIterator,
        I::Item: Into<DomainNotification>,
    {
        for err in errors {
            self.notificar(err);
        }
    }

    /// True while no notification has been raised in this request.
    pub fn operacao_valida(&self) -> bool {
        self.items.is_empty()
    }

    pub fn notificacoes(&self) -> &[DomainNotification] {
        &self.items
    }

    /// The user-facing messages, in the order they were raised.
    pub fn mensagens_erro(&self) -> Vec<String> {
        self.items.iter().map(|n| n.valor.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
