//! Command handlers.
//!
//! Handlers consume one command type each, build or mutate entities, and
//! persist them. Every recoverable failure is pushed into the request's
//! [`Notifications`]; handlers never return errors to the mediator.

mod cliente_handler;
mod contato_handler;

pub use cliente_handler::ClienteCommandHandler;
pub use contato_handler::ContatoCommandHandler;

use crate::commands::Command;
use crate::error::RepositoryError;
use crate::notifications::{DomainNotification, Notifications};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

pub const MSG_CLIENTE_NAO_ENCONTRADO: &str = "Cliente não encontrado.";
pub const MSG_CLIENTE_DUPLICADO: &str = "Cliente já cadastrado.";
pub const MSG_CONTATO_NAO_ENCONTRADO: &str = "Contato não encontrado.";
pub const MSG_CONTATO_DUPLICADO: &str = "Contato já cadastrado.";
pub const MSG_CLIENTE_POSSUI_CONTATO: &str = "O cliente já possui um contato cadastrado.";
pub const MSG_FALHA_REPOSITORIO: &str = "Não foi possível concluir a operação.";

/// Write lock shared by every handler over the same store.
///
/// Held from the first existence check until the last write of a command,
/// so two commands never interleave their reads and writes.
pub type TravaEscrita = Arc<Mutex<()>>;

/// Handler for command `C`.
#[async_trait]
pub trait CommandHandler<C: Command>: Send + Sync {
    /// Apply the command, raising notifications for anything that went wrong.
    async fn handle(&self, command: C, notifications: &mut Notifications);
}

/// Report an unexpected storage failure.
pub(crate) fn notificar_falha_repositorio(notifications: &mut Notifications, err: RepositoryError) {
    tracing::error!(error = %err, "Repository operation failed");
    notifications.notificar(DomainNotification::new("repositorio", MSG_FALHA_REPOSITORIO));
}
