//! Contact view model.

use crate::commands::AdicionarContato;
use crate::domain::{ClienteId, Contato, ContatoId, Entity};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A contact as sent and received over HTTP.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContatoViewModel {
    /// Generated server-side when absent or nil
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    /// Area code, two digits
    pub ddd: i32,

    /// Phone number, nine digits
    pub telefone: i32,

    pub email: String,

    /// Owning customer; taken from the route on creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cliente_id: Option<Uuid>,
}

impl ContatoViewModel {
    /// Build the command that registers this contact under `cliente_id`.
    pub fn into_comando(self, cliente_id: ClienteId) -> AdicionarContato {
        AdicionarContato::new(
            ContatoId::ou_gerar(self.id),
            cliente_id,
            self.ddd,
            self.telefone,
            self.email,
        )
    }
}

impl From<&Contato> for ContatoViewModel {
    fn from(contato: &Contato) -> Self {
        Self {
            id: Some(contato.id().into_inner()),
            ddd: contato.ddd(),
            telefone: contato.telefone(),
            email: contato.email().to_string(),
            cliente_id: Some(contato.cliente_id().into_inner()),
        }
    }
}
