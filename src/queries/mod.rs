//! Read side: customer and contact listings.
//!
//! Queries never change state. Not-found and storage failures are reported
//! through the request's [`Notifications`] so the controller can answer
//! with the same error channel used by commands.

use crate::domain::{ClienteId, Entity};
use crate::error::RepositoryError;
use crate::handlers::{notificar_falha_repositorio, MSG_CLIENTE_NAO_ENCONTRADO};
use crate::models::{ClienteViewModel, ContatoViewModel};
use crate::notifications::{DomainNotification, Notifications};
use crate::repositories::{ClienteRepository, ContatoRepository};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// Read operations over the registration store.
#[async_trait]
pub trait CadastroQueries: Send + Sync {
    /// Every customer with its contact, oldest registration first.
    async fn obter_clientes(&self, notifications: &mut Notifications) -> Vec<ClienteViewModel>;

    /// Every contact.
    async fn obter_contatos(&self, notifications: &mut Notifications) -> Vec<ContatoViewModel>;

    /// One customer with its contact.
    ///
    /// Raises a notification and returns `None` when the customer is unknown.
    async fn obter_cliente_com_contato_por_id(
        &self,
        id: ClienteId,
        notifications: &mut Notifications,
    ) -> Option<ClienteViewModel>;
}

/// Default implementation of [`CadastroQueries`] over the repositories.
pub struct CadastroQueriesImpl {
    clientes: Arc<dyn ClienteRepository>,
    contatos: Arc<dyn ContatoRepository>,
}

impl CadastroQueriesImpl {
    pub fn new(clientes: Arc<dyn ClienteRepository>, contatos: Arc<dyn ContatoRepository>) -> Self {
        Self { clientes, contatos }
    }
}

#[async_trait]
impl CadastroQueries for CadastroQueriesImpl {
    async fn obter_clientes(&self, notifications: &mut Notifications) -> Vec<ClienteViewModel> {
        let clientes = match self.clientes.obter_todos().await {
            Ok(clientes) => clientes,
            Err(err) => {
                notificar_falha_repositorio(notifications, err);
                return Vec::new();
            }
        };

        let contatos = match self.contatos.obter_todos().await {
            Ok(contatos) => contatos,
            Err(err) => {
                notificar_falha_repositorio(notifications, err);
                return Vec::new();
            }
        };

        let por_cliente: HashMap<ClienteId, _> =
            contatos.iter().map(|c| (c.cliente_id(), c)).collect();

        clientes
            .iter()
            .map(|cliente| {
                ClienteViewModel::from_entidades(cliente, por_cliente.get(&cliente.id()).copied())
            })
            .collect()
    }

    async fn obter_contatos(&self, notifications: &mut Notifications) -> Vec<ContatoViewModel> {
        match self.contatos.obter_todos().await {
            Ok(contatos) => contatos.iter().map(ContatoViewModel::from).collect(),
            Err(err) => {
                notificar_falha_repositorio(notifications, err);
                Vec::new()
            }
        }
    }

    async fn obter_cliente_com_contato_por_id(
        &self,
        id: ClienteId,
        notifications: &mut Notifications,
    ) -> Option<ClienteViewModel> {
        let cliente = match self.clientes.obter_por_id(id).await {
            Ok(cliente) => cliente,
            Err(RepositoryError::NotFound(_)) => {
                notifications
                    .notificar(DomainNotification::new("cliente", MSG_CLIENTE_NAO_ENCONTRADO));
                return None;
            }
            Err(err) => {
                notificar_falha_repositorio(notifications, err);
                return None;
            }
        };

        match self.contatos.obter_por_cliente(id).await {
            Ok(contato) => Some(ClienteViewModel::from_entidades(&cliente, contato.as_ref())),
            Err(err) => {
                notificar_falha_repositorio(notifications, err);
                None
            }
        }
    }
}
