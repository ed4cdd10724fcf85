use super::{
    notificar_falha_repositorio, CommandHandler, TravaEscrita, MSG_CLIENTE_DUPLICADO,
    MSG_CLIENTE_NAO_ENCONTRADO,
};
use crate::commands::{AdicionarCliente, RemoverCliente};
use crate::domain::{Cliente, Entity};
use crate::error::RepositoryError;
use crate::notifications::{DomainNotification, Notifications};
use crate::repositories::{ClienteRepository, ContatoRepository};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Handles the customer commands.
pub struct ClienteCommandHandler {
    clientes: Arc<dyn ClienteRepository>,
    contatos: Arc<dyn ContatoRepository>,
    escrita: TravaEscrita,
}

impl ClienteCommandHandler {
    pub fn new(
        clientes: Arc<dyn ClienteRepository>,
        contatos: Arc<dyn ContatoRepository>,
        escrita: TravaEscrita,
    ) -> Self {
        Self {
            clientes,
            contatos,
            escrita,
        }
    }
}

#[async_trait]
impl CommandHandler<AdicionarCliente> for ClienteCommandHandler {
    async fn handle(&self, command: AdicionarCliente, notifications: &mut Notifications) {
        let _escrita = self.escrita.lock().await;

        match self.clientes.obter_por_id(command.id).await {
            Ok(_) => {
                notifications.notificar(DomainNotification::new("cliente", MSG_CLIENTE_DUPLICADO));
                return;
            }
            Err(RepositoryError::NotFound(_)) => {}
            Err(err) => return notificar_falha_repositorio(notifications, err),
        }

        let cliente = match Cliente::new(
            command.id,
            command.nome,
            command.sobrenome,
            &command.cpf,
            command.sexo,
        ) {
            Ok(cliente) => cliente,
            Err(err) => return notifications.notificar(err),
        };

        match self.clientes.adicionar(&cliente).await {
            Ok(()) => info!(cliente_id = %cliente.id(), "Cliente cadastrado"),
            Err(RepositoryError::Duplicate(_)) => {
                notifications.notificar(DomainNotification::new("cliente", MSG_CLIENTE_DUPLICADO))
            }
            Err(err) => notificar_falha_repositorio(notifications, err),
        }
    }
}

#[async_trait]
impl CommandHandler<RemoverCliente> for ClienteCommandHandler {
    async fn handle(&self, command: RemoverCliente, notifications: &mut Notifications) {
        let _escrita = self.escrita.lock().await;

        let cliente = match self.clientes.obter_por_id(command.id).await {
            Ok(cliente) => cliente,
            Err(RepositoryError::NotFound(_)) => {
                notifications
                    .notificar(DomainNotification::new("cliente", MSG_CLIENTE_NAO_ENCONTRADO));
                return;
            }
            Err(err) => return notificar_falha_repositorio(notifications, err),
        };

        // The contact cannot outlive its customer.
        if let Some(contato_id) = cliente.contato_id() {
            match self.contatos.remover(contato_id).await {
                Ok(()) | Err(RepositoryError::NotFound(_)) => {}
                Err(err) => return notificar_falha_repositorio(notifications, err),
            }
        }

        match self.clientes.remover(cliente.id()).await {
            Ok(()) => info!(cliente_id = %cliente.id(), "Cliente removido"),
            Err(err) => notificar_falha_repositorio(notifications, err),
        }
    }
}
