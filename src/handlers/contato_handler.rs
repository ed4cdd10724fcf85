use super::{
    notificar_falha_repositorio, CommandHandler, TravaEscrita, MSG_CLIENTE_NAO_ENCONTRADO,
    MSG_CLIENTE_POSSUI_CONTATO, MSG_CONTATO_DUPLICADO, MSG_CONTATO_NAO_ENCONTRADO,
};
use crate::commands::{AdicionarContato, RemoverContato};
use crate::domain::{Contato, Entity};
use crate::error::RepositoryError;
use crate::notifications::{DomainNotification, Notifications};
use crate::repositories::{ClienteRepository, ContatoRepository};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// Handles the contact commands.
pub struct ContatoCommandHandler {
    clientes: Arc<dyn ClienteRepository>,
    contatos: Arc<dyn ContatoRepository>,
    escrita: TravaEscrita,
}

impl ContatoCommandHandler {
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
impl CommandHandler<AdicionarContato> for ContatoCommandHandler {
    async fn handle(&self, command: AdicionarContato, notifications: &mut Notifications) {
        let _escrita = self.escrita.lock().await;

        let mut cliente = match self.clientes.obter_por_id(command.cliente_id).await {
            Ok(cliente) => cliente,
            Err(RepositoryError::NotFound(_)) => {
                notifications
                    .notificar(DomainNotification::new("clienteId", MSG_CLIENTE_NAO_ENCONTRADO));
                return;
            }
            Err(err) => return notificar_falha_repositorio(notifications, err),
        };

        if cliente.possui_contato() {
            notifications.notificar(DomainNotification::new("contato", MSG_CLIENTE_POSSUI_CONTATO));
            return;
        }

        match self.contatos.obter_por_id(command.id).await {
            Ok(_) => {
                notifications.notificar(DomainNotification::new("contato", MSG_CONTATO_DUPLICADO));
                return;
            }
            Err(RepositoryError::NotFound(_)) => {}
            Err(err) => return notificar_falha_repositorio(notifications, err),
        }

        // Link first so the customer copy held by the contact carries it.
        if let Err(err) = cliente.definir_contato(command.id) {
            return notifications.notificar(err);
        }

        let contato = match Contato::new(
            command.id,
            command.ddd,
            command.telefone,
            command.email,
            Some(Arc::new(cliente.clone())),
        ) {
            Ok(contato) => contato,
            Err(err) => return notifications.notificar(err),
        };

        if let Err(err) = self.contatos.adicionar(&contato).await {
            return notificar_falha_repositorio(notifications, err);
        }

        if let Err(err) = self.clientes.atualizar(&cliente).await {
            // Keep the store consistent: no contact without its customer link.
            if let Err(rollback) = self.contatos.remover(contato.id()).await {
                warn!(contato_id = %contato.id(), error = %rollback, "Rollback of contact failed");
            }
            return notificar_falha_repositorio(notifications, err);
        }

        info!(
            contato_id = %contato.id(),
            cliente_id = %cliente.id(),
            "Contato cadastrado"
        );
    }
}

#[async_trait]
impl CommandHandler<RemoverContato> for ContatoCommandHandler {
    async fn handle(&self, command: RemoverContato, notifications: &mut Notifications) {
        let _escrita = self.escrita.lock().await;

        let contato = match self.contatos.obter_por_id(command.id).await {
            Ok(contato) => contato,
            Err(RepositoryError::NotFound(_)) => {
                notifications
                    .notificar(DomainNotification::new("contato", MSG_CONTATO_NAO_ENCONTRADO));
                return;
            }
            Err(err) => return notificar_falha_repositorio(notifications, err),
        };

        if let Err(err) = self.contatos.remover(contato.id()).await {
            return notificar_falha_repositorio(notifications, err);
        }

        match self.clientes.obter_por_id(contato.cliente_id()).await {
            Ok(mut cliente) => {
                cliente.remover_contato();
                if let Err(err) = self.clientes.atualizar(&cliente).await {
                    return notificar_falha_repositorio(notifications, err);
                }
            }
            Err(RepositoryError::NotFound(_)) => {}
            Err(err) => return notificar_falha_repositorio(notifications, err),
        }

        info!(contato_id = %contato.id(), "Contato removido");
    }
}
