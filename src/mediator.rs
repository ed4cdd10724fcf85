//! Command mediator.
//!
//! The mediator is a typed registry: it holds exactly one handler per
//! command type, fixed when it is built at startup. Dispatch is an
//! exhaustive match over [`Comando`], so adding a command variant without
//! wiring its handler does not compile, and [`MediatorBuilder::build`]
//! refuses to produce a mediator with an empty slot.

use crate::commands::{
    AdicionarCliente, AdicionarContato, Comando, Command, RemoverCliente, RemoverContato,
};
use crate::error::{ConfigError, ConfigResult};
use crate::handlers::{
    ClienteCommandHandler, CommandHandler, ContatoCommandHandler, TravaEscrita,
};
use crate::notifications::Notifications;
use crate::observability::{MetricsTracker, Timer};
use crate::repositories::{ClienteRepository, ContatoRepository};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::warn;

/// Routes each command to its single handler.
#[derive(Clone)]
pub struct Mediator {
    adicionar_cliente: Arc<dyn CommandHandler<AdicionarCliente>>,
    adicionar_contato: Arc<dyn CommandHandler<AdicionarContato>>,
    remover_cliente: Arc<dyn CommandHandler<RemoverCliente>>,
    remover_contato: Arc<dyn CommandHandler<RemoverContato>>,
    metrics: MetricsTracker,
}

impl Mediator {
    pub fn builder() -> MediatorBuilder {
        MediatorBuilder::default()
    }

    /// Wire the standard customer and contact handlers over the given store.
    pub fn com_repositorios(
        clientes: Arc<dyn ClienteRepository>,
        contatos: Arc<dyn ContatoRepository>,
        metrics: MetricsTracker,
    ) -> ConfigResult<Self> {
        let escrita: TravaEscrita = Arc::new(Mutex::new(()));
        let cliente_handler = Arc::new(ClienteCommandHandler::new(
            clientes.clone(),
            contatos.clone(),
            escrita.clone(),
        ));
        let contato_handler = Arc::new(ContatoCommandHandler::new(clientes, contatos, escrita));

        Self::builder()
            .adicionar_cliente(cliente_handler.clone())
            .remover_cliente(cliente_handler)
            .adicionar_contato(contato_handler.clone())
            .remover_contato(contato_handler)
            .metrics(metrics)
            .build()
    }

    pub fn metrics(&self) -> &MetricsTracker {
        &self.metrics
    }

    /// Send a command to its handler.
    ///
    /// Failures are recorded in `notifications`; check
    /// [`Notifications::operacao_valida`] afterwards.
    pub async fn enviar_comando(
        &self,
        comando: impl Into<Comando>,
        notifications: &mut Notifications,
    ) {
        match comando.into() {
            Comando::AdicionarCliente(cmd) => {
                Self::despachar(&*self.adicionar_cliente, cmd, notifications, &self.metrics).await
            }
            Comando::AdicionarContato(cmd) => {
                Self::despachar(&*self.adicionar_contato, cmd, notifications, &self.metrics).await
            }
            Comando::RemoverCliente(cmd) => {
                Self::despachar(&*self.remover_cliente, cmd, notifications, &self.metrics).await
            }
            Comando::RemoverContato(cmd) => {
                Self::despachar(&*self.remover_contato, cmd, notifications, &self.metrics).await
            }
        }
    }

    async fn despachar<C: Command>(
        handler: &dyn CommandHandler<C>,
        command: C,
        notifications: &mut Notifications,
        metrics: &MetricsTracker,
    ) {
        let timer = Timer::start();

        let erros = command.validar();
        if !erros.is_empty() {
            warn!(command = C::NOME, errors = erros.len(), "Command rejected before handling");
            notifications.notificar_todos(erros);
            metrics.track_command(C::NOME, timer.elapsed_ms(), false);
            return;
        }

        let antes = notifications.len();
        handler.handle(command, notifications).await;
        let valid = notifications.len() == antes;

        if !valid {
            warn!(
                command = C::NOME,
                errors = notifications.len() - antes,
                "Command raised notifications"
            );
        }
        metrics.track_command(C::NOME, timer.elapsed_ms(), valid);
    }
}

/// Collects one handler per command and checks that none is missing.
#[derive(Default)]
pub struct MediatorBuilder {
    adicionar_cliente: Option<Arc<dyn CommandHandler<AdicionarCliente>>>,
    adicionar_contato: Option<Arc<dyn CommandHandler<AdicionarContato>>>,
    remover_cliente: Option<Arc<dyn CommandHandler<RemoverCliente>>>,
    remover_contato: Option<Arc<dyn CommandHandler<RemoverContato>>>,
    metrics: Option<MetricsTracker>,
}

impl MediatorBuilder {
    pub fn adicionar_cliente(mut self, handler: Arc<dyn CommandHandler<AdicionarCliente>>) -> Self {
        self.adicionar_cliente = Some(handler);
        self
    }

    pub fn adicionar_contato(mut self, handler: Arc<dyn CommandHandler<AdicionarContato>>) -> Self {
        self.adicionar_contato = Some(handler);
        self
    }

    pub fn remover_cliente(mut self, handler: Arc<dyn CommandHandler<RemoverCliente>>) -> Self {
        self.remover_cliente = Some(handler);
        self
    }

    pub fn remover_contato(mut self, handler: Arc<dyn CommandHandler<RemoverContato>>) -> Self {
        self.remover_contato = Some(handler);
        self
    }

    pub fn metrics(mut self, metrics: MetricsTracker) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Build the mediator.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingHandler` naming the first command
    /// without a handler.
    pub fn build(self) -> ConfigResult<Mediator> {
        Ok(Mediator {
            adicionar_cliente: self
                .adicionar_cliente
                .ok_or(ConfigError::MissingHandler(AdicionarCliente::NOME))?,
            adicionar_contato: self
                .adicionar_contato
                .ok_or(ConfigError::MissingHandler(AdicionarContato::NOME))?,
            remover_cliente: self
                .remover_cliente
                .ok_or(ConfigError::MissingHandler(RemoverCliente::NOME))?,
            remover_contato: self
                .remover_contato
                .ok_or(ConfigError::MissingHandler(RemoverContato::NOME))?,
            metrics: self.metrics.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClienteId, ContatoId, Sexo};
    use crate::notifications::DomainNotification;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Contador {
        chamadas: AtomicUsize,
    }

    #[async_trait]
    impl<C: Command> CommandHandler<C> for Contador {
        async fn handle(&self, _command: C, _notifications: &mut Notifications) {
            self.chamadas.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct Recusa;

    #[async_trait]
    impl CommandHandler<RemoverContato> for Recusa {
        async fn handle(&self, _command: RemoverContato, notifications: &mut Notifications) {
            notifications.notificar(DomainNotification::new("contato", "recusado"));
        }
    }

    fn mediator_com(contador: Arc<Contador>) -> Mediator {
        Mediator::builder()
            .adicionar_cliente(contador.clone())
            .adicionar_contato(contador.clone())
            .remover_cliente(contador.clone())
            .remover_contato(contador)
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_reports_missing_handler() {
        let contador = Arc::new(Contador::default());
        let result = Mediator::builder()
            .adicionar_cliente(contador.clone())
            .adicionar_contato(contador.clone())
            .remover_cliente(contador)
            .build();

        match result {
            Err(ConfigError::MissingHandler(nome)) => assert_eq!(nome, "RemoverContato"),
            Err(other) => panic!("Expected MissingHandler, got: {:?}", other),
            Ok(_) => panic!("Expected MissingHandler, got a mediator"),
        }
    }

    #[tokio::test]
    async fn test_dispatch_runs_exactly_one_handler() {
        let contador = Arc::new(Contador::default());
        let mediator = mediator_com(contador.clone());
        let mut notifications = Notifications::new();

        mediator
            .enviar_comando(RemoverCliente::new(ClienteId::gerar()), &mut notifications)
            .await;

        assert_eq!(contador.chamadas.load(Ordering::SeqCst), 1);
        assert!(notifications.operacao_valida());
        assert_eq!(mediator.metrics().commands_total(), 1);
    }

    #[tokio::test]
    async fn test_invalid_command_skips_handler() {
        let contador = Arc::new(Contador::default());
        let mediator = mediator_com(contador.clone());
        let mut notifications = Notifications::new();

        let cliente_id = ClienteId::gerar();
        let cmd = AdicionarContato::new(ContatoId::gerar(), cliente_id, 1, 987_654_321, "a@b.com");
        mediator.enviar_comando(cmd, &mut notifications).await;

        assert_eq!(contador.chamadas.load(Ordering::SeqCst), 0);
        assert!(!notifications.operacao_valida());
        assert_eq!(notifications.notificacoes()[0].chave, "ddd");
        assert_eq!(mediator.metrics().commands_rejected_total(), 1);
    }

    #[tokio::test]
    async fn test_handler_notifications_mark_operation_invalid() {
        let contador = Arc::new(Contador::default());
        let mediator = Mediator::builder()
            .adicionar_cliente(contador.clone())
            .adicionar_contato(contador.clone())
            .remover_cliente(contador)
            .remover_contato(Arc::new(Recusa))
            .build()
            .unwrap();
        let mut notifications = Notifications::new();

        mediator
            .enviar_comando(RemoverContato::new(ContatoId::gerar()), &mut notifications)
            .await;

        assert_eq!(notifications.mensagens_erro(), vec!["recusado"]);
        assert_eq!(mediator.metrics().commands_rejected_total(), 1);
    }

    #[tokio::test]
    async fn test_notifications_are_scoped_per_call() {
        let contador = Arc::new(Contador::default());
        let mediator = mediator_com(contador);

        let mut primeira = Notifications::new();
        let invalido =
            AdicionarCliente::new(ClienteId::gerar(), "", "Silva", "12345678909", Sexo::Feminino);
        mediator.enviar_comando(invalido, &mut primeira).await;

        let mut segunda = Notifications::new();
        let id = ClienteId::gerar();
        let valido = AdicionarCliente::new(id, "Ana", "Silva", "12345678909", Sexo::Feminino);
        mediator.enviar_comando(valido, &mut segunda).await;

        assert!(!primeira.operacao_valida());
        assert!(segunda.operacao_valida());
    }
}
