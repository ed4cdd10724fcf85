//! Shared application state handed to every route.

use crate::error::ConfigResult;
use crate::mediator::Mediator;
use crate::observability::MetricsTracker;
use crate::queries::{CadastroQueries, CadastroQueriesImpl};
use crate::repositories::{ClienteRepository, ContatoRepository, InMemoryCadastroRepository};
use std::sync::Arc;

/// Mediator for writes, queries for reads.
#[derive(Clone)]
pub struct AppState {
    pub mediator: Mediator,
    pub queries: Arc<dyn CadastroQueries>,
    pub metrics: MetricsTracker,
}

impl AppState {
    pub fn new(mediator: Mediator, queries: Arc<dyn CadastroQueries>) -> Self {
        let metrics = mediator.metrics().clone();
        Self {
            mediator,
            queries,
            metrics,
        }
    }

    /// Wire handlers and queries over the given repositories.
    pub fn com_repositorios(
        clientes: Arc<dyn ClienteRepository>,
        contatos: Arc<dyn ContatoRepository>,
    ) -> ConfigResult<Self> {
        let mediator =
            Mediator::com_repositorios(clientes.clone(), contatos.clone(), MetricsTracker::new())?;
        let queries =
            Arc::new(CadastroQueriesImpl::new(clientes, contatos)) as Arc<dyn CadastroQueries>;
        Ok(Self::new(mediator, queries))
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> ConfigResult<Self> {
        let repo = Arc::new(InMemoryCadastroRepository::new());
        Self::com_repositorios(
            repo.clone() as Arc<dyn ClienteRepository>,
            repo as Arc<dyn ContatoRepository>,
        )
    }
}
