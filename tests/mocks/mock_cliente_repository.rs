use async_trait::async_trait;
use cadastro_server::domain::{Cliente, ClienteId, Entity};
use cadastro_server::error::{RepositoryError, RepositoryResult};
use cadastro_server::repositories::ClienteRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock customer repository for testing.
///
/// Stores customers in memory, tracks method calls for verification and can
/// be told to fail every write.
#[derive(Clone, Default)]
pub struct MockClienteRepository {
    clientes: Arc<Mutex<HashMap<ClienteId, Cliente>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    write_failure: Arc<Mutex<Option<RepositoryError>>>,
}

impl MockClienteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail with `err`.
    pub fn fail_writes_with(&self, err: RepositoryError) {
        *self.write_failure.lock().unwrap() = Some(err);
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    pub fn len(&self) -> usize {
        self.clientes.lock().unwrap().len()
    }

    pub fn stored(&self, id: ClienteId) -> Option<Cliente> {
        self.clientes.lock().unwrap().get(&id).cloned()
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn write_failure(&self) -> RepositoryResult<()> {
        match self.write_failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ClienteRepository for MockClienteRepository {
    async fn obter_por_id(&self, id: ClienteId) -> RepositoryResult<Cliente> {
        self.track_call("obter_por_id");
        self.clientes
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("Cliente {}", id)))
    }

    async fn obter_todos(&self) -> RepositoryResult<Vec<Cliente>> {
        self.track_call("obter_todos");
        Ok(self.clientes.lock().unwrap().values().cloned().collect())
    }

    async fn adicionar(&self, cliente: &Cliente) -> RepositoryResult<()> {
        self.track_call("adicionar");
        self.write_failure()?;

        let mut clientes = self.clientes.lock().unwrap();
        if clientes.contains_key(&cliente.id()) {
            return Err(RepositoryError::Duplicate(format!("Cliente {}", cliente.id())));
        }
        clientes.insert(cliente.id(), cliente.clone());
        Ok(())
    }

    async fn atualizar(&self, cliente: &Cliente) -> RepositoryResult<()> {
        self.track_call("atualizar");
        self.write_failure()?;

        let mut clientes = self.clientes.lock().unwrap();
        if !clientes.contains_key(&cliente.id()) {
            return Err(RepositoryError::NotFound(format!("Cliente {}", cliente.id())));
        }
        clientes.insert(cliente.id(), cliente.clone());
        Ok(())
    }

    async fn remover(&self, id: ClienteId) -> RepositoryResult<()> {
        self.track_call("remover");
        self.write_failure()?;

        self.clientes
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(format!("Cliente {}", id)))
    }
}
