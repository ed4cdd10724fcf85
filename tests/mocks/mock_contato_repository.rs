use async_trait::async_trait;
use cadastro_server::domain::{ClienteId, Contato, ContatoId, Entity};
use cadastro_server::error::{RepositoryError, RepositoryResult};
use cadastro_server::repositories::ContatoRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
#[derive(Clone, Default)]
pub struct MockContatoRepository {
    contatos: Arc<Mutex<HashMap<ContatoId, Contato>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

impl MockContatoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stored(&self, id: ContatoId) -> Option<Contato> {
        self.contatos.lock().unwrap().get(&id).cloned()
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    pub fn len(&self) -> usize {
        self.contatos.lock().unwrap().len()
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

#[async_trait]
impl ContatoRepository for MockContatoRepository {
    async fn obter_por_id(&self, id: ContatoId) -> RepositoryResult<Contato> {
        self.track_call("obter_por_id");
        self.contatos
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("Contato {}", id)))
    }

    async fn obter_por_cliente(&self, cliente_id: ClienteId) -> RepositoryResult<Option<Contato>> {
        self.track_call("obter_por_cliente");
        Ok(self
            .contatos
            .lock()
            .unwrap()
            .values()
            .find(|c| c.cliente_id() == cliente_id)
            .cloned())
    }

    async fn obter_todos(&self) -> RepositoryResult<Vec<Contato>> {
        self.track_call("obter_todos");
        Ok(self.contatos.lock().unwrap().values().cloned().collect())
    }

    async fn adicionar(&self, contato: &Contato) -> RepositoryResult<()> {
        self.track_call("adicionar");

        let mut contatos = self.contatos.lock().unwrap();
        if contatos.contains_key(&contato.id()) {
            return Err(RepositoryError::Duplicate(format!("Contato {}", contato.id())));
        }
        contatos.insert(contato.id(), contato.clone());
        Ok(())
    }

    async fn remover(&self, id: ContatoId) -> RepositoryResult<()> {
        self.track_call("remover");
        self.contatos
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(format!("Contato {}", id)))
    }
}
