//! In-process store for customers and contacts.

use crate::domain::{Cliente, ClienteId, Contato, ContatoId, Entity};
use crate::error::{RepositoryError, RepositoryResult};
use crate::repositories::traits::{ClienteRepository, ContatoRepository};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Customer and contact repository kept in memory.
///
/// One instance implements both repository traits so handlers see a single
/// consistent store. Share it behind an `Arc` and coerce to
/// `Arc<dyn ClienteRepository>` / `Arc<dyn ContatoRepository>`.
#[derive(Debug, Default)]
pub struct InMemoryCadastroRepository {
    clientes: RwLock<HashMap<ClienteId, Cliente>>,
    contatos: RwLock<HashMap<ContatoId, Contato>>,
}

impl InMemoryCadastroRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClienteRepository for InMemoryCadastroRepository {
    async fn obter_por_id(&self, id: ClienteId) -> RepositoryResult<Cliente> {
        let clientes = self.clientes.read().await;
        clientes
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("Cliente {}", id)))
    }

    async fn obter_todos(&self) -> RepositoryResult<Vec<Cliente>> {
        let clientes = self.clientes.read().await;
        let mut result: Vec<Cliente> = clientes.values().cloned().collect();
        result.sort_by_key(|c| (c.data_cadastro(), c.id()));
        Ok(result)
    }

    async fn adicionar(&self, cliente: &Cliente) -> RepositoryResult<()> {
        let mut clientes = self.clientes.write().await;

        if clientes.contains_key(&cliente.id()) {
            return Err(RepositoryError::Duplicate(format!("Cliente {}", cliente.id())));
        }

        clientes.insert(cliente.id(), cliente.clone());
        Ok(())
    }

    async fn atualizar(&self, cliente: &Cliente) -> RepositoryResult<()> {
        let mut clientes = self.clientes.write().await;

        match clientes.get_mut(&cliente.id()) {
            Some(stored) => {
                *stored = cliente.clone();
                Ok(())
            }
            None => Err(RepositoryError::NotFound(format!("Cliente {}", cliente.id()))),
        }
    }

    async fn remover(&self, id: ClienteId) -> RepositoryResult<()> {
        let mut clientes = self.clientes.write().await;
        clientes
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(format!("Cliente {}", id)))
    }
}

#[async_trait]
impl ContatoRepository for InMemoryCadastroRepository {
    async fn obter_por_id(&self, id: ContatoId) -> RepositoryResult<Contato> {
        let contatos = self.contatos.read().await;
        contatos
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("Contato {}", id)))
    }

    async fn obter_por_cliente(&self, cliente_id: ClienteId) -> RepositoryResult<Option<Contato>> {
        let contatos = self.contatos.read().await;
        Ok(contatos
            .values()
            .find(|c| c.cliente_id() == cliente_id)
            .cloned())
    }

    async fn obter_todos(&self) -> RepositoryResult<Vec<Contato>> {
        let contatos = self.contatos.read().await;
        let mut result: Vec<Contato> = contatos.values().cloned().collect();
        result.sort_by_key(|c| (c.cliente().data_cadastro(), c.id()));
        Ok(result)
    }

    async fn adicionar(&self, contato: &Contato) -> RepositoryResult<()> {
        let mut contatos = self.contatos.write().await;

        if contatos.contains_key(&contato.id()) {
            return Err(RepositoryError::Duplicate(format!("Contato {}", contato.id())));
        }

        contatos.insert(contato.id(), contato.clone());
        Ok(())
    }

    async fn remover(&self, id: ContatoId) -> RepositoryResult<()> {
        let mut contatos = self.contatos.write().await;
        contatos
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(format!("Contato {}", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Sexo;
    use std::sync::Arc;

    fn cliente(nome: &str) -> Cliente {
        Cliente::new(ClienteId::gerar(), nome, "Lima", "12345678909", Sexo::Masculino).unwrap()
    }

    #[test]
    fn test_cliente_roundtrip() {
        tokio_test::block_on(async {
            let repo = InMemoryCadastroRepository::new();
            let joao = cliente("João");

            ClienteRepository::adicionar(&repo, &joao).await.unwrap();
            let stored = ClienteRepository::obter_por_id(&repo, joao.id()).await.unwrap();
            assert_eq!(stored, joao);
        });
    }

    #[tokio::test]
    async fn test_cliente_duplicate_rejected() {
        let repo = InMemoryCadastroRepository::new();
        let joao = cliente("João");

        ClienteRepository::adicionar(&repo, &joao).await.unwrap();
        let err = ClienteRepository::adicionar(&repo, &joao).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_cliente_missing() {
        let repo = InMemoryCadastroRepository::new();
        let id = ClienteId::gerar();

        assert!(matches!(
            ClienteRepository::obter_por_id(&repo, id).await,
            Err(RepositoryError::NotFound(_))
        ));
        assert!(ClienteRepository::remover(&repo, id).await.is_err());
        assert!(repo.atualizar(&cliente("Ninguém")).await.is_err());
    }

    #[tokio::test]
    async fn test_contato_lookup_by_cliente() {
        let repo = InMemoryCadastroRepository::new();
        let dono = Arc::new(cliente("Maria"));
        let contato = Contato::new(
            ContatoId::gerar(),
            11,
            987_654_321,
            "m@x.com",
            Some(dono.clone()),
        )
        .unwrap();

        ContatoRepository::adicionar(&repo, &contato).await.unwrap();

        let found = repo.obter_por_cliente(dono.id()).await.unwrap();
        assert_eq!(found.map(|c| c.id()), Some(contato.id()));
        assert!(repo.obter_por_cliente(ClienteId::gerar()).await.unwrap().is_none());

        ContatoRepository::remover(&repo, contato.id()).await.unwrap();
        assert!(ContatoRepository::obter_todos(&repo).await.unwrap().is_empty());
    }
}
