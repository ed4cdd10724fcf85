use crate::domain::{Cliente, ClienteId, Contato, ContatoId};
use crate::error::RepositoryResult;
use async_trait::async_trait;

/// Repository for managing customers.
///
/// Provides abstraction over customer storage and retrieval,
/// enabling different implementations (in-memory, database, mock).
#[async_trait]
pub trait ClienteRepository: Send + Sync {
    /// Retrieve a single customer by ID.
    ///
    /// Returns `RepositoryError::NotFound` when the ID is unknown.
    async fn obter_por_id(&self, id: ClienteId) -> RepositoryResult<Cliente>;

    /// Retrieve every customer, oldest registration first.
    async fn obter_todos(&self) -> RepositoryResult<Vec<Cliente>>;

    /// Store a new customer.
    async fn adicionar(&self, cliente: &Cliente) -> RepositoryResult<()>;

    /// Replace an existing customer.
    async fn atualizar(&self, cliente: &Cliente) -> RepositoryResult<()>;

    /// Delete a customer.
    async fn remover(&self, id: ClienteId) -> RepositoryResult<()>;
}

/// Repository for managing contacts.
#[async_trait]
pub trait ContatoRepository: Send + Sync {
    /// Retrieve a single contact by ID.
    async fn obter_por_id(&self, id: ContatoId) -> RepositoryResult<Contato>;

    /// Retrieve the contact owned by a customer, if any.
    async fn obter_por_cliente(&self, cliente_id: ClienteId) -> RepositoryResult<Option<Contato>>;

    /// Retrieve every contact.
    async fn obter_todos(&self) -> RepositoryResult<Vec<Contato>>;

    /// Store a new contact.
    async fn adicionar(&self, contato: &Contato) -> RepositoryResult<()>;

    /// Delete a contact.
    async fn remover(&self, id: ContatoId) -> RepositoryResult<()>;
}
