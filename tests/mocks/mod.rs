//! In-memory repository mocks with call tracking and failure injection.

pub mod mock_cliente_repository;
pub mod mock_contato_repository;

pub use mock_cliente_repository::MockClienteRepository;
pub use mock_contato_repository::MockContatoRepository;
