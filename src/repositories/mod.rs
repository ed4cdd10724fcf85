mod memory;
mod traits;

pub use memory::InMemoryCadastroRepository;
pub use traits::{ClienteRepository, ContatoRepository};
