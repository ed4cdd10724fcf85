//! View models exchanged over HTTP.
//!
//! These are the JSON shapes of customers and contacts as clients see them.
//! They carry no invariants of their own; requests are turned into commands
//! and validated there.

pub mod cliente;
pub mod contato;

pub use cliente::ClienteViewModel;
pub use contato::ContatoViewModel;
