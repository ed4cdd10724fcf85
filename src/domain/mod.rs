//! Domain entities and value objects.
//!
//! This module contains the customer and contact entities together with
//! the validation primitives they use. Entities validate themselves at
//! construction time and on every mutator, so an invalid `Cliente` or
//! `Contato` can never be represented in the system.

pub mod cliente;
pub mod contato;
pub mod entity;
pub mod errors;
pub mod ids;
pub mod validation;

pub use cliente::{Cliente, Sexo};
pub use contato::Contato;
pub use entity::Entity;
pub use errors::{DomainResult, ValidationError};
pub use ids::{ClienteId, ContatoId};
