//! Cadastro Server - customer and contact registration over HTTP.
//!
//! Writes go through commands dispatched by a typed mediator; reads go
//! through a separate query surface. Domain failures are collected as
//! per-request notifications rather than propagated as errors.
//!
//! # Architecture
//!
//! - **domain**: `Cliente` and `Contato` entities with self-validation
//! - **commands**: the closed set of write intents
//! - **handlers**: one handler per command, persisting through repositories
//! - **mediator**: typed command registry and dispatch
//! - **notifications**: request-scoped domain notifications
//! - **queries**: read-only listings and lookups
//! - **repositories**: storage traits and the in-memory store
//! - **models**: JSON view models
//! - **server**: axum routes and server loop
//! - **config**, **error**, **observability**: ambient concerns

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod mediator;
pub mod models;
pub mod notifications;
pub mod observability;
pub mod queries;
pub mod repositories;
pub mod server;

pub use commands::{AdicionarCliente, AdicionarContato, Comando, RemoverCliente, RemoverContato};
pub use config::Config;
pub use domain::{Cliente, ClienteId, Contato, ContatoId, Sexo, ValidationError};
pub use error::{ConfigError, RepositoryError};
pub use mediator::{Mediator, MediatorBuilder};
pub use models::{ClienteViewModel, ContatoViewModel};
pub use notifications::{DomainNotification, Notifications};
pub use observability::MetricsTracker;
pub use queries::{CadastroQueries, CadastroQueriesImpl};
pub use server::{build_router, AppState};
