//! Command objects: immutable descriptions of a single write intent.
//!
//! The set of commands is closed and enumerated by [`Comando`]. Each command
//! can check its own request-shape rules with [`Command::validar`] before any
//! handler runs.

use crate::domain::cliente::{validar_cpf, MSG_NOME, MSG_SOBRENOME};
use crate::domain::contato::{validar_ddd, validar_email, validar_telefone};
use crate::domain::validation::validar_se_nao_vazio;
use crate::domain::{ClienteId, ContatoId, Sexo, ValidationError};

/// Behaviour shared by every command.
pub trait Command: Send + Sync + 'static {
    /// Name used in logs and metrics.
    const NOME: &'static str;

    /// Request-shape checks. An empty list means the command is well formed.
    fn validar(&self) -> Vec<ValidationError>;
}

/// Register a new customer.
#[derive(Debug, Clone, PartialEq)]
pub struct AdicionarCliente {
    pub id: ClienteId,
    pub nome: String,
    pub sobrenome: String,
    pub cpf: String,
    pub sexo: Sexo,
}

impl AdicionarCliente {
    pub fn new(
        id: ClienteId,
        nome: impl Into<String>,
        sobrenome: impl Into<String>,
        cpf: impl Into<String>,
        sexo: Sexo,
    ) -> Self {
        Self {
            id,
            nome: nome.into(),
            sobrenome: sobrenome.into(),
            cpf: cpf.into(),
            sexo,
        }
    }
}

impl Command for AdicionarCliente {
    const NOME: &'static str = "AdicionarCliente";

    fn validar(&self) -> Vec<ValidationError> {
        [
            validar_se_nao_vazio("nome", &self.nome, MSG_NOME),
            validar_se_nao_vazio("sobrenome", &self.sobrenome, MSG_SOBRENOME),
            validar_cpf(&self.cpf),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect()
    }
}

/// Attach a new contact to an existing customer.
#[derive(Debug, Clone, PartialEq)]
pub struct AdicionarContato {
    pub id: ContatoId,
    pub cliente_id: ClienteId,
    pub ddd: i32,
    pub telefone: i32,
    pub email: String,
}

impl AdicionarContato {
    pub fn new(
        id: ContatoId,
        cliente_id: ClienteId,
        ddd: i32,
        telefone: i32,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            cliente_id,
            ddd,
            telefone,
            email: email.into(),
        }
    }
}

impl Command for AdicionarContato {
    const NOME: &'static str = "AdicionarContato";

    fn validar(&self) -> Vec<ValidationError> {
        [
            validar_ddd(self.ddd),
            validar_telefone(self.telefone),
            validar_email(&self.email),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect()
    }
}

/// Remove a customer and, with it, its contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoverCliente {
    pub id: ClienteId,
}

impl RemoverCliente {
    pub fn new(id: ClienteId) -> Self {
        Self { id }
    }
}

impl Command for RemoverCliente {
    const NOME: &'static str = "RemoverCliente";

    fn validar(&self) -> Vec<ValidationError> {
        Vec::new()
    }
}

/// Remove a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoverContato {
    pub id: ContatoId,
}

impl RemoverContato {
    pub fn new(id: ContatoId) -> Self {
        Self { id }
    }
}

impl Command for RemoverContato {
    const NOME: &'static str = "RemoverContato";

    fn validar(&self) -> Vec<ValidationError> {
        Vec::new()
    }
}

/// The closed set of commands the mediator accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Comando {
    AdicionarCliente(AdicionarCliente),
    AdicionarContato(AdicionarContato),
    RemoverCliente(RemoverCliente),
    RemoverContato(RemoverContato),
}

impl Comando {
    pub fn nome(&self) -> &'static str {
        match self {
            Self::AdicionarCliente(_) => AdicionarCliente::NOME,
            Self::AdicionarContato(_) => AdicionarContato::NOME,
            Self::RemoverCliente(_) => RemoverCliente::NOME,
            Self::RemoverContato(_) => RemoverContato::NOME,
        }
    }
}

impl From<AdicionarCliente> for Comando {
    fn from(cmd: AdicionarCliente) -> Self {
        Self::AdicionarCliente(cmd)
    }
}

impl From<AdicionarContato> for Comando {
    fn from(cmd: AdicionarContato) -> Self {
        Self::AdicionarContato(cmd)
    }
}

impl From<RemoverCliente> for Comando {
    fn from(cmd: RemoverCliente) -> Self {
        Self::RemoverCliente(cmd)
    }
}

impl From<RemoverContato> for Comando {
    fn from(cmd: RemoverContato) -> Self {
        Self::RemoverContato(cmd)
    }
}
