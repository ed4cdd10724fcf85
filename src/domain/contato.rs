//! Contato (contact) entity.

use super::cliente::Cliente;
use super::entity::Entity;
use super::errors::{DomainResult, ValidationError};
use super::ids::{ClienteId, ContatoId};
use super::validation::{validar_id, validar_se_nao_nulo, validar_se_nao_vazio, validar_tamanho};
use std::sync::Arc;

pub(crate) const MSG_DDD: &str = "O campo DDD deve conter 2 dígitos.";
pub(crate) const MSG_TELEFONE: &str = "O campo Número deve conter 9 dígitos.";
pub(crate) const MSG_EMAIL: &str = "O campo Email não pode estar vazio.";
pub(crate) const MSG_CLIENTE: &str = "O Cliente não pode ser nulo.";
pub(crate) const MSG_CLIENTE_ID: &str = "O ClienteId não pode ser nulo.";

/// Digit count required for the area code.
pub const DDD_DIGITOS: u32 = 2;

/// Digit count required for the phone number.
pub const TELEFONE_DIGITOS: u32 = 9;

pub(crate) fn validar_ddd(ddd: i32) -> DomainResult<()> {
    validar_tamanho("ddd", i64::from(ddd), DDD_DIGITOS, DDD_DIGITOS, MSG_DDD)
}

pub(crate) fn validar_telefone(telefone: i32) -> DomainResult<()> {
    validar_tamanho(
        "telefone",
        i64::from(telefone),
        TELEFONE_DIGITOS,
        TELEFONE_DIGITOS,
        MSG_TELEFONE,
    )
}

pub(crate) fn validar_email(email: &str) -> DomainResult<()> {
    validar_se_nao_vazio("email", email, MSG_EMAIL)
}

fn validar_cliente(cliente: Option<&Arc<Cliente>>) -> DomainResult<()> {
    validar_se_nao_nulo("cliente", cliente, MSG_CLIENTE)?;
    if let Some(cliente) = cliente {
        validar_id("clienteId", cliente.id().as_uuid(), MSG_CLIENTE_ID)?;
    }
    Ok(())
}

/// A contact owned by exactly one customer.
///
/// Holds both the owner's identity and a shared snapshot of the owner. The
/// two are only ever replaced together.
#[derive(Debug, Clone, PartialEq)]
pub struct Contato {
    id: ContatoId,
    cliente_id: ClienteId,
    ddd: i32,
    telefone: i32,
    email: String,
    cliente: Arc<Cliente>,
}

impl Contato {
    /// Create a contact for `cliente`, validating every invariant.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found, in the order
    /// DDD, phone, email, customer.
    pub fn new(
        id: ContatoId,
        ddd: i32,
        telefone: i32,
        email: impl Into<String>,
        cliente: Option<Arc<Cliente>>,
    ) -> DomainResult<Self> {
        let email = email.into();
        validar_ddd(ddd)?;
        validar_telefone(telefone)?;
        validar_email(&email)?;
        let cliente = cliente.ok_or_else(|| ValidationError::new("cliente", MSG_CLIENTE))?;

        let contato = Self {
            id,
            cliente_id: cliente.id(),
            ddd,
            telefone,
            email: email.trim().to_string(),
            cliente,
        };
        contato.validar()?;
        Ok(contato)
    }

    pub fn cliente_id(&self) -> ClienteId {
        self.cliente_id
    }

    pub fn ddd(&self) -> i32 {
        self.ddd
    }

    pub fn telefone(&self) -> i32 {
        self.telefone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// The owning customer as it was when attached.
    pub fn cliente(&self) -> &Cliente {
        &self.cliente
    }

    pub fn alterar_ddd(&mut self, ddd: i32) -> DomainResult<()> {
        validar_ddd(ddd)?;
        self.ddd = ddd;
        Ok(())
    }

    pub fn alterar_numero(&mut self, telefone: i32) -> DomainResult<()> {
        validar_telefone(telefone)?;
        self.telefone = telefone;
        Ok(())
    }

    pub fn alterar_email(&mut self, email: &str) -> DomainResult<()> {
        validar_email(email)?;
        self.email = email.trim().to_string();
        Ok(())
    }

    /// Re-parent the contact. Both `cliente` and `cliente_id` change, or neither.
    pub fn alterar_cliente(&mut self, cliente: Option<Arc<Cliente>>) -> DomainResult<()> {
        validar_cliente(cliente.as_ref())?;
        if let Some(cliente) = cliente {
            self.cliente_id = cliente.id();
            self.cliente = cliente;
        }
        Ok(())
    }
}

impl Entity for Contato {
    type Id = ContatoId;

    fn id(&self) -> ContatoId {
        self.id
    }

    fn validar(&self) -> DomainResult<()> {
        validar_ddd(self.ddd)?;
        validar_telefone(self.telefone)?;
        validar_email(&self.email)?;
        validar_cliente(Some(&self.cliente))?;
        validar_id("clienteId", self.cliente_id.as_uuid(), MSG_CLIENTE_ID)?;
        Ok(())
    }
}
