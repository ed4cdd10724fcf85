//! Cliente (customer) entity.

use super::entity::Entity;
use super::errors::{DomainResult, ValidationError};
use super::ids::{ClienteId, ContatoId};
use super::validation::{validar_id, validar_se_nao_vazio, validar_tamanho_texto};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) const MSG_NOME: &str = "O campo Nome não pode estar vazio.";
pub(crate) const MSG_SOBRENOME: &str = "O campo Sobrenome não pode estar vazio.";
pub(crate) const MSG_CPF: &str = "O campo CPF deve conter 11 dígitos.";

static CPF_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{11}$").expect("valid regex"));

/// Sex/gender code of a customer, serialised as a single letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sexo {
    #[serde(rename = "M")]
    Masculino,
    #[serde(rename = "F")]
    Feminino,
    #[serde(rename = "O")]
    Outro,
}

impl Sexo {
    /// The single-letter code.
    pub fn codigo(&self) -> &'static str {
        match self {
            Self::Masculino => "M",
            Self::Feminino => "F",
            Self::Outro => "O",
        }
    }
}

impl fmt::Display for Sexo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.codigo())
    }
}

/// Strip the usual CPF punctuation (`123.456.789-09` → `12345678909`).
pub fn normalizar_cpf(cpf: &str) -> String {
    cpf.trim()
        .chars()
        .filter(|c| !matches!(c, '.' | '-'))
        .collect()
}

/// Validate a CPF after normalisation: exactly 11 ASCII digits.
pub fn validar_cpf(cpf: &str) -> DomainResult<()> {
    let normalizado = normalizar_cpf(cpf);
    validar_tamanho_texto("cpf", &normalizado, 11, 11, MSG_CPF)?;
    if !CPF_DIGITS.is_match(&normalizado) {
        return Err(ValidationError::new("cpf", MSG_CPF));
    }
    Ok(())
}

/// A registered customer.
///
/// The customer owns at most one contact, referenced by identity. The
/// contact itself keeps the navigable reference back to its customer, so
/// there is no ownership cycle between the two.
#[derive(Debug, Clone, PartialEq)]
pub struct Cliente {
    id: ClienteId,
    nome: String,
    sobrenome: String,
    cpf: String,
    sexo: Sexo,
    data_cadastro: DateTime<Utc>,
    contato_id: Option<ContatoId>,
}

impl Cliente {
    /// Create a customer, validating every invariant.
    ///
    /// The CPF is stored normalised (digits only).
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found.
    pub fn new(
        id: ClienteId,
        nome: impl Into<String>,
        sobrenome: impl Into<String>,
        cpf: impl AsRef<str>,
        sexo: Sexo,
    ) -> DomainResult<Self> {
        let cliente = Self {
            id,
            nome: nome.into().trim().to_string(),
            sobrenome: sobrenome.into().trim().to_string(),
            cpf: normalizar_cpf(cpf.as_ref()),
            sexo,
            data_cadastro: Utc::now(),
            contato_id: None,
        };
        cliente.validar()?;
        Ok(cliente)
    }

    pub fn nome(&self) -> &str {
        &self.nome
    }

    pub fn sobrenome(&self) -> &str {
        &self.sobrenome
    }

    pub fn cpf(&self) -> &str {
        &self.cpf
    }

    pub fn sexo(&self) -> Sexo {
        self.sexo
    }

    pub fn data_cadastro(&self) -> DateTime<Utc> {
        self.data_cadastro
    }

    /// Identity of the owned contact, if any.
    pub fn contato_id(&self) -> Option<ContatoId> {
        self.contato_id
    }

    /// Whether the customer already owns a contact.
    pub fn possui_contato(&self) -> bool {
        self.contato_id.is_some()
    }

    pub fn alterar_nome(&mut self, nome: &str) -> DomainResult<()> {
        validar_se_nao_vazio("nome", nome, MSG_NOME)?;
        self.nome = nome.trim().to_string();
        Ok(())
    }

    pub fn alterar_sobrenome(&mut self, sobrenome: &str) -> DomainResult<()> {
        validar_se_nao_vazio("sobrenome", sobrenome, MSG_SOBRENOME)?;
        self.sobrenome = sobrenome.trim().to_string();
        Ok(())
    }

    /// Attach the customer's contact.
    ///
    /// # Errors
    ///
    /// Fails if a different contact is already attached.
    pub fn definir_contato(&mut self, contato_id: ContatoId) -> DomainResult<()> {
        match self.contato_id {
            Some(atual) if atual != contato_id => Err(ValidationError::new(
                "contato",
                "O cliente já possui um contato cadastrado.",
            )),
            _ => {
                self.contato_id = Some(contato_id);
                Ok(())
            }
        }
    }

    /// Detach the customer's contact. Returns the removed identity.
    pub fn remover_contato(&mut self) -> Option<ContatoId> {
        self.contato_id.take()
    }
}

impl Entity for Cliente {
    type Id = ClienteId;

    fn id(&self) -> ClienteId {
        self.id
    }

    fn validar(&self) -> DomainResult<()> {
        validar_id("id", self.id.as_uuid(), "O Id do cliente não pode ser nulo.")?;
        validar_se_nao_vazio("nome", &self.nome, MSG_NOME)?;
        validar_se_nao_vazio("sobrenome", &self.sobrenome, MSG_SOBRENOME)?;
        validar_cpf(&self.cpf)?;
        Ok(())
    }
}
