//! Customer view model.

use super::contato::ContatoViewModel;
use crate::commands::AdicionarCliente;
use crate::domain::{Cliente, ClienteId, Contato, Entity, Sexo};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A customer as sent and received over HTTP, with its optional contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClienteViewModel {
    /// Generated server-side when absent or nil
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    pub nome: String,

    pub sobrenome: String,

    /// National ID (CPF), with or without punctuation
    pub cpf: String,

    pub sexo: Sexo,

    /// Set by the server; ignored on input
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub data_cadastro: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contato: Option<ContatoViewModel>,
}

impl ClienteViewModel {
    /// Resolve the identity, generating one when the request had none.
    pub fn resolver_id(&mut self) -> ClienteId {
        let id = ClienteId::ou_gerar(self.id);
        self.id = Some(id.into_inner());
        id
    }

    /// Build the command that registers this customer under `id`.
    pub fn comando(&self, id: ClienteId) -> AdicionarCliente {
        AdicionarCliente::new(id, &self.nome, &self.sobrenome, &self.cpf, self.sexo)
    }

    /// Map a stored customer and its contact.
    pub fn from_entidades(cliente: &Cliente, contato: Option<&Contato>) -> Self {
        Self {
            id: Some(cliente.id().into_inner()),
            nome: cliente.nome().to_string(),
            sobrenome: cliente.sobrenome().to_string(),
            cpf: cliente.cpf().to_string(),
            sexo: cliente.sexo(),
            data_cadastro: Some(cliente.data_cadastro()),
            contato: contato.map(ContatoViewModel::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_nested_contato() {
        let json = r#"{
            "nome": "Ana",
            "sobrenome": "Silva",
            "cpf": "123.456.789-09",
            "sexo": "F",
            "contato": {"ddd": 11, "telefone": 987654321, "email": "a@b.com"}
        }"#;
        let vm: ClienteViewModel = serde_json::from_str(json).unwrap();

        assert_eq!(vm.id, None);
        assert_eq!(vm.sexo, Sexo::Feminino);
        assert_eq!(vm.contato.as_ref().map(|c| c.ddd), Some(11));
    }

    #[test]
    fn test_unknown_sexo_is_rejected() {
        let json = r#"{"nome":"Ana","sobrenome":"Silva","cpf":"12345678909","sexo":"X"}"#;
        let result: Result<ClienteViewModel, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_resolver_id_fills_missing_id() {
        let mut vm = ClienteViewModel {
            id: None,
            nome: "Ana".to_string(),
            sobrenome: "Silva".to_string(),
            cpf: "12345678909".to_string(),
            sexo: Sexo::Feminino,
            data_cadastro: None,
            contato: None,
        };
        let id = vm.resolver_id();
        assert_eq!(vm.id, Some(id.into_inner()));
        assert_eq!(vm.comando(id).id, id);
    }

    #[test]
    fn test_from_entidades_serializes_camel_case() {
        let cliente = Cliente::new(
            ClienteId::gerar(),
            "Ana",
            "Silva",
            "12345678909",
            Sexo::Feminino,
        )
        .unwrap();
        let json = serde_json::to_value(ClienteViewModel::from_entidades(&cliente, None)).unwrap();

        assert_eq!(json["nome"], "Ana");
        assert_eq!(json["sexo"], "F");
        assert!(json.get("dataCadastro").is_some());
        assert!(json.get("contato").is_none());
    }
}
