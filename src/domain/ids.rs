//! Identity value objects.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $campo:literal, $mensagem:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(Uuid);

        impl $name {
            /// Wrap an existing UUID, rejecting the nil UUID.
            ///
            /// # Errors
            ///
            /// Returns a `ValidationError` if `id` is nil.
            pub fn new(id: Uuid) -> Result<Self, ValidationError> {
                if id.is_nil() {
                    return Err(ValidationError::new($campo, $mensagem));
                }
                Ok(Self(id))
            }

            /// Generate a fresh random identity.
            pub fn gerar() -> Self {
                Self(Uuid::new_v4())
            }

            /// Use `id` when present and non-nil, otherwise generate one.
            pub fn ou_gerar(id: Option<Uuid>) -> Self {
                id.and_then(|id| Self::new(id).ok())
                    .unwrap_or_else(Self::gerar)
            }

            /// Get the underlying UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Convert into the underlying UUID.
            pub fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                self.0.serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let id = Uuid::deserialize(deserializer)?;
                $name::new(id).map_err(serde::de::Error::custom)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let id = Uuid::parse_str(s)
                    .map_err(|_| ValidationError::new($campo, $mensagem))?;
                $name::new(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identity of a [`Cliente`](super::Cliente).
    ///
    /// # Example
    ///
    /// ```
    /// use cadastro_server::domain::ClienteId;
    /// use uuid::Uuid;
    ///
    /// assert!(ClienteId::new(Uuid::nil()).is_err());
    /// assert!(ClienteId::new(Uuid::new_v4()).is_ok());
    /// ```
    ClienteId,
    "clienteId",
    "O ClienteId não pode ser nulo."
);

entity_id!(
    /// Identity of a [`Contato`](super::Contato).
    ContatoId,
    "id",
    "O Id do contato não pode ser nulo."
);
