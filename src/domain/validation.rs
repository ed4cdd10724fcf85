//! Validation primitives shared by entities and commands.
//!
//! Every helper returns `Ok(())` or a [`ValidationError`] tagged with the
//! field name, so callers can either short-circuit with `?` or collect all
//! failures into a list.

use super::errors::{DomainResult, ValidationError};
use uuid::Uuid;

/// Number of decimal digits in `value`.
///
/// Zero has one digit. Negative values have no meaningful digit count and
/// return `None`.
pub fn contar_digitos(value: i64) -> Option<u32> {
    if value < 0 {
        return None;
    }
    Some(value.checked_ilog10().map_or(1, |log| log + 1))
}

/// Fails unless the decimal digit count of `value` lies in `[min, max]`.
pub fn validar_tamanho(
    campo: &'static str,
    value: i64,
    min: u32,
    max: u32,
    mensagem: &str,
) -> DomainResult<()> {
    match contar_digitos(value) {
        Some(digits) if (min..=max).contains(&digits) => Ok(()),
        _ => Err(ValidationError::new(campo, mensagem)),
    }
}

/// Fails unless the trimmed character length of `value` lies in `[min, max]`.
pub fn validar_tamanho_texto(
    campo: &'static str,
    value: &str,
    min: usize,
    max: usize,
    mensagem: &str,
) -> DomainResult<()> {
    let len = value.trim().chars().count();
    if (min..=max).contains(&len) {
        Ok(())
    } else {
        Err(ValidationError::new(campo, mensagem))
    }
}

/// Fails if `value` is empty or only whitespace.
pub fn validar_se_nao_vazio(campo: &'static str, value: &str, mensagem: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(campo, mensagem));
    }
    Ok(())
}

/// Fails if `value` is absent.
pub fn validar_se_nao_nulo<T>(
    campo: &'static str,
    value: Option<&T>,
    mensagem: &str,
) -> DomainResult<()> {
    match value {
        Some(_) => Ok(()),
        None => Err(ValidationError::new(campo, mensagem)),
    }
}

/// Fails on the nil UUID, which stands for "no identity supplied".
pub fn validar_id(campo: &'static str, value: &Uuid, mensagem: &str) -> DomainResult<()> {
    if value.is_nil() {
        return Err(ValidationError::new(campo, mensagem));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contar_digitos() {
        assert_eq!(contar_digitos(0), Some(1));
        assert_eq!(contar_digitos(9), Some(1));
        assert_eq!(contar_digitos(10), Some(2));
        assert_eq!(contar_digitos(99), Some(2));
        assert_eq!(contar_digitos(100), Some(3));
        assert_eq!(contar_digitos(987_654_321), Some(9));
        assert_eq!(contar_digitos(-11), None);
    }

    #[test]
    fn test_validar_tamanho_bounds() {
        assert!(validar_tamanho("ddd", 11, 2, 2, "msg").is_ok());
        assert!(validar_tamanho("ddd", 99, 2, 2, "msg").is_ok());
        assert!(validar_tamanho("ddd", 1, 2, 2, "msg").is_err());
        assert!(validar_tamanho("ddd", 100, 2, 2, "msg").is_err());
        assert!(validar_tamanho("ddd", -11, 2, 2, "msg").is_err());
    }

    #[test]
    fn test_validar_tamanho_reports_field_and_message() {
        let err = validar_tamanho("telefone", 1234, 9, 9, "nove dígitos").unwrap_err();
        assert_eq!(err.campo(), "telefone");
        assert_eq!(err.mensagem(), "nove dígitos");
    }

    #[test]
    fn test_validar_tamanho_texto() {
        assert!(validar_tamanho_texto("cpf", "12345678909", 11, 11, "msg").is_ok());
        assert!(validar_tamanho_texto("cpf", " 12345678909 ", 11, 11, "msg").is_ok());
        assert!(validar_tamanho_texto("cpf", "1234", 11, 11, "msg").is_err());
    }

    #[test]
    fn test_validar_se_nao_vazio() {
        assert!(validar_se_nao_vazio("email", "a@b.com", "msg").is_ok());
        assert!(validar_se_nao_vazio("email", "", "msg").is_err());
        assert!(validar_se_nao_vazio("email", "   ", "msg").is_err());
    }

    #[test]
    fn test_validar_se_nao_nulo() {
        let present = 1;
        assert!(validar_se_nao_nulo("cliente", Some(&present), "msg").is_ok());
        assert!(validar_se_nao_nulo::<i32>("cliente", None, "msg").is_err());
    }

    #[test]
    fn test_validar_id() {
        assert!(validar_id("id", &Uuid::new_v4(), "msg").is_ok());
        assert!(validar_id("id", &Uuid::nil(), "msg").is_err());
    }
}
