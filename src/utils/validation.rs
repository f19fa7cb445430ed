//! Utilitaires de validation
//!
//! Ce module contient les fonctions de validation partagées par les
//! contrôleurs, en complément des dérives `validator` sur les DTOs.

use validator::ValidationError;

/// Valider qu'une valeur appartient à une liste de valeurs permises
pub fn validate_enum(value: &str, allowed_values: &[&str]) -> Result<(), ValidationError> {
    if !allowed_values.contains(&value) {
        let mut error = ValidationError::new("enum");
        error.add_param("value".into(), &value.to_string());
        error.add_param("allowed_values".into(), &format!("{:?}", allowed_values));
        return Err(error);
    }
    Ok(())
}

/// Valider qu'une valeur est dans un intervalle
pub fn validate_range<T: PartialOrd + std::fmt::Display + serde::Serialize>(
    value: T,
    min: T,
    max: T,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        let mut error = ValidationError::new("range");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Valider qu'une valeur est positive ou nulle
pub fn validate_non_negative<T: PartialOrd + std::fmt::Display + num_traits::Zero + serde::Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Valider qu'une chaîne n'est pas vide
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_validate_enum() {
        let allowed = ["essence", "diesel", "hybride"];
        assert!(validate_enum("diesel", &allowed).is_ok());
        assert!(validate_enum("kerosene", &allowed).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range(2015, 1900, 2027).is_ok());
        assert!(validate_range(1899, 1900, 2027).is_err());
        assert!(validate_range(2030, 1900, 2027).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative(0).is_ok());
        assert!(validate_non_negative(120_000).is_ok());
        assert!(validate_non_negative(-1).is_err());
        assert!(validate_non_negative(Decimal::new(-500, 2)).is_err());
        assert!(validate_non_negative(Decimal::new(1250000, 2)).is_ok());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("Toyota").is_ok());
        assert!(validate_not_empty("   ").is_err());
        assert!(validate_not_empty("").is_err());
    }
}
