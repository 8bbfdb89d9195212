//! Validaciones de formularios, ejecutadas antes de cualquier llamada de red.

use chrono::{NaiveDate, Utc};

pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !local.contains(char::is_whitespace)
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !domain.contains(char::is_whitespace)
        }
        _ => false,
    }
}

pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.chars().all(|c| c.is_ascii_digit())
}

pub fn is_valid_password(password: &str) -> bool {
    password.len() >= 6
}

pub fn is_valid_username(username: &str) -> bool {
    username.trim().len() >= 3
}

/// El usuario debe ser mayor de edad (18 años) para registrarse.
/// `date_of_birth` viene del input date en formato YYYY-MM-DD.
pub fn is_adult(date_of_birth: &str) -> bool {
    let Ok(born) = NaiveDate::parse_from_str(date_of_birth, "%Y-%m-%d") else {
        return false;
    };
    let today = Utc::now().date_naive();
    match today.years_since(born) {
        Some(age) => age >= 18,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("john.doe@example.co.in"));
        assert!(!is_valid_email("sin-arroba.com"));
        assert!(!is_valid_email("dos@@arrobas.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@sindominio"));
        assert!(!is_valid_email("user con espacios@b.com"));
    }

    #[test]
    fn test_phone_validation() {
        assert!(is_valid_phone("1234567890"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("12345678901"));
        assert!(!is_valid_phone("12345abcde"));
    }

    #[test]
    fn test_password_and_username() {
        assert!(is_valid_password("secret1"));
        assert!(!is_valid_password("abc"));
        assert!(is_valid_username("ana"));
        assert!(!is_valid_username("ab"));
        assert!(!is_valid_username("  a  "));
    }

    #[test]
    fn test_adult_check() {
        assert!(is_adult("1990-05-20"));
        assert!(!is_adult("2020-01-01"));
        assert!(!is_adult("no-es-fecha"));
    }
}
