use argon2::password_hash::{PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Argon2, PasswordHash};
use rand::rngs::OsRng;

use crate::errors::ServiceError;

/// Argon2id hash in PHC string form.
pub fn hash_password(password: &str) -> Result<String, ServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| ServiceError::Validation(format!("hashing failed: {e}")))
}

/// False for a wrong password or an unparsable stored hash.
pub fn verify_password(password: &str, stored: &str) -> bool {
    match PasswordHash::new(stored) {
        Ok(parsed) => Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let h = hash_password("Passw0rd!").unwrap();
        assert!(h.starts_with("$argon2"));
        assert!(verify_password("Passw0rd!", &h));
        assert!(!verify_password("passw0rd!", &h));
    }

    #[test]
    fn salts_differ() {
        assert_ne!(hash_password("same-pass").unwrap(), hash_password("same-pass").unwrap());
    }

    #[test]
    fn garbage_hash_never_verifies() {
        assert!(!verify_password("x", "not-a-hash"));
    }
}
