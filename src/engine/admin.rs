//! Administrator registration checks.

use crate::error::{PayrollError, PayrollResult};
use crate::validation::is_valid_string;

/// Validates administrator registration input.
///
/// The username must be 3 to 50 characters; the credential hash is opaque
/// to this crate and only checked for presence and length. The
/// at-most-one-administrator gate itself lives in the store, not here.
pub fn validate_admin(username: &str, password_hash: &str) -> PayrollResult<()> {
    if !is_valid_string(username, 3, 50) {
        return Err(PayrollError::InvalidFormat {
            field: "username".to_string(),
            message: "expected 3 to 50 characters".to_string(),
        });
    }
    if !is_valid_string(password_hash, 1, 255) {
        return Err(PayrollError::InvalidFormat {
            field: "password_hash".to_string(),
            message: "expected a non-empty credential hash".to_string(),
        });
    }
    Ok(())
}
