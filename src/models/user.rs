//! Administrator account model.
//!
//! The system holds at most one administrator for its whole lifetime. The
//! credential is an opaque hash produced by the outer transport
//! collaborator; this crate never hashes or verifies passwords.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The single role an administrator account can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    /// Full administrative access.
    Admin,
}

/// The administrator account.
///
/// The credential hash is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    /// Unique username, 3-50 characters.
    pub username: String,
    /// Opaque credential hash supplied at registration.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// The account's role.
    pub role: AdminRole,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}
