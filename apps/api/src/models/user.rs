use serde::{Deserialize, Serialize};

/// A credential record in the `logins` collection.
///
/// The password is stored verbatim and compared exact-match (see DESIGN.md
/// for the plaintext-storage caveat).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
    pub password: String,
}
