use async_trait::async_trait;

use crate::users::models::UserAccount;
use herbauth_common::error::HerbauthResult;

/// Credential-check seam for the login endpoint.
///
/// The demo backing is a seeded plaintext table; a real implementation
/// (hashed passwords, directory lookup) slots in behind the same trait.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Check an email/password pair. Returns the matching account, or
    /// `None` on any mismatch; the caller decides how to report that.
    async fn verify(&self, email: &str, password: &str) -> HerbauthResult<Option<UserAccount>>;
}
