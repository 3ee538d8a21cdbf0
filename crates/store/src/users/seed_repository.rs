use async_trait::async_trait;

use crate::users::models::{Role, UserAccount};
use crate::users::repositories::CredentialVerifier;
use herbauth_common::error::HerbauthResult;

struct SeedUser {
    account: UserAccount,
    password: &'static str,
}

/// Fixed demo credential table: one account per dashboard role.
///
/// Email match is case-insensitive, password match is exact plaintext.
/// This is a stand-in fixture, not a security mechanism.
#[derive(Clone, Default)]
pub struct SeedCredentials;

impl SeedCredentials {
    pub fn new() -> Self {
        Self
    }

    fn table() -> Vec<SeedUser> {
        vec![
            SeedUser {
                account: UserAccount {
                    id: "1".to_string(),
                    name: "Admin User".to_string(),
                    email: "admin@herbalauth.com".to_string(),
                    role: Role::Admin,
                },
                password: "Admin@123",
            },
            SeedUser {
                account: UserAccount {
                    id: "2".to_string(),
                    name: "Analyst User".to_string(),
                    email: "analyst@herbalauth.com".to_string(),
                    role: Role::Analyst,
                },
                password: "Analyst@123",
            },
            SeedUser {
                account: UserAccount {
                    id: "3".to_string(),
                    name: "Viewer User".to_string(),
                    email: "viewer@herbalauth.com".to_string(),
                    role: Role::Viewer,
                },
                password: "Viewer@123",
            },
        ]
    }
}

#[async_trait]
impl CredentialVerifier for SeedCredentials {
    async fn verify(&self, email: &str, password: &str) -> HerbauthResult<Option<UserAccount>> {
        let email = email.trim().to_lowercase();
        let account = Self::table()
            .into_iter()
            .find(|u| u.account.email.to_lowercase() == email && u.password == password)
            .map(|u| u.account);
        Ok(account)
    }
}
