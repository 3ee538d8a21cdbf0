use herbauth_store::users::models::UserAccount;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: UserAccount,
}
