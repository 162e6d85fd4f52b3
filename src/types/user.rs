use entity::user::Model as UserModel;
use sea_orm::Order;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct RRegister {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RLogin {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RUserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// The only user projection that crosses the wire on auth routes.
#[derive(Serialize, Deserialize, Debug)]
pub struct UserPublic {
    pub name: String,
    pub email: String,
}

impl From<&UserModel> for UserPublic {
    fn from(user: &UserModel) -> Self {
        UserPublic {
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TokenGrant {
    pub token: String,
    #[serde(rename = "type")]
    pub token_type: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ExpiringTokenGrant {
    pub token: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub expires_in: i64,
}

// The register envelope spells it "authorisation"; every other route spells
// it "authorization". Clients depend on both, so both stay.
#[derive(Serialize, Deserialize, Debug)]
pub struct RegisterRes {
    pub status: String,
    pub message: String,
    pub user: UserPublic,
    pub authorisation: TokenGrant,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginRes {
    pub status: String,
    pub user: UserPublic,
    pub authorization: ExpiringTokenGrant,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MeRes {
    pub status: String,
    pub user: UserPublic,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageRes {
    pub status: String,
    pub message: String,
}

#[derive(Deserialize, Debug)]
pub struct ListQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct Pagination {
    pub total: u64,
    pub current_page: u64,
    pub last_page: u64,
    pub per_page: u64,
    pub next_page_url: Option<String>,
    pub prev_page_url: Option<String>,
}

#[derive(Serialize)]
pub struct ListRes {
    pub status: String,
    pub data: Vec<UserModel>,
    pub pagination: Pagination,
}

#[derive(Serialize)]
pub struct UserRes {
    pub status: String,
    pub data: UserModel,
}

pub struct DBUserCreate {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

pub struct DBUserUpdate {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Id,
    Name,
    Email,
}

/// Cleaned listing parameters; `page` is 1-based.
pub struct ListParams {
    pub name_contains: Option<String>,
    pub email_contains: Option<String>,
    pub sort_by: SortBy,
    pub sort_order: Order,
    pub page: u64,
    pub per_page: u64,
}
