use serde::{Deserialize, Serialize};

/// Usuário armazenado no store.
/// O identificador não faz parte do registro: ele é a chave do store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub biography: String,
}

/// Corpo de POST/PUT. Campos ausentes viram string vazia.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct UserPayload {
    pub first_name: String,
    pub last_name: String,
    pub biography: String,
}

/// Usuário como é devolvido pela API (registro + id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub biography: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserEnvelope {
    pub user: UserResponse,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UsersEnvelope {
    pub users: Vec<UserResponse>,
}

impl From<UserPayload> for User {
    fn from(p: UserPayload) -> Self {
        User {
            first_name: p.first_name,
            last_name: p.last_name,
            biography: p.biography,
        }
    }
}

impl From<(String, User)> for UserResponse {
    fn from((id, u): (String, User)) -> Self {
        UserResponse {
            id,
            first_name: u.first_name,
            last_name: u.last_name,
            biography: u.biography,
        }
    }
}
