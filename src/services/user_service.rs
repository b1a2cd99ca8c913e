// ==================== USERS ====================
// Regras de negócio do CRUD de usuários sobre o store em memória

use crate::{
    database::UserStore,
    models::{User, UserPayload, UserResponse},
    utils::{is_blank, AppError, MISSING_FIELDS, USER_NOT_FOUND},
};

fn not_found() -> AppError {
    AppError::NotFound(USER_NOT_FOUND.to_string())
}

pub fn find_user(store: &UserStore, id: &str) -> Result<UserResponse, AppError> {
    let user = store.get(id)?.ok_or_else(not_found)?;
    Ok(UserResponse::from((id.to_string(), user)))
}

pub fn list_users(store: &UserStore) -> Result<Vec<UserResponse>, AppError> {
    Ok(store.list()?.into_iter().map(UserResponse::from).collect())
}

/// Todos os campos são obrigatórios; o registro é salvo como recebido.
pub fn create_user(store: &UserStore, payload: UserPayload) -> Result<UserResponse, AppError> {
    if is_blank(&payload.first_name) || is_blank(&payload.last_name) || is_blank(&payload.biography) {
        return Err(AppError::InvalidRequest(MISSING_FIELDS.to_string()));
    }

    let user = User::from(payload);
    let id = store.insert(user.clone())?;

    log::info!("✅ User created: {}", id);
    Ok(UserResponse::from((id, user)))
}

/// Sobrescreve apenas os campos não vazios; devolve o registro já mesclado.
pub fn update_user(store: &UserStore, id: &str, payload: UserPayload) -> Result<UserResponse, AppError> {
    let merged = store
        .update_with(id, |user| merge_into(user, payload))?
        .ok_or_else(not_found)?;

    log::info!("✅ User updated: {}", id);
    Ok(UserResponse::from((id.to_string(), merged)))
}

pub fn delete_user(store: &UserStore, id: &str) -> Result<UserResponse, AppError> {
    let removed = store.remove(id)?.ok_or_else(not_found)?;

    log::info!("✅ User deleted: {} ({} remaining)", id, store.len()?);
    Ok(UserResponse::from((id.to_string(), removed)))
}

fn merge_into(user: &mut User, payload: UserPayload) {
    if !is_blank(&payload.first_name) {
        user.first_name = payload.first_name;
    }
    if !is_blank(&payload.last_name) {
        user.last_name = payload.last_name;
    }
    if !is_blank(&payload.biography) {
        user.biography = payload.biography;
    }
}
