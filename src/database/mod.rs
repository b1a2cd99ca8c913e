use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use crate::models::User;
use crate::utils::AppError;

/// Store em memória: id -> usuário.
///
/// Vive enquanto o processo viver; nada é persistido. Um único lock
/// protege o mapa inteiro e cada operação segura o lock só durante uma
/// leitura ou um ciclo ler-alterar-gravar.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<HashMap<String, User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, User>>, AppError> {
        self.users
            .read()
            .map_err(|_| AppError::Internal("user store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, User>>, AppError> {
        self.users
            .write()
            .map_err(|_| AppError::Internal("user store lock poisoned".to_string()))
    }

    pub fn get(&self, id: &str) -> Result<Option<User>, AppError> {
        Ok(self.read()?.get(id).cloned())
    }

    /// Todos os pares (id, usuário). Ordem não definida.
    pub fn list(&self) -> Result<Vec<(String, User)>, AppError> {
        Ok(self
            .read()?
            .iter()
            .map(|(id, user)| (id.clone(), user.clone()))
            .collect())
    }

    /// Insere com um id novo (UUID v4) e devolve o id gerado
    pub fn insert(&self, user: User) -> Result<String, AppError> {
        let id = Uuid::new_v4().to_string();
        self.write()?.insert(id.clone(), user);
        Ok(id)
    }

    /// Aplica `apply` ao registro sob o lock de escrita e devolve o
    /// registro resultante, ou `None` se o id não existe.
    pub fn update_with<F>(&self, id: &str, apply: F) -> Result<Option<User>, AppError>
    where
        F: FnOnce(&mut User),
    {
        let mut users = self.write()?;
        Ok(users.get_mut(id).map(|user| {
            apply(user);
            user.clone()
        }))
    }

    /// Remove e devolve o registro como estava antes da remoção
    pub fn remove(&self, id: &str) -> Result<Option<User>, AppError> {
        Ok(self.write()?.remove(id))
    }

    pub fn len(&self) -> Result<usize, AppError> {
        Ok(self.read()?.len())
    }
}
