//! Typed access to the three persisted session values.

use crate::errors::{SessionError, StorageError};
use crate::store::KeyValueStore;
use eduflow_core::Role;
use eduflow_models::User;

pub const TOKEN_KEY: &str = "auth_token";
pub const USER_KEY: &str = "user_data";
pub const ROLE_KEY: &str = "user_role";

#[derive(Debug, Clone)]
pub struct SessionStorage<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    pub fn set_token(&mut self, token: &str) -> Result<(), StorageError> {
        self.store.set(TOKEN_KEY, token)
    }

    pub fn get_token(&self) -> Result<Option<String>, StorageError> {
        self.store.get(TOKEN_KEY)
    }

    pub fn set_user(&mut self, user: &User) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(user)
            .map_err(|source| StorageError::Encode { key: USER_KEY, source })?;
        self.store.set(USER_KEY, &encoded)
    }

    pub fn get_user(&self) -> Result<Option<User>, StorageError> {
        self.store
            .get(USER_KEY)?
            .map(|raw| {
                serde_json::from_str(&raw)
                    .map_err(|source| StorageError::Decode { key: USER_KEY, source })
            })
            .transpose()
    }

    pub fn set_role(&mut self, role: Role) -> Result<(), StorageError> {
        self.store.set(ROLE_KEY, role.as_str())
    }

    /// The stored role. An unrecognised key is an error, never a default.
    pub fn get_role(&self) -> Result<Option<Role>, SessionError> {
        match self.store.get(ROLE_KEY)? {
            Some(raw) => Ok(Some(raw.parse()?)),
            None => Ok(None),
        }
    }

    pub fn clear_all(&mut self) -> Result<(), StorageError> {
        self.store.remove(TOKEN_KEY)?;
        self.store.remove(USER_KEY)?;
        self.store.remove(ROLE_KEY)
    }
}
