use web_sys::{window, Storage};
use serde::de::DeserializeOwned;
use crate::config::CONFIG;
use crate::error::StorageError;

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = get_local_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

pub fn remove_from_storage(key: &str) -> Result<(), StorageError> {
    let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
    storage
        .remove_item(key)
        .map_err(|_| StorageError::Remove(key.to_string()))
}

/// Email del usuario logueado.
/// El login lo guarda como texto plano, así que se acepta también sin comillas JSON.
pub fn load_user_email() -> Option<String> {
    let key = &CONFIG.user_email_storage_key;
    if let Some(email) = load_from_storage::<String>(key) {
        return Some(email);
    }
    let raw = get_local_storage()?.get_item(key).ok()??;
    let raw = raw.trim();
    (!raw.is_empty()).then(|| raw.to_string())
}

pub fn clear_user_email() -> Result<(), StorageError> {
    remove_from_storage(&CONFIG.user_email_storage_key)
}
