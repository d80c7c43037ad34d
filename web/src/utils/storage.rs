//! localStorage accessors for the session token.

use crate::utils::constants::AUTH_TOKEN_KEY;
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn read_token() -> Option<String> {
    local_storage()?.get_item(AUTH_TOKEN_KEY).ok().flatten()
}

pub fn write_token(token: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(AUTH_TOKEN_KEY, token).is_err() {
            log::warn!("failed to persist session token");
        }
    }
}

pub fn clear_token() {
    if let Some(storage) = local_storage() {
        storage.remove_item(AUTH_TOKEN_KEY).ok();
    }
}
