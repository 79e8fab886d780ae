use crate::{
    error, info,
    store::{KEY_THEME, KeyValueStore},
    success,
    types::Theme,
};

/// Reads or changes the persisted theme. Without arguments the current
/// theme is printed; `--set` overwrites it, `--toggle` flips it.
pub async fn theme(set: Option<Theme>, toggle: bool) {
    let store = KeyValueStore::open_default();

    let current = match store.get::<Theme>(KEY_THEME).await {
        Ok(theme) => theme.unwrap_or(Theme::Light),
        Err(e) => error!("Cannot read theme. Err: {}", e),
    };

    let next = match (set, toggle) {
        (Some(theme), _) => Some(theme),
        (None, true) => Some(current.toggled()),
        (None, false) => None,
    };

    match next {
        Some(theme) => {
            if let Err(e) = store.set(KEY_THEME, &theme).await {
                error!("Cannot persist theme. Err: {}", e);
            }
            success!("Theme set to {}.", theme);
        }
        None => info!("Current theme: {}", current),
    }
}
