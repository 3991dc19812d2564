//! Persisted Dismissal Flag
//!
//! A single key in the browser's `localStorage`. Storage access never
//! fails observably: a read error means "not dismissed", a write error
//! is logged and dropped.

/// Storage key holding the dismissal sentinel
pub const DISMISSED_KEY: &str = "rd_subscribe_dismissed";

/// Value meaning "dismissed"; anything else is treated as absent
pub const DISMISSED_SENTINEL: &str = "1";

/// Durable storage for the subscribe prompt's dismissal flag
pub trait DismissalStore {
    fn is_dismissed(&self) -> bool;
    fn mark_dismissed(&self);
}

/// Interpret a raw stored value
pub fn is_sentinel(value: Option<&str>) -> bool {
    value == Some(DISMISSED_SENTINEL)
}

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                web_sys::console::warn_1(&format!("localStorage unavailable: {:?}", e).into());
                None
            }
        }
    }
}

impl DismissalStore for BrowserStore {
    fn is_dismissed(&self) -> bool {
        let value = Self::storage().and_then(|storage| storage.get_item(DISMISSED_KEY).ok().flatten());
        is_sentinel(value.as_deref())
    }

    fn mark_dismissed(&self) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.set_item(DISMISSED_KEY, DISMISSED_SENTINEL) {
                web_sys::console::warn_1(
                    &format!("Failed to persist subscribe dismissal: {:?}", e).into(),
                );
            }
        }
    }
}

/// In-memory store for tests; can simulate unavailable storage.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: std::cell::RefCell<Option<String>>,
    unavailable: bool,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: std::cell::RefCell::new(Some(value.to_string())),
            unavailable: false,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            value: std::cell::RefCell::new(None),
            unavailable: true,
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

#[cfg(test)]
impl DismissalStore for MemoryStore {
    fn is_dismissed(&self) -> bool {
        if self.unavailable {
            return false;
        }
        is_sentinel(self.value.borrow().as_deref())
    }

    fn mark_dismissed(&self) {
        if self.unavailable {
            return;
        }
        *self.value.borrow_mut() = Some(DISMISSED_SENTINEL.to_string());
    }
}
