//! Page State
//!
//! Ephemeral UI flags owned by the root view: the mobile menu and the
//! initial loading screen.

use gloo_timers::callback::Timeout;
use leptos::*;

/// Upper bound on waiting for the document `load` event
pub const READY_FALLBACK_MS: u32 = 2500;

/// Delay between content-ready and removing the loader, so its exit
/// transition can play
pub const LOADER_EXIT_GRACE_MS: u32 = 500;

/// Readiness machine for the loading screen.
///
/// `content_ready` goes false -> true at most once. `loading` goes
/// true -> false at most once, and never before `content_ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadGate {
    content_ready: bool,
    loading: bool,
}

impl Default for LoadGate {
    fn default() -> Self {
        Self {
            content_ready: false,
            loading: true,
        }
    }
}

impl LoadGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a ready signal. Returns `true` only for the first one.
    pub fn signal_ready(&mut self) -> bool {
        if self.content_ready {
            return false;
        }
        self.content_ready = true;
        true
    }

    /// Take the loader down. Returns `true` if this call changed the state.
    pub fn finish_exit(&mut self) -> bool {
        if !self.content_ready || !self.loading {
            return false;
        }
        self.loading = false;
        true
    }

    pub fn is_content_ready(&self) -> bool {
        self.content_ready
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

/// Page state provided to the component tree
#[derive(Clone, Copy)]
pub struct PageState {
    /// Mobile navigation menu visibility
    pub menu_open: RwSignal<bool>,
    /// Loader overlay is on screen
    pub loading: RwSignal<bool>,
    /// Main content may fade in
    pub content_ready: RwSignal<bool>,
    gate: StoredValue<LoadGate>,
    exit_timer: StoredValue<Option<Timeout>>,
}

/// Provide page state to the component tree
pub fn provide_page_state() -> PageState {
    let gate = LoadGate::new();
    let state = PageState {
        menu_open: create_rw_signal(false),
        loading: create_rw_signal(gate.is_loading()),
        content_ready: create_rw_signal(gate.is_content_ready()),
        gate: store_value(gate),
        exit_timer: store_value(None),
    };

    provide_context(state);
    state
}

impl PageState {
    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    pub fn close_menu(&self) {
        self.menu_open.set(false);
    }

    /// Flip content-ready and schedule the loader exit.
    ///
    /// Safe to call from both the `load` listener and the fallback timer;
    /// only the first call has any effect.
    pub fn mark_ready(&self) {
        let first = self
            .gate
            .try_update_value(|gate| gate.signal_ready())
            .unwrap_or(false);
        if !first {
            return;
        }
        self.content_ready.set(true);

        let gate = self.gate;
        let loading = self.loading;
        let timer = Timeout::new(LOADER_EXIT_GRACE_MS, move || {
            if gate.try_update_value(|g| g.finish_exit()) == Some(true) {
                loading.try_set(false);
            }
        });
        // Dropping a gloo timeout cancels it, so teardown of the store
        // cancels a pending exit.
        self.exit_timer.try_set_value(Some(timer));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_loading() {
        let gate = LoadGate::new();
        assert!(gate.is_loading());
        assert!(!gate.is_content_ready());
    }

    #[test]
    fn test_ready_is_idempotent() {
        let mut gate = LoadGate::new();
        assert!(gate.signal_ready());
        assert!(!gate.signal_ready());
        assert!(gate.is_content_ready());
    }

    #[test]
    fn test_exit_requires_ready() {
        let mut gate = LoadGate::new();
        assert!(!gate.finish_exit());
        assert!(gate.is_loading());

        gate.signal_ready();
        assert!(gate.finish_exit());
        assert!(!gate.is_loading());
    }

    #[test]
    fn test_exit_happens_once() {
        let mut gate = LoadGate::new();
        gate.signal_ready();
        assert!(gate.finish_exit());
        assert!(!gate.finish_exit());
        // a late load event after the fallback timer changes nothing
        assert!(!gate.signal_ready());
        assert!(!gate.is_loading());
        assert!(gate.is_content_ready());
    }
}
