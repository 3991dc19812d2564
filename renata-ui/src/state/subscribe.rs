//! Subscribe Prompt
//!
//! `Pending -> Open -> Dismissed`. A prompt created while the persisted
//! dismissal flag is set stays pending forever. `Dismissed` is terminal.

use super::storage::DismissalStore;

/// Delay from mount before the prompt is offered
pub const SUBSCRIBE_DELAY_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptPhase {
    Pending,
    Open,
    Dismissed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscribePrompt {
    phase: PromptPhase,
    suppressed: bool,
}

impl SubscribePrompt {
    pub fn new(previously_dismissed: bool) -> Self {
        Self {
            phase: PromptPhase::Pending,
            suppressed: previously_dismissed,
        }
    }

    /// Build from the persisted flag
    pub fn load(store: &impl DismissalStore) -> Self {
        Self::new(store.is_dismissed())
    }

    pub fn phase(&self) -> PromptPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == PromptPhase::Open
    }

    /// Whether the delay timer should be started at all
    pub fn should_schedule(&self) -> bool {
        !self.suppressed && self.phase == PromptPhase::Pending
    }

    /// The offer delay has elapsed. Returns `true` if the prompt opened.
    pub fn on_delay_elapsed(&mut self) -> bool {
        if !self.should_schedule() {
            return false;
        }
        self.phase = PromptPhase::Open;
        true
    }

    /// Close via button, backdrop, or Escape. Persists the flag.
    /// Returns `true` if the prompt was open.
    pub fn dismiss(&mut self, store: &impl DismissalStore) -> bool {
        if self.phase != PromptPhase::Open {
            return false;
        }
        store.mark_dismissed();
        self.phase = PromptPhase::Dismissed;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::storage::MemoryStore;

    #[test]
    fn test_opens_after_delay() {
        let store = MemoryStore::default();
        let mut prompt = SubscribePrompt::load(&store);
        assert_eq!(prompt.phase(), PromptPhase::Pending);
        assert!(prompt.should_schedule());
        assert!(prompt.on_delay_elapsed());
        assert!(prompt.is_open());
    }

    #[test]
    fn test_never_opens_when_previously_dismissed() {
        let store = MemoryStore::with_value("1");
        let mut prompt = SubscribePrompt::load(&store);
        assert!(!prompt.should_schedule());
        assert!(!prompt.on_delay_elapsed());
        assert_eq!(prompt.phase(), PromptPhase::Pending);
    }

    #[test]
    fn test_dismiss_persists_and_is_terminal() {
        let store = MemoryStore::default();
        let mut prompt = SubscribePrompt::load(&store);
        prompt.on_delay_elapsed();

        assert!(prompt.dismiss(&store));
        assert_eq!(prompt.phase(), PromptPhase::Dismissed);
        assert!(store.is_dismissed());

        assert!(!prompt.on_delay_elapsed());
        assert!(!prompt.dismiss(&store));
        assert!(!prompt.is_open());
    }

    #[test]
    fn test_dismiss_while_pending_is_ignored() {
        let store = MemoryStore::default();
        let mut prompt = SubscribePrompt::load(&store);
        assert!(!prompt.dismiss(&store));
        assert!(!store.is_dismissed());
    }

    #[test]
    fn test_unavailable_storage_still_opens_and_closes() {
        let store = MemoryStore::unavailable();
        let mut prompt = SubscribePrompt::load(&store);
        assert!(prompt.on_delay_elapsed());
        assert!(prompt.dismiss(&store));
        assert_eq!(prompt.phase(), PromptPhase::Dismissed);
        // next session would offer it again
        assert!(SubscribePrompt::load(&store).should_schedule());
    }
}
