//! Application State
//!
//! Page-level UI flags, the subscribe prompt machine, and the persisted
//! dismissal flag.

pub mod contact;
pub mod page;
pub mod storage;
pub mod subscribe;

pub use contact::{ContactDraft, ContactField, ContactStatus};
pub use page::{provide_page_state, LoadGate, PageState};
pub use storage::{BrowserStore, DismissalStore};
pub use subscribe::{PromptPhase, SubscribePrompt};
