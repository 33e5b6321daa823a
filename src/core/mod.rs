//! # Core Todo Logic
//!
//! Everything the app knows about todos lives here. No terminal, no prompts.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • validation (pure)    │
//!                    │  • TodoList (manager)   │
//!                    │  • EventSink (diag)     │
//!                    │                         │
//!                    │  No I/O. No UI.         │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │   Shell    │
//!                         │  (menu +   │
//!                         │  prompts)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`validation`]: description and index checks, no state
//! - [`list`]: the `TodoList` that owns every item for one session
//! - [`events`]: what happened, and where it gets recorded
//! - [`error`]: the error kinds callers must tell apart

pub mod config;
pub mod error;
pub mod events;
pub mod item;
pub mod list;
pub mod validation;

pub use error::{DescriptionError, TodoError};
pub use events::{EventSink, LogSink, NullSink, TodoEvent};
pub use item::TodoItem;
pub use list::TodoList;
