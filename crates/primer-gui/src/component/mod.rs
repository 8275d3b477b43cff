//! Reusable UI components for State Primer.
//!
//! Building blocks shared by the views:
//!
//! - **Cards**: `TopicCard`, `QuizCard`, `CodeBlock`, `DisclosurePanel`
//! - **Chrome**: `SearchFilterBar`, `EmptyState`, the toast overlay
//! - **Icons**: use `iced_fonts::lucide::*` directly (see <https://lucide.dev/icons/>)
//!
//! Components use the builder pattern and return `Element<M>`, so a view
//! assembles them and maps their messages in one place.

mod code_block;
mod disclosure_panel;
mod empty_state;
mod quiz_card;
mod search_filter_bar;
mod toast;
mod topic_card;

pub use code_block::CodeBlock;
pub use disclosure_panel::DisclosurePanel;
pub use empty_state::EmptyState;
pub use quiz_card::QuizCard;
pub use search_filter_bar::SearchFilterBar;
pub use toast::{ToastMessage, ToastState, ToastType, view_toast};
pub use topic_card::TopicCard;
