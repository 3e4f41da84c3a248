//! Presentation logic shared by the terminal widgets and the text renderers.
//!
//! Nothing here mutates file data. Interactions produce [`ViewEvent`]s that
//! the owner applies through [`ViewCallbacks`].

pub mod callbacks;
pub mod icons;
pub mod listener;
pub mod rank;
pub mod text;
pub mod tree;

pub use callbacks::{RecordingCallbacks, ViewCallbacks, ViewEvent};
pub use listener::{KeyListeners, ListenerId, Subscription};
pub use rank::{ranked_rows, RankDialog, RankInteraction, RankRow};
pub use tree::{visible_rows, RowAction, RowDecoration, TreeRow, TreeState};
