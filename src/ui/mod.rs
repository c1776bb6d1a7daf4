//! Terminal user interface.
//!
//! - `loop_runner` - the async event loop (input, app events, tick)
//! - `input` - modal keyboard dispatch
//! - `events` - handlers for background task completions
//! - `render` - frame composition and overlays
//! - `feed_list` - the sidebar panel
//! - `status` - the status bar
//! - `toast` - toast notifications and the theme-aware adapter

pub mod events;
pub mod feed_list;
pub mod input;
pub mod loop_runner;
pub mod render;
pub mod status;
pub mod toast;

pub use input::Action;
pub use loop_runner::run;
