//! The feed sidebar: list state and context-menu descriptors.
//!
//! - `state` - expansion/selection state machine over the categorized feed
//!   list, projected into a flat row list for rendering and navigation
//! - `menu` - context menus as data, consumed by the overlay renderer

pub mod menu;
pub mod state;

pub use menu::{ContextMenu, MenuAction, MenuEntry, MenuTarget};
pub use state::{
    join_feed_ids, split_folder_id, view_name, ActiveSelection, FeedListState, Level, Row,
    SectionState, VIEWS,
};
