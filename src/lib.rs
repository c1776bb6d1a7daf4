//! roost - a terminal sidebar client for a feed-reading service.

pub mod api;
pub mod app;
pub mod config;
pub mod sidebar;
pub mod theme;
pub mod ui;
pub mod util;
