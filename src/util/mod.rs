//! Utility functions for common operations.
//!
//! - **URL validation**: security-focused checks before handing a URL to the
//!   system browser opener
//! - **Text processing**: Unicode-aware truncation for terminal rendering
//! - **Time**: humanized relative durations for the feed error indicator

mod text;
mod time;
mod url_validator;

pub use text::truncate_to_width;
pub use time::humanize_ago;
pub use url_validator::{validate_url_for_open, UrlValidationError};
