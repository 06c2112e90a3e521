//! GUI components

pub mod format_selector;
pub mod result_card;
pub mod url_input;

// Re-export for convenience
pub use format_selector::{build_format_options, format_selector, FormatOption};
pub use result_card::result_card;
pub use url_input::url_input;
