// Include the handler and logging modules directly so integration tests
// can exercise them.
#[path = "handlers.rs"]
pub mod handlers;
#[path = "logging.rs"]
pub mod logging;

// Re-export commonly used handler helpers for convenience
pub use handlers::{channel_from_input, format_invite_report, ReportFormat};
