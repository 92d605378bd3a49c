/// Handler modules for framework events and errors
mod error;
mod events;

// Re-export main handler functions
pub use error::on_error;
pub use events::handle_event;
