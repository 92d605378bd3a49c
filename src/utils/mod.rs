/// Utility modules for common functionality
pub mod messages;
pub mod text;
pub mod validation;
