/// Platform-agnostic command logic
pub mod invocation;
pub mod speech;
pub mod voice_flow;
