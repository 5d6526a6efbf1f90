pub mod render;

mod dispatch;
mod parse;

// Re-export public API (CLI consumers)
pub use dispatch::{dispatch, hook_entrypoint_from_stdin, HookError, HookResult};
pub use parse::{HookEvent, HookInput};
