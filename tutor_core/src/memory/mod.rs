//! Memory module - what the tutor has seen and learned at runtime.
//!
//! - **Conversations**: time-stamped record of every exchange
//! - **Learned patterns**: keyword pattern keys -> responses given before

mod conversation;
mod patterns;

pub use conversation::*;
pub use patterns::*;
