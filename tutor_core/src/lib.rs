//! # Tutor Core
//!
//! The stateful half of the Quoridor tutor. Answers free-text questions from
//! the `quoridor_rules` knowledge base and from response patterns learned out
//! of earlier conversations, and keeps that learning on disk.
//!
//! ## Core Components
//!
//! - **memory**: conversation log and learned pattern store
//! - **persistence**: the JSON learning document
//! - **response**: tiered answer selection
//! - **learning**: records exchanges and derives pattern keys
//! - **tutor**: the `chat` / `train` / `status` / `reset` / `export` facade
//!
//! ## Flow
//!
//! A message goes through [`ResponseEngine::respond`], the answer is handed
//! to [`LearningCoordinator::record`], and the learning document is saved on
//! a fixed cadence. Persistence failures never fail a request.

pub mod audio;
pub mod choice;
pub mod config;
pub mod error;
pub mod learning;
pub mod memory;
pub mod persistence;
pub mod response;
pub mod tutor;

pub use audio::*;
pub use choice::*;
pub use config::*;
pub use error::*;
pub use learning::*;
pub use memory::*;
pub use persistence::*;
pub use response::*;
pub use tutor::*;
