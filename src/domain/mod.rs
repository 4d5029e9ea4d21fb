//! Domain layer for the hnsearch plugin.
//!
//! Core types independent of Zellij APIs and infrastructure concerns.
//!
//! - [`error`]: Error types and result aliases
//! - [`story`]: Story model and identifier
//!
//! # Examples
//!
//! ```
//! use hnsearch::domain::{Result, Story};
//!
//! fn first_hit() -> Result<Story> {
//!     Ok(Story::new("0", "React"))
//! }
//! # assert!(first_hit().is_ok());
//! ```

pub mod error;
pub mod story;

pub use error::{FetchFailure, HnSearchError, Result};
pub use story::{Story, StoryId};
