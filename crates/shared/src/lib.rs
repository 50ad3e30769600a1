//! Rocktober Shared - Native process setup
//!
//! Environment loading, tracing initialization and the tokio-backed
//! countdown ticker used by native front ends.

pub mod bootstrap;
pub mod ticker;

pub use bootstrap::{init_env, init_tracing};
pub use ticker::Ticker;
