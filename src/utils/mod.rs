//! # Utility Modules
//!
//! - **Constants** (`constant`) - Battle rule values and configuration fallbacks
//! - **Static objects** (`static_object`) - Env-backed configuration read once at first use

pub mod constant;
pub mod static_object;
