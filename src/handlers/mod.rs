//! # HTTP Request Handlers
//!
//! - **Battle** (`battle`) - Quiz battle turn resolution
//! - **Health Check** (`health_check`) - Application health monitoring

mod battle;
mod health_check;

pub use battle::*;
pub use health_check::*;
