//! # Business Logic Services
//!
//! - **Battle** (`battle`) - Turn resolution for the quiz battle

pub mod battle;
