//! Session Management: matching, aggregation and the interactive flow
//!
//! # Components
//! - `matching.rs`: Per-reference t-test comparison of one attempt
//! - `state.rs`: ValidationSession accumulation and SessionOutcome
//! - `controller.rs`: Menu, enrollment and authentication

pub mod controller;
pub mod matching;
pub mod state;

pub use controller::SessionController;
pub use state::SessionOutcome;
