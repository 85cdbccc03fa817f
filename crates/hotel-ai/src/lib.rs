//! Decision-support library for hotel revenue management.
//!
//! The [`forecasting`] module owns the deterministic demand scoring and
//! pricing derivation engines along with the review sentiment classifier and
//! the dashboard insight catalog. The [`concierge`] module abstracts the
//! LLM-backed guest chat provider behind a gateway trait so the HTTP service
//! can inject (or omit) a concrete client.

pub mod concierge;
pub mod config;
pub mod error;
pub mod forecasting;
pub mod telemetry;
