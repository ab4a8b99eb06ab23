//! # powerhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that backends must implement (driven/outbound
//!   port): [`ports::PduClient`] — login, PDU listing, outlet status,
//!   outlet switching
//! - Define **driving/inbound ports** as use-case structs:
//!   [`services::PowerService`] — session policy, listing, filtering,
//!   deterministic ordering, action dispatch
//! - Orchestrate domain objects without knowing *how* the controller link
//!   works
//!
//! ## Dependency rule
//! Depends on `powerhub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;
