//! # powerhub-domain
//!
//! Pure domain model for the powerhub PDU management system.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, composite outlet addressing
//! - Define **PDUs** (power distribution units reporting read-only snapshots)
//! - Define **Outlets** (switchable sockets addressed by PDU id + number)
//! - Define **Actions** (the closed command set: `on`, `off`, `cycle`)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod action;
pub mod error;
pub mod outlet;
pub mod pdu;
