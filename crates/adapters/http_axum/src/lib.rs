//! # powerhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** (`/api/health`, `/api/pdus`, `/api/outlets`, …)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into JSON responses and status codes
//!
//! ## Dependency rule
//! Depends on `powerhub-app` (port trait and services) and `powerhub-domain`
//! (types used in request/response mapping). Never leaks axum types into the
//! domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
