//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` executes the endpoint catalog from `models::endpoints` with
//! `gloo-net` in the browser. Server-side renders never reach the backend.

pub mod api;
