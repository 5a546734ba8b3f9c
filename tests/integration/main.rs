//! Integration tests
//!
//! `router_tests` drive the full router over the in-memory store.
//! `api_tests` need a running server and are ignored by default.

mod api_tests;
mod router_tests;
