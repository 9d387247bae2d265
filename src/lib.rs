//! linkbox — session-scoped bookmark client core.
//!
//! A reactive state layer over a hosted backend: a session tracker
//! observing the identity provider, an in-memory bookmark store, a
//! mutation façade for create/delete, and a realtime reconciler merging
//! pushed change events into local state. The hosted service is consumed
//! through trait seams; `backend::MemoryBackend` emulates it in-process
//! for tests and the demo binary.

// Single-threaded cooperative model; client futures carry no Send bounds.
#![allow(async_fn_in_trait)]

pub mod app;
pub mod backend;
pub mod clients;
pub mod database;
pub mod managers;
pub mod services;
pub mod types;
