// In-process emulation of the hosted backend (auth + table + change stream).
// Implements all three client seams over one shared state; used by the
// demo binary and the test suites.

pub mod memory;

pub use memory::{Fault, MemoryBackend};
