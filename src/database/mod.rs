// SQLite layer backing the in-process backend emulation.

pub mod connection;
pub mod migrations;

pub use connection::Database;
