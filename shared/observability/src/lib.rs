//! Keygate observability.
//!
//! Structured logging setup shared by the Keygate binaries. Call
//! [`init_tracing`] once at startup before any other work.

pub mod init;

pub use init::*;
