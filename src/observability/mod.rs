//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via `tracing`)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//! ```
//!
//! # Design Decisions
//! - Structured fields (path, method, template) rather than formatted strings
//! - Request ID flows through the tower-http trace span
//! - Registration logs at debug, misses at debug, startup at info

pub mod logging;
