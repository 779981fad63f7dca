//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Route table build and every resolution:
//!     → tracing events (info on build, debug per resolution)
//!     → logging.rs subscriber (pretty or JSON to stdout)
//! ```
//!
//! # Design Decisions
//! - The library only emits events; installing a subscriber is the
//!   binary's job
//! - Structured fields (scope, kind, id, route) rather than formatted text

pub mod logging;

pub use logging::init_logging;
