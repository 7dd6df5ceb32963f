// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording user activity and failures.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event (user action, warning, error)
//! - [`ActivityLog`]: Bounded log owned by the application

mod buffer;
mod collector;
mod events;

pub use buffer::CircularBuffer;
pub use collector::{ActivityLog, DEFAULT_CAPACITY};
pub use events::{DiagnosticEvent, DiagnosticEventKind, ErrorType, UserAction};
