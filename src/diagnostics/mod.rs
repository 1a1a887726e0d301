// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for localization degradations.
//!
//! Missing translations and persistence failures never interrupt a render
//! path; instead they are recorded here in a memory-bounded circular buffer
//! so that authoring gaps and storage problems stay observable.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: the degradations the resolver can record
//! - [`DiagnosticsLog`]: shared, lock-guarded event sink

mod buffer;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use events::{DiagnosticEvent, DiagnosticsLog, Resolution};
