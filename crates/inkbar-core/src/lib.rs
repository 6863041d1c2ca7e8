//! Core systems for Inkbar.
//!
//! This crate provides the foundational pieces of the Inkbar toolbar toolkit:
//!
//! - **Signal/Slot System**: Type-safe notification between the toolbar model
//!   and its host
//! - **Error Types**: The programmatic error surface shared by the workspace
//! - **Logging**: `tracing` target constants and span helpers
//!
//! The toolbar model is single-threaded and event-driven: every operation runs
//! to completion on the host's UI thread before the next event is dispatched.
//! Signals therefore always invoke their slots directly in the emitting thread;
//! there is no queued or cross-thread invocation machinery.
//!
//! # Signal/Slot Example
//!
//! ```
//! use inkbar_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;

pub use error::{CoreError, Result, SignalError};
pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
