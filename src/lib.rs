//! Small, strictly validated utilities: FIFO/LIFO/double-ended containers, array queries, numeric
//! helpers and runtime type predicates.
//!
//! # Error Handling
//! Every fallible function in this crate returns `Result<T, `[`ErrorResult`](error::ErrorResult)`>`
//! rather than panicking. An ErrorResult carries a closed-set [`ErrCode`](error::ErrCode), the
//! family it belongs to, a message, the error it wraps (if any) and the exact arguments of the
//! failing call, which can be recovered by downcasting. Arguments are validated before any work is
//! done, so a failed call never leaves anything partially modified.
//!
//! Containers are the exception to this rule for emptiness. Removing from an empty [`Queue`],
//! [`Stack`] or [`Deque`] is a normal occurrence and returns [`None`].
//!
//! # Features
//! All features are enabled by default.
//! - `collections-all`: All of the container types, which can also be enabled individually with
//!   `queue`, `stack` and `deque`.
//! - `number`: Clamping and random integers. This pulls in `rand`.
//! - `array`: Functions over [`ArrayLike`](array::ArrayLike) collections.
//! - `math`: Arithmetic and aggregates that check for NaN and saturate instead of overflowing.
//! - `convert`: Conversions between loosely typed values.
//!
//! # Logging
//! The crate emits [`tracing`] events at `trace` and `debug` level but never installs a
//! subscriber.
//!
//! [`Queue`]: collections::Queue
//! [`Stack`]: collections::Stack
//! [`Deque`]: collections::Deque

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod clone;
pub mod error;
pub mod language;

#[cfg(feature = "array")]
pub mod array;
#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "convert")]
pub mod convert;
#[cfg(feature = "math")]
pub mod math;
#[cfg(feature = "number")]
pub mod number;

pub(crate) mod util;
