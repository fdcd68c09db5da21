//! # Dispatcher Module
//!
//! The dispatch entry point: segment an inbound path, find a loadable
//! controller with a trailing action name, invoke the action, and
//! normalize the outcome into a uniform response envelope.
//!
//! ## Resolution algorithm
//!
//! Resolution is two-phase, at most two attempts:
//!
//! 1. The entire segment sequence is treated as the module path with
//!    the implicit action name `index`.
//! 2. If that fails and there are at least two segments, the last
//!    segment is popped off as the action name and the shortened
//!    sequence is tried as the module path.
//!
//! This is deliberately not an iterative shrink-search over every
//! prefix length: trying more than one shorter prefix would change
//! observable behavior for ambiguous multi-segment paths.
//!
//! ## Request flow
//!
//! 1. `perform_action(path, params)` strips one optional leading `/`
//!    and splits on `/` into non-empty segments
//! 2. `find_controller` runs the two-phase resolution
//! 3. The action is invoked with the parameters (awaited if
//!    asynchronous); a constant action returns its value
//! 4. The result is normalized into a
//!    [`ResponseEnvelope`](crate::response::ResponseEnvelope)
//!
//! ## Error handling
//!
//! Only malformed input surfaces as an error: an empty path
//! (`ControllerNotSpecified`) or an unresolvable one (`NotFound`).
//! A handler that fails is captured into the envelope with status 500,
//! never propagated.

mod core;

pub use core::{Dispatcher, SegmentVec, MAX_INLINE_SEGMENTS};
