//! # Controller Loader Module
//!
//! Resolves dotted/sloshed paths into controller instances by trying a
//! ranked sequence of instantiation strategies ("loaders") before
//! falling back to default construction.
//!
//! ## Resolution steps
//!
//! 1. Join the path segments with `/` and resolve the module under the
//!    configured application root via the injected
//!    [`ModuleResolver`](crate::resolver::ModuleResolver).
//! 2. Normalize the raw reference to a constructible class, unwrapping
//!    a foreign `default` export once if needed.
//! 3. Run the registered loaders newest-first; the first one that
//!    builds a controller wins. A loader returning `Ok(None)` skips to
//!    the next; a loader error aborts the attempt.
//! 4. If no loader built the controller, construct it with zero
//!    arguments.
//! 5. Verify the requested action key is defined, then stamp the unit
//!    with its canonical `module/action` path.
//!
//! Every failure along the way folds into not-found: the caller's
//! retry loop cannot (and must not) distinguish a missing module from
//! a missing action or a loader fault. Diagnostics go to the `tracing`
//! channel instead.

mod core;

pub use core::{ControllerLoader, LoaderFn};
