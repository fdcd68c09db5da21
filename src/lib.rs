//! # mvc-dispatch
//!
//! A minimal controller-resolution and action-dispatch layer for
//! request-handling frameworks: given a URL-like path, locate a
//! controller, select an action on it, invoke that action with the
//! supplied parameters, and normalize the result into a status-coded
//! response envelope.
//!
//! ## Architecture
//!
//! The library is organized into a handful of small modules:
//!
//! - **[`controller`]** - the resolved handler unit ([`Controller`])
//!   and its named [`Action`]s (invocable handlers or constant values)
//! - **[`resolver`]** - the injected module-resolution capability:
//!   [`ModuleResolver`], raw [`ModuleRef`]s, and the constructor-like
//!   [`ControllerClass`] seam
//! - **[`loader`]** - [`ControllerLoader`]: the ranked loader chain
//!   with default-construction fallback
//! - **[`dispatcher`]** - [`Dispatcher`]: path segmentation, the
//!   two-phase resolution retry, invocation, and normalization
//! - **[`response`]** - the [`ResponseEnvelope`] and its shaping rules
//! - **[`error`]** - the public [`DispatchError`] taxonomy
//!
//! ## Quick start
//!
//! ```
//! use std::sync::Arc;
//! use mvc_dispatch::{
//!     Action, Controller, ControllerLoader, Dispatcher, ModuleRef,
//!     StaticModuleResolver,
//! };
//!
//! let mut resolver = StaticModuleResolver::new();
//! resolver.insert(
//!     "app/ping",
//!     ModuleRef::class(|| Ok(Controller::new().with_action("index", Action::value("pong")))),
//! );
//!
//! let dispatcher = Dispatcher::new(ControllerLoader::new("app", Arc::new(resolver)));
//! let envelope = futures::executor::block_on(
//!     dispatcher.perform_action("/ping", serde_json::json!({})),
//! )
//! .unwrap();
//! assert_eq!(envelope.status_code, 200);
//! assert_eq!(envelope.body, serde_json::json!("pong"));
//! ```
//!
//! ## Scope
//!
//! Routing-table syntax, middleware chains, authentication, and
//! request-body parsing are all assumed handled upstream: the entry
//! point receives a path string and an already-parsed parameter
//! object. Handler lifecycle is likewise external - a handler that
//! never settles will suspend its caller indefinitely.

pub mod controller;
pub mod dispatcher;
pub mod error;
pub mod loader;
pub mod resolver;
pub mod response;

pub use controller::{Action, ActionFn, ActionResult, Controller};
pub use dispatcher::{Dispatcher, SegmentVec, MAX_INLINE_SEGMENTS};
pub use error::DispatchError;
pub use loader::{ControllerLoader, LoaderFn};
pub use resolver::{ControllerClass, ModuleRef, ModuleResolver, StaticModuleResolver};
pub use response::ResponseEnvelope;
