//! Controller units and their actions.
//!
//! A [`Controller`] is a resolved handler object: a mapping from action
//! names to [`Action`]s. An action is either an invocable handler of the
//! request parameters or a plain constant value that is returned as-is.
//! After a successful load the `ControllerLoader` stamps the unit with
//! its canonical `module/action` path for diagnostics.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use futures::future::{self, BoxFuture};
use futures::FutureExt;
use serde_json::Value;

/// Outcome of invoking an action.
///
/// `Err` carries the value the handler failed with. It is captured by
/// the dispatcher and becomes the response body, never a propagated
/// error.
pub type ActionResult = Result<Value, Value>;

/// Boxed invocable action: takes the request parameters and resolves to
/// the handler's result.
pub type ActionFn = Arc<dyn Fn(Value) -> BoxFuture<'static, ActionResult> + Send + Sync>;

/// A named member of a [`Controller`].
#[derive(Clone)]
pub enum Action {
    /// An invocable handler of the request parameters.
    Handler(ActionFn),
    /// A constant response value; invocation ignores the parameters.
    Value(Value),
}

impl Action {
    /// Wrap a synchronous handler function.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(Value) -> ActionResult + Send + Sync + 'static,
    {
        Action::Handler(Arc::new(move |params| future::ready(f(params)).boxed()))
    }

    /// Wrap an asynchronous handler function.
    pub fn from_async<F, Fut>(f: F) -> Self
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = ActionResult> + Send + 'static,
    {
        Action::Handler(Arc::new(move |params| f(params).boxed()))
    }

    /// An action bound to a constant value.
    pub fn value(v: impl Into<Value>) -> Self {
        Action::Value(v.into())
    }

    /// Invoke the action with the given parameters.
    ///
    /// A constant behaves as a zero-argument invocable that returns its
    /// value; the parameters are dropped.
    #[must_use]
    pub fn invoke(&self, params: Value) -> BoxFuture<'static, ActionResult> {
        match self {
            Action::Handler(f) => f(params),
            Action::Value(v) => future::ready(Ok(v.clone())).boxed(),
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Handler(_) => f.write_str("Action::Handler"),
            Action::Value(v) => f.debug_tuple("Action::Value").field(v).finish(),
        }
    }
}

/// A resolved handler unit exposing named actions.
///
/// Constructed fresh per resolution attempt, either by a registered
/// loader or by a class's default construction. Nothing is shared
/// between requests.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    actions: HashMap<String, Action>,
    canonical_path: Option<String>,
}

impl Controller {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style action definition.
    #[must_use]
    pub fn with_action(mut self, name: impl Into<String>, action: Action) -> Self {
        self.define(name, action);
        self
    }

    /// Define or replace an action.
    pub fn define(&mut self, name: impl Into<String>, action: Action) {
        self.actions.insert(name.into(), action);
    }

    /// Explicit key-present test: an action bound to `false`, `0`, or
    /// an empty string still counts as defined.
    #[must_use]
    pub fn has_action(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    #[must_use]
    pub fn action(&self, name: &str) -> Option<&Action> {
        self.actions.get(name)
    }

    /// The `module/action` path stamped by the loader after a
    /// successful resolution; `None` until then.
    #[must_use]
    pub fn canonical_path(&self) -> Option<&str> {
        self.canonical_path.as_deref()
    }

    pub(crate) fn stamp_canonical_path(&mut self, path: String) {
        self.canonical_path = Some(path);
    }
}
