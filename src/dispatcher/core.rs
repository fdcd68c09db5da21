//! Dispatcher core - per-request path resolution and action dispatch.

use serde_json::Value;
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use crate::controller::Controller;
use crate::error::DispatchError;
use crate::loader::ControllerLoader;
use crate::resolver::ControllerClass;
use crate::response::ResponseEnvelope;

/// Maximum inline path segments before heap allocation.
/// Dispatch paths rarely run deeper than a handful of components.
pub const MAX_INLINE_SEGMENTS: usize = 8;

/// Stack-allocated segment storage, following the same inline-capacity
/// pattern as per-request parameter vectors.
pub type SegmentVec = SmallVec<[String; MAX_INLINE_SEGMENTS]>;

/// The implicit action name used when the full path resolves as a module.
const INDEX_ACTION: &str = "index";

/// Routes inbound paths to controller actions.
///
/// Owns its [`ControllerLoader`]; all per-request state (segments,
/// resolution result, envelope) is local to each `perform_action`
/// call, so a single dispatcher can serve concurrent requests once
/// loader registration has finished.
pub struct Dispatcher {
    loader: ControllerLoader,
}

impl Dispatcher {
    #[must_use]
    pub fn new(loader: ControllerLoader) -> Self {
        Self { loader }
    }

    /// Register a loader on the underlying [`ControllerLoader`];
    /// newest registrations run first.
    pub fn add_loader<F>(&mut self, loader: F)
    where
        F: Fn(&dyn ControllerClass) -> anyhow::Result<Option<Controller>> + Send + Sync + 'static,
    {
        self.loader.add_loader(loader);
    }

    #[must_use]
    pub fn loader(&self) -> &ControllerLoader {
        &self.loader
    }

    /// Two-phase controller resolution.
    ///
    /// Attempt 1 treats the whole segment sequence as the module path
    /// with the implicit `index` action. If that fails and there are at
    /// least two segments, attempt 2 pops the last segment off as the
    /// action name and retries with the shortened module path. No
    /// further prefixes are tried.
    #[must_use]
    pub fn find_controller(&self, segments: &[String]) -> Option<(Controller, String)> {
        debug!(segments = ?segments, action = INDEX_ACTION, "resolution attempt 1");
        if let Some(controller) = self.loader.try_load_controller(segments, INDEX_ACTION) {
            return Some((controller, INDEX_ACTION.to_string()));
        }

        if segments.len() >= 2 {
            let (module, action) = segments.split_at(segments.len() - 1);
            let action = &action[0];
            debug!(segments = ?module, action = %action, "resolution attempt 2");
            if let Some(controller) = self.loader.try_load_controller(module, action) {
                return Some((controller, action.clone()));
            }
        }

        None
    }

    /// Resolve `path`, invoke the matched action with `params`, and
    /// normalize the outcome.
    ///
    /// Suspends while an asynchronous action runs. A handler failure is
    /// captured into the envelope (status 500, body = the failure
    /// value); only the two upfront validation failures return `Err`.
    pub async fn perform_action(
        &self,
        path: &str,
        params: Value,
    ) -> Result<ResponseEnvelope, DispatchError> {
        // One optional leading separator is tolerated.
        let trimmed = path.strip_prefix('/').unwrap_or(path);
        let segments: SegmentVec = trimmed
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if segments.is_empty() {
            warn!(path = %path, "empty path after normalization");
            return Err(DispatchError::ControllerNotSpecified);
        }

        let Some((controller, action_name)) = self.find_controller(&segments) else {
            warn!(path = %path, "no controller/action pair resolved");
            return Err(DispatchError::NotFound);
        };

        // The loader verified the key exists; a miss here still folds
        // into the same error rather than panicking.
        let action = controller
            .action(&action_name)
            .ok_or(DispatchError::NotFound)?;

        info!(
            path = %path,
            canonical_path = controller.canonical_path().unwrap_or(""),
            "dispatching action"
        );

        let (success, result) = match action.invoke(params).await {
            Ok(value) => (true, value),
            Err(value) => (false, value),
        };

        let envelope = ResponseEnvelope::normalize(result, success);
        debug!(
            canonical_path = controller.canonical_path().unwrap_or(""),
            status_code = envelope.status_code,
            success,
            "action result normalized"
        );
        Ok(envelope)
    }
}
