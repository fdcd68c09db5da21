//! Loader core - controller resolution and instantiation.

use std::sync::Arc;

use tracing::debug;

use crate::controller::Controller;
use crate::resolver::{ControllerClass, ModuleResolver};

/// A registered instantiation strategy.
///
/// Receives the raw constructible class and either builds the
/// controller (`Ok(Some(..))`), skips so the next strategy runs
/// (`Ok(None)`), or fails (`Err`), which aborts the current resolution
/// attempt entirely.
pub type LoaderFn =
    Arc<dyn Fn(&dyn ControllerClass) -> anyhow::Result<Option<Controller>> + Send + Sync>;

/// Resolves path segments into controller instances.
///
/// Owns the injected module-resolution capability, the application
/// root it resolves against, and the ordered loader chain. The chain
/// is configured once at startup; resolution itself is read-only.
pub struct ControllerLoader {
    app_root: String,
    resolver: Arc<dyn ModuleResolver>,
    /// Try order: newest registration first.
    loaders: Vec<LoaderFn>,
}

impl ControllerLoader {
    pub fn new(app_root: impl Into<String>, resolver: Arc<dyn ModuleResolver>) -> Self {
        Self {
            app_root: app_root.into(),
            resolver,
            loaders: Vec::new(),
        }
    }

    /// Register a loader at the front of the try order.
    ///
    /// Duplicates are allowed; every registration runs until one builds
    /// a controller.
    pub fn add_loader<F>(&mut self, loader: F)
    where
        F: Fn(&dyn ControllerClass) -> anyhow::Result<Option<Controller>> + Send + Sync + 'static,
    {
        self.loaders.insert(0, Arc::new(loader));
    }

    #[must_use]
    pub fn app_root(&self) -> &str {
        &self.app_root
    }

    /// Attempt to load the controller named by `segments` and verify it
    /// defines `action`.
    ///
    /// Returns `None` for every failure cause - missing module,
    /// non-constructible reference, loader fault, construction failure,
    /// or missing action. This is the expected "try a shorter path"
    /// signal for the dispatcher's retry loop and never propagates an
    /// error.
    #[must_use]
    pub fn try_load_controller(&self, segments: &[String], action: &str) -> Option<Controller> {
        let module_name = segments.join("/");
        let path = format!("{}/{}", self.app_root, module_name);

        let Some(module) = self.resolver.resolve(&path) else {
            debug!(module = %module_name, path = %path, "module not found");
            return None;
        };
        debug!(module = %module_name, "module loaded");

        let Some(class) = module.into_class() else {
            debug!(module = %module_name, "module is not constructible");
            return None;
        };

        let mut controller = None;
        for loader in &self.loaders {
            match loader(class.as_ref()) {
                Ok(Some(built)) => {
                    controller = Some(built);
                    break;
                }
                Ok(None) => {}
                Err(err) => {
                    debug!(module = %module_name, error = %err, "loader failed");
                    return None;
                }
            }
        }

        let mut controller = match controller {
            Some(built) => built,
            // No loader claimed the class; fall back to default construction.
            None => match class.construct() {
                Ok(built) => built,
                Err(err) => {
                    debug!(module = %module_name, error = %err, "default construction failed");
                    return None;
                }
            },
        };

        if !controller.has_action(action) {
            debug!(module = %module_name, action = %action, "action not defined");
            return None;
        }

        controller.stamp_canonical_path(format!("{module_name}/{action}"));
        Some(controller)
    }
}
