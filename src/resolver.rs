//! Module resolution as an injected capability.
//!
//! Dynamic by-name symbol loading is the one genuinely dynamic piece of
//! the dispatch layer, so it is isolated behind [`ModuleResolver`]:
//! given a resolved path, return a raw [`ModuleRef`] or signal
//! not-found. Everything downstream of the resolver is statically
//! typed.
//!
//! A [`ModuleRef`] is either a constructor-like [`ControllerClass`] or
//! a foreign-module namespace whose `default` member may hold the
//! class. Default-export unwrapping happens once, at resolution time,
//! rather than as ad hoc checks along the call path.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use crate::controller::Controller;

/// A constructor-like capability produced by module resolution.
///
/// Registered loaders receive the raw class and may downcast it via
/// [`as_any`](ControllerClass::as_any) to build the controller with
/// dependencies; otherwise the loader chain falls back to
/// [`construct`](ControllerClass::construct).
pub trait ControllerClass: Send + Sync {
    /// Zero-argument default construction.
    fn construct(&self) -> anyhow::Result<Controller>;

    /// The concrete class, for loaders that construct with dependencies.
    fn as_any(&self) -> &dyn Any;
}

/// A raw resolved module reference, before normalization.
#[derive(Clone)]
pub enum ModuleRef {
    /// A constructor-like class.
    Class(Arc<dyn ControllerClass>),
    /// A foreign-module container; the class, if any, sits on its
    /// `default` member.
    Namespace { default: Option<Box<ModuleRef>> },
}

impl ModuleRef {
    /// A class backed by a plain construction closure.
    pub fn class<F>(construct: F) -> Self
    where
        F: Fn() -> anyhow::Result<Controller> + Send + Sync + 'static,
    {
        ModuleRef::Class(Arc::new(FnClass(construct)))
    }

    /// A class backed by a [`ControllerClass`] implementation.
    #[must_use]
    pub fn from_class(class: Arc<dyn ControllerClass>) -> Self {
        ModuleRef::Class(class)
    }

    /// A foreign-module namespace with an optional `default` member.
    #[must_use]
    pub fn namespace(default: Option<ModuleRef>) -> Self {
        ModuleRef::Namespace {
            default: default.map(Box::new),
        }
    }

    /// One-step default-export unwrap, performed at resolution time.
    ///
    /// A namespace whose `default` member is itself a namespace does
    /// not unwrap further.
    pub(crate) fn into_class(self) -> Option<Arc<dyn ControllerClass>> {
        match self {
            ModuleRef::Class(class) => Some(class),
            ModuleRef::Namespace { default: Some(inner) } => match *inner {
                ModuleRef::Class(class) => Some(class),
                ModuleRef::Namespace { .. } => None,
            },
            ModuleRef::Namespace { default: None } => None,
        }
    }
}

struct FnClass<F>(F);

impl<F> ControllerClass for FnClass<F>
where
    F: Fn() -> anyhow::Result<Controller> + Send + Sync + 'static,
{
    fn construct(&self) -> anyhow::Result<Controller> {
        (self.0)()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// External module-resolution capability.
///
/// Resolution failure is an expected outcome, not an error: the caller
/// retries with a shorter path. Implementations must never panic on an
/// unknown path.
pub trait ModuleResolver: Send + Sync {
    fn resolve(&self, path: &str) -> Option<ModuleRef>;
}

/// In-memory resolver keyed by fully resolved path
/// (`<app_root>/<module_name>`).
///
/// Composing applications register their modules here at startup; there
/// is no runtime symbol loading.
#[derive(Default)]
pub struct StaticModuleResolver {
    modules: HashMap<String, ModuleRef>,
}

impl StaticModuleResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a module at the given resolved path. Replaces any module
    /// already mounted there.
    pub fn insert(&mut self, path: impl Into<String>, module: ModuleRef) {
        self.modules.insert(path.into(), module);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl ModuleResolver for StaticModuleResolver {
    fn resolve(&self, path: &str) -> Option<ModuleRef> {
        self.modules.get(path).cloned()
    }
}
