use std::fmt;
use std::sync::OnceLock;

use tracing::{debug, warn};

use super::{BackendError, FallibleTransliterator};

type Loader<B> = Box<dyn Fn() -> Result<B, BackendError> + Send + Sync>;

/// Defers construction of an expensive backend until its first call.
///
/// The loader runs at most once even under concurrent first access. A failed
/// load is remembered: every later call reports `Unavailable` without
/// retrying.
pub struct LazyBackend<B> {
    name: String,
    loader: Loader<B>,
    cell: OnceLock<Result<B, String>>,
}

impl<B: FallibleTransliterator> LazyBackend<B> {
    pub fn new<F>(name: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> Result<B, BackendError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            loader: Box::new(loader),
            cell: OnceLock::new(),
        }
    }

    /// Whether the loader has run and succeeded.
    pub fn is_loaded(&self) -> bool {
        matches!(self.cell.get(), Some(Ok(_)))
    }

    /// Whether the loader has run, successfully or not.
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    fn get(&self) -> Result<&B, BackendError> {
        let loaded = self.cell.get_or_init(|| match (self.loader)() {
            Ok(backend) => {
                debug!(backend = %self.name, "backend loaded");
                Ok(backend)
            }
            Err(e) => {
                warn!(backend = %self.name, "backend failed to load: {e}");
                Err(e.to_string())
            }
        });
        loaded.as_ref().map_err(|reason| BackendError::Unavailable {
            backend: self.name.clone(),
            reason: reason.clone(),
        })
    }
}

impl<B: FallibleTransliterator> FallibleTransliterator for LazyBackend<B> {
    fn name(&self) -> &str {
        &self.name
    }

    fn try_transliterate(&self, text: &str) -> Result<String, BackendError> {
        self.get()?.try_transliterate(text)
    }
}

impl<B> fmt::Debug for LazyBackend<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyBackend")
            .field("name", &self.name)
            .field("initialized", &self.cell.get().is_some())
            .finish()
    }
}
