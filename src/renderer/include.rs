use crate::constants::INCLUDE_FUNCTION;
use crate::error::{Error, Result};
use log::trace;
use minijinja::{Environment, ErrorKind, State, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Tracks how deeply each template is currently nested through `include`.
///
/// Clones share the same counters. Entering a template returns an
/// [`IncludeScope`] that releases its level when dropped, so the counter
/// unwinds on success and on error alike.
#[derive(Debug, Clone)]
pub struct IncludeGuard {
    ceiling: usize,
    depths: Arc<Mutex<HashMap<String, usize>>>,
}

/// One active level of an `include` call.
#[derive(Debug)]
pub struct IncludeScope {
    guard: IncludeGuard,
    name: String,
}

impl IncludeGuard {
    /// Creates a guard that allows at most `ceiling` nested levels per template.
    pub fn new(ceiling: usize) -> Self {
        Self { ceiling, depths: Arc::new(Mutex::new(HashMap::new())) }
    }

    pub fn ceiling(&self) -> usize {
        self.ceiling
    }

    /// Current nesting level of `name`.
    pub fn depth(&self, name: &str) -> usize {
        self.lock().get(name).copied().unwrap_or(0)
    }

    /// Claims one nesting level for `name`.
    ///
    /// # Errors
    /// * `Error::RecursionError` - If `name` is already nested `ceiling` times
    pub fn enter(&self, name: &str) -> Result<IncludeScope> {
        let mut depths = self.lock();
        match depths.get_mut(name) {
            Some(depth) if *depth >= self.ceiling => {
                return Err(Error::RecursionError { name: name.to_string() });
            }
            Some(depth) => *depth += 1,
            None => {
                depths.insert(name.to_string(), 1);
            }
        }
        Ok(IncludeScope { guard: self.clone(), name: name.to_string() })
    }

    fn release(&self, name: &str) {
        if let Some(depth) = self.lock().get_mut(name) {
            *depth = depth.saturating_sub(1);
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, usize>> {
        self.depths.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for IncludeScope {
    fn drop(&mut self) {
        self.guard.release(&self.name);
    }
}

/// Registers `include(name, data)` on `env`.
///
/// The function renders the template `name` with `data` as its context and
/// returns the text. The counter lock is not held while the nested render runs.
pub fn register_include(env: &mut Environment<'static>, guard: IncludeGuard) {
    env.add_function(
        INCLUDE_FUNCTION,
        move |state: &State, name: String, data: Value| -> Result<String, minijinja::Error> {
            let _scope = guard.enter(&name).map_err(|err| {
                minijinja::Error::new(
                    ErrorKind::InvalidOperation,
                    "unable to execute template",
                )
                .with_source(err)
            })?;
            trace!("Including '{name}' at depth {}", guard.depth(&name));
            state.env().get_template(&name)?.render(data)
        },
    );
}
