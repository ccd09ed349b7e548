use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use std::thread::{self, Scope, ScopedJoinHandle};

use crate::core::actions::generate_fractal::render_error::RenderError;

/// Shared between the workers of one render. The first failure recorded wins;
/// recording anything also raises the abort flag so the other workers stop
/// taking new rows.
pub(crate) struct FirstFailure<E> {
    aborted: AtomicBool,
    failure: Mutex<Option<RenderError<E>>>,
}

impl<E> FirstFailure<E> {
    pub(crate) fn new() -> Self {
        Self {
            aborted: AtomicBool::new(false),
            failure: Mutex::new(None),
        }
    }

    pub(crate) fn is_aborted(&self) -> bool {
        self.aborted.load(Ordering::Acquire)
    }

    pub(crate) fn record(&self, err: RenderError<E>) {
        let mut slot = self.failure.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.is_none() {
            *slot = Some(err);
        }
        self.aborted.store(true, Ordering::Release);
    }

    pub(crate) fn into_result(self) -> Result<(), RenderError<E>> {
        match self.failure.into_inner().unwrap_or_else(PoisonError::into_inner) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

pub(crate) fn spawn_worker<'scope, 'env, F>(
    scope: &'scope Scope<'scope, 'env>,
    name: String,
    work: F,
) -> io::Result<ScopedJoinHandle<'scope, ()>>
where
    F: FnOnce() + Send + 'scope,
{
    log::trace!("spawning render worker {}", name);
    thread::Builder::new().name(name).spawn_scoped(scope, work)
}

/// Barrier at the end of a render: waits for every worker, turning panics
/// into a recorded failure.
pub(crate) fn join_workers<E>(handles: Vec<ScopedJoinHandle<'_, ()>>, failures: &FirstFailure<E>) {
    for handle in handles {
        if handle.join().is_err() {
            failures.record(RenderError::WorkerPanicked);
        }
    }
}
