use std::error::Error;
use std::fmt;
use std::io;

use crate::core::actions::cancellation::Cancelled;

/// The single error a render surfaces, whatever went wrong in whichever
/// worker first.
#[derive(Debug)]
pub enum RenderError<E> {
    /// The cancel token was tripped before every row was filled.
    Cancelled(Cancelled),
    /// The algorithm rejected a pixel.
    Algorithm(E),
    /// The OS refused to start a worker thread.
    WorkerSpawn(io::Error),
    /// A worker thread panicked.
    WorkerPanicked,
    /// The row queue closed before every row was enqueued.
    QueueDisconnected,
}

impl<E: fmt::Display> fmt::Display for RenderError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::Algorithm(err) => write!(f, "algorithm error: {}", err),
            Self::WorkerSpawn(err) => write!(f, "failed to spawn render worker: {}", err),
            Self::WorkerPanicked => write!(f, "render worker panicked"),
            Self::QueueDisconnected => write!(f, "row queue disconnected"),
        }
    }
}

impl<E: Error + 'static> Error for RenderError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::Algorithm(err) => Some(err),
            Self::WorkerSpawn(err) => Some(err),
            Self::WorkerPanicked | Self::QueueDisconnected => None,
        }
    }
}
