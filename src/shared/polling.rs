//! Fixed-interval status polling with teardown.
//!
//! A probe is called once per tick until it reports a final value. A "not
//! found" or "unauthorized" probe error stops polling, any other error is
//! logged and polling continues. Firing the [`Teardown`] stops polling at once,
//! including a probe that is still in flight.

use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;

use crate::core::error::AppError;

/// What a single probe observed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollStep<T> {
    /// Not terminal yet, probe again after the interval
    Pending,
    /// Terminal observation, polling stops
    Done(T),
}

#[derive(Debug, thiserror::Error)]
pub enum PollError {
    #[error("polling cancelled")]
    Cancelled,

    #[error("{0}")]
    Gone(AppError),

    /// The session was rejected; every later probe would fail the same way
    #[error("{0}")]
    Rejected(AppError),
}

/// Owner side of a view's lifetime; firing it cancels every poller subscribed to it
#[derive(Debug)]
pub struct Teardown {
    tx: watch::Sender<bool>,
}

/// Listener side handed to pollers
#[derive(Debug, Clone)]
pub struct TeardownSignal {
    rx: watch::Receiver<bool>,
}

impl Teardown {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx }
    }

    pub fn signal(&self) -> TeardownSignal {
        TeardownSignal {
            rx: self.tx.subscribe(),
        }
    }

    pub fn fire(&self) {
        // send_replace so the value sticks even with no live receivers
        self.tx.send_replace(true);
    }

    pub fn is_fired(&self) -> bool {
        *self.tx.borrow()
    }
}

impl Default for Teardown {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Teardown {
    fn drop(&mut self) {
        self.fire();
    }
}

impl TeardownSignal {
    pub fn is_fired(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once teardown fires (or its owner is gone)
    pub async fn fired(&mut self) {
        if self.is_fired() {
            return;
        }
        while self.rx.changed().await.is_ok() {
            if *self.rx.borrow() {
                return;
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Poller {
    interval: Duration,
    immediate: bool,
}

impl Poller {
    /// First probe happens one interval after start
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            immediate: false,
        }
    }

    /// First probe happens right away
    pub fn immediate(interval: Duration) -> Self {
        Self {
            interval,
            immediate: true,
        }
    }

    pub async fn run<T, F, Fut>(
        &self,
        mut teardown: TeardownSignal,
        mut probe: F,
    ) -> Result<T, PollError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<PollStep<T>, AppError>>,
    {
        let mut first = true;

        loop {
            if !(first && self.immediate) {
                tokio::select! {
                    biased;
                    _ = teardown.fired() => return Err(PollError::Cancelled),
                    _ = tokio::time::sleep(self.interval) => {}
                }
            }
            first = false;

            if teardown.is_fired() {
                return Err(PollError::Cancelled);
            }

            let observed = tokio::select! {
                biased;
                _ = teardown.fired() => return Err(PollError::Cancelled),
                observed = probe() => observed,
            };

            match observed {
                Ok(PollStep::Done(value)) => return Ok(value),
                Ok(PollStep::Pending) => {}
                Err(e) if e.is_not_found() => {
                    tracing::warn!("Polled resource is gone: {}", e);
                    return Err(PollError::Gone(e));
                }
                Err(e) if e.is_unauthorized() => {
                    tracing::warn!("Polling stopped, session rejected: {}", e);
                    return Err(PollError::Rejected(e));
                }
                Err(e) => {
                    tracing::warn!("Transient polling error, will retry: {}", e);
                }
            }
        }
    }
}
