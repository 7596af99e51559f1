//! Screen-scoped background work
//!
//! A [`ScreenScope`] owns the task doing a screen's asynchronous work and the
//! watch channel that task publishes into. Closing or dropping the scope
//! aborts the task and retires its publisher, so a response that arrives
//! after the screen went away is never published.

use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Handle through which scoped work publishes state
#[derive(Debug)]
pub struct StatePublisher<S> {
    sender: Arc<watch::Sender<S>>,
    open: Arc<Mutex<bool>>,
}

impl<S> Clone for StatePublisher<S> {
    fn clone(&self) -> Self {
        Self {
            sender: Arc::clone(&self.sender),
            open: Arc::clone(&self.open),
        }
    }
}

impl<S> StatePublisher<S> {
    /// Publish a new state; returns `false` if the scope already moved on
    pub fn publish(&self, state: S) -> bool {
        let open = self.open.lock();
        if !*open {
            return false;
        }
        self.sender.send_replace(state);
        true
    }

    /// Whether this publisher still belongs to the live task of its scope
    pub fn is_open(&self) -> bool {
        *self.open.lock()
    }

    fn retire(&self) {
        *self.open.lock() = false;
    }
}

/// Owner of one screen's background task and published state
#[derive(Debug)]
pub struct ScreenScope<S> {
    publisher: StatePublisher<S>,
    receiver: watch::Receiver<S>,
    task: Option<JoinHandle<()>>,
    finished: watch::Receiver<bool>,
    closed: bool,
}

impl<S> ScreenScope<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Create a scope whose state starts at `initial`
    pub fn new(initial: S) -> Self {
        let (sender, receiver) = watch::channel(initial);
        Self {
            publisher: StatePublisher {
                sender: Arc::new(sender),
                open: Arc::new(Mutex::new(true)),
            },
            receiver,
            task: None,
            finished: watch::channel(true).1,
            closed: false,
        }
    }

    /// Run `work` as the scope's task, replacing any previous one
    ///
    /// A replaced task is aborted and its publisher retired, so only the
    /// latest task can publish. Does nothing once the scope is closed.
    pub fn spawn<F, Fut>(&mut self, work: F)
    where
        F: FnOnce(StatePublisher<S>) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        if self.closed {
            debug!("Ignoring spawn on a closed screen scope");
            return;
        }
        self.stop_task();

        self.publisher = StatePublisher {
            sender: Arc::clone(&self.publisher.sender),
            open: Arc::new(Mutex::new(true)),
        };
        let (finished_tx, finished_rx) = watch::channel(false);
        let work = work(self.publisher.clone());
        self.finished = finished_rx;
        self.task = Some(tokio::spawn(async move {
            work.await;
            finished_tx.send_replace(true);
        }));
    }

    /// Current state
    pub fn state(&self) -> S {
        self.receiver.borrow().clone()
    }

    /// Inspect the current state without cloning it
    pub fn inspect<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.receiver.borrow())
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.receiver.clone()
    }

    /// Wait until the state satisfies `done`
    ///
    /// Returns the current state as soon as nothing can change it any more:
    /// the scope is closed, or its task has finished or been aborted.
    pub async fn settled(&self, done: impl Fn(&S) -> bool) -> S {
        if self.closed {
            return self.state();
        }

        let mut receiver = self.receiver.clone();
        let mut finished = self.finished.clone();
        tokio::select! {
            biased;
            result = receiver.wait_for(|state| done(state)) => match result {
                Ok(state) => state.clone(),
                Err(_) => self.state(),
            },
            _ = finished.wait_for(|finished| *finished) => self.state(),
        }
    }

    /// Whether the scope has been closed
    pub const fn is_closed(&self) -> bool {
        self.closed
    }
}

impl<S> ScreenScope<S> {
    /// Abort the running task and stop accepting new ones
    pub fn close(&mut self) {
        if !self.closed {
            debug!("Closing screen scope");
        }
        self.closed = true;
        self.stop_task();
    }

    fn stop_task(&mut self) {
        self.publisher.retire();
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl<S> Drop for ScreenScope<S> {
    fn drop(&mut self) {
        self.stop_task();
    }
}
