use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Ties backend calls to the lifetime of the command that issued them.
///
/// Once the scope is cancelled or dropped, outstanding calls resolve to `None`
/// and their results are discarded.
#[derive(Debug)]
pub struct PageScope {
    cancel: Arc<watch::Sender<bool>>,
}

/// Cancels a [`PageScope`] from elsewhere, e.g. a signal handler.
#[derive(Debug, Clone)]
pub struct Canceller {
    cancel: Arc<watch::Sender<bool>>,
}

impl Canceller {
    pub fn cancel(&self) {
        self.cancel.send_replace(true);
    }
}

async fn cancelled(mut receiver: watch::Receiver<bool>) {
    loop {
        let done = *receiver.borrow_and_update();

        if done {
            return;
        }

        if receiver.changed().await.is_err() {
            // sender gone without cancelling, nothing left to wait for
            std::future::pending::<()>().await;
        }
    }
}

impl Default for PageScope {
    fn default() -> Self {
        Self::new()
    }
}

impl PageScope {
    pub fn new() -> Self {
        let (cancel, _) = watch::channel(false);

        Self {
            cancel: Arc::new(cancel),
        }
    }

    pub fn canceller(&self) -> Canceller {
        Canceller {
            cancel: self.cancel.clone(),
        }
    }

    pub fn cancel(&self) {
        self.cancel.send_replace(true);
    }

    /// Drives `future` unless the scope is cancelled first.
    pub async fn run<F>(&self, future: F) -> Option<F::Output>
    where
        F: Future,
    {
        let receiver = self.cancel.subscribe();
        let already = *receiver.borrow();

        if already {
            return None;
        }

        tokio::select! {
            biased;

            () = cancelled(receiver) => None,
            output = future => Some(output),
        }
    }

    /// Runs `future` in the background; the handle yields `None` if the
    /// scope ends before the future completes.
    pub fn spawn<F>(&self, future: F) -> JoinHandle<Option<F::Output>>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        let receiver = self.cancel.subscribe();

        tokio::spawn(async move {
            let already = *receiver.borrow();

            if already {
                return None;
            }

            tokio::select! {
                biased;

                () = cancelled(receiver) => None,
                output = future => Some(output),
            }
        })
    }
}

impl Drop for PageScope {
    fn drop(&mut self) {
        self.cancel.send_replace(true);
    }
}
