//! Handle to I/O scheduled on the tokio runtime.

use crate::domain::DomainError;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::task::JoinHandle;

/// Result of background I/O. Awaiting yields the operation's result; dropping
/// it detaches the task, which still runs to completion.
#[derive(Debug)]
pub struct PendingIo<T> {
    state: State<T>,
}

#[derive(Debug)]
enum State<T> {
    Scheduled(JoinHandle<Result<T, DomainError>>),
    Failed(Option<DomainError>),
}

impl<T> Unpin for PendingIo<T> {}

impl<T: Send + 'static> PendingIo<T> {
    /// Schedules `fut` on the current tokio runtime. Outside a runtime the
    /// handle resolves to [`DomainError::Runtime`] instead of panicking.
    pub fn spawn<F>(fut: F) -> Self
    where
        F: Future<Output = Result<T, DomainError>> + Send + 'static,
    {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => Self {
                state: State::Scheduled(handle.spawn(fut)),
            },
            Err(e) => Self::failed(DomainError::Runtime(e.to_string())),
        }
    }
}

impl<T> PendingIo<T> {
    /// Already-failed handle.
    pub fn failed(err: DomainError) -> Self {
        Self {
            state: State::Failed(Some(err)),
        }
    }
}

impl<T> Future for PendingIo<T> {
    type Output = Result<T, DomainError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match &mut self.get_mut().state {
            State::Scheduled(handle) => match Pin::new(handle).poll(cx) {
                Poll::Pending => Poll::Pending,
                Poll::Ready(Ok(res)) => Poll::Ready(res),
                Poll::Ready(Err(join)) => Poll::Ready(Err(DomainError::Runtime(join.to_string()))),
            },
            State::Failed(err) => Poll::Ready(Err(err.take().unwrap_or_else(|| {
                DomainError::Runtime("pending I/O polled after completion".into())
            }))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_outside_runtime_fails_without_panic() {
        let pending = PendingIo::spawn(async { Ok(1u8) });
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let res = rt.block_on(pending);
        assert!(matches!(res, Err(DomainError::Runtime(_))));
    }

    #[tokio::test]
    async fn test_dropped_handle_still_runs() {
        let (tx, rx) = tokio::sync::oneshot::channel();
        drop(PendingIo::spawn(async move {
            tx.send(7u8).ok();
            Ok(())
        }));
        assert_eq!(rx.await.unwrap(), 7);
    }
}
