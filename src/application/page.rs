// Page controller - loading / ready / error lifecycle of one page mount
use crate::domain::errors::PageError;
use std::future::Future;
use tokio::task::JoinHandle;
#[cfg(test)]
use tokio::task::AbortHandle;

#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    Loading,
    Ready(T),
    Error(String),
}

impl<T> PageState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }
}

/// Owns the fetch started by a mount. Dropping the controller before the
/// fetch resolves aborts it, so a late result is never applied.
pub struct PageController<T> {
    name: &'static str,
    state: PageState<T>,
    task: Option<JoinHandle<Result<T, PageError>>>,
}

impl<T: Send + 'static> PageController<T> {
    pub fn mount<F>(name: &'static str, load: F) -> Self
    where
        F: Future<Output = Result<T, PageError>> + Send + 'static,
    {
        tracing::debug!("Mounting {} page", name);

        Self {
            name,
            state: PageState::Loading,
            task: Some(tokio::spawn(load)),
        }
    }

    pub fn state(&self) -> &PageState<T> {
        &self.state
    }

    /// Wait for the mount's fetch and move to `Ready` or `Error`.
    /// Resolving a settled controller is a no-op.
    pub async fn resolve(&mut self) -> &PageState<T> {
        if let Some(task) = self.task.as_mut() {
            let outcome = match task.await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!("{} load task failed: {}", self.name, e);
                    Err(PageError::Interrupted)
                }
            };
            self.task = None;

            self.state = match outcome {
                Ok(data) => PageState::Ready(data),
                Err(e) => {
                    tracing::warn!("{} page failed to load: {}", self.name, e);
                    PageState::Error(e.user_message().to_string())
                }
            };
        }

        &self.state
    }

    /// Resolve and hand over the final state
    pub async fn finish(mut self) -> PageState<T> {
        self.resolve().await;
        std::mem::replace(&mut self.state, PageState::Loading)
    }

    #[cfg(test)]
    pub fn abort_handle(&self) -> Option<AbortHandle> {
        self.task.as_ref().map(JoinHandle::abort_handle)
    }
}

impl<T> Drop for PageController<T> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            tracing::debug!("Discarding pending {} load", self.name);
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{EmptyResultError, Resource};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[tokio::test]
    async fn test_starts_loading_then_ready() {
        let mut page = PageController::mount("test", async { Ok::<_, PageError>(7) });
        assert!(page.state().is_loading());

        assert_eq!(page.resolve().await, &PageState::Ready(7));
        assert_eq!(page.resolve().await, &PageState::Ready(7));
    }

    #[tokio::test]
    async fn test_failure_becomes_error_message() {
        let page = PageController::mount("test", async {
            Err::<u8, PageError>(
                EmptyResultError {
                    resource: Resource::Users,
                }
                .into(),
            )
        });

        assert_eq!(page.finish().await, PageState::Error("No users found".to_string()));
    }

    #[tokio::test]
    async fn test_drop_before_resolution_discards_result() {
        let applied = Arc::new(AtomicBool::new(false));
        let (release, gate) = tokio::sync::oneshot::channel::<()>();

        let flag = applied.clone();
        let page = PageController::mount("test", async move {
            let _ = gate.await;
            flag.store(true, Ordering::SeqCst);
            Ok::<_, PageError>(())
        });
        let handle = page.abort_handle().unwrap();

        drop(page);
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        assert!(handle.is_finished());

        let _ = release.send(());
        tokio::task::yield_now().await;
        assert!(!applied.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_panicking_load_is_an_error_state() {
        let page = PageController::mount("test", async {
            let explode = true;
            if explode {
                panic!("loader exploded");
            }
            Ok::<u8, PageError>(0)
        });

        assert_eq!(
            page.finish().await,
            PageState::Error("Failed to load page".to_string())
        );
    }
}
