//! Failure containment for provider calls.
//!
//! Every call into a [`CryptoProvider`](crate::crypto::CryptoProvider) goes through [`capture`].
//! The call runs on the blocking thread pool and whatever happens to it, an error,
//! a panic or a cancelled task, comes back as a [`Result`] instead of unwinding into
//! the caller.

use tokio::runtime::Handle;

use crate::error::{Error, ErrorKind, Result};

/// Runs `op` on the blocking pool and captures its outcome.
///
/// An `Err` returned by `op` is passed through verbatim.
/// A panic inside `op` is reported as [`ErrorKind::ProviderFault`].
///
/// Requires a Tokio runtime. Polled under any other executor, `op` is not run
/// and the call fails with [`ErrorKind::ProviderFault`].
///
/// # Example
///
/// ```
/// # tokio_test_block_on(async {
/// use keyproof_crypto::{capture, ErrorKind};
///
/// let value = capture(|| Ok(21 * 2)).await.unwrap();
/// assert_eq!(value, 42);
///
/// let err = capture(|| -> keyproof_crypto::Result<()> { panic!("boom") }).await.unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::ProviderFault);
/// # });
/// # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
pub async fn capture<T, F>(op: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    let outcome = match Handle::try_current() {
        Ok(runtime) => run_blocking(runtime, op).await,
        Err(err) => Err(Error::new(ErrorKind::ProviderFault, err)),
    };

    if let Err(err) = &outcome {
        tracing::debug!(kind = ?err.kind(), "operation failed: {err}");
    }

    outcome
}

async fn run_blocking<T, F>(runtime: Handle, op: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    match runtime.spawn_blocking(op).await {
        Ok(result) => result,
        Err(err) if err.is_panic() => Err(Error::msg(
            ErrorKind::ProviderFault,
            "cryptographic operation panicked",
        )),
        Err(err) => Err(Error::new(ErrorKind::ProviderFault, err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        future::Future,
        pin::pin,
        sync::{
            atomic::{AtomicBool, Ordering},
            Arc,
        },
        task::{Context, Poll, Wake, Waker},
    };

    struct NoopWaker;

    impl Wake for NoopWaker {
        fn wake(self: Arc<Self>) {}
    }

    // Polls `fut` once, outside of any Tokio runtime.
    fn poll_once<F: Future>(fut: F) -> Poll<F::Output> {
        let waker = Waker::from(Arc::new(NoopWaker));
        let mut cx = Context::from_waker(&waker);
        pin!(fut).poll(&mut cx)
    }

    #[test]
    fn test_capture_without_runtime() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&ran);

        let outcome = poll_once(capture(move || {
            flag.store(true, Ordering::SeqCst);
            Ok(())
        }));

        let Poll::Ready(Err(err)) = outcome else {
            panic!("expected an immediate failure");
        };
        assert_eq!(err.kind(), ErrorKind::ProviderFault);
        assert!(!ran.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_capture_success() {
        let value = capture(|| Ok(String::from("done"))).await.unwrap();
        assert_eq!(value, "done");
    }

    #[tokio::test]
    async fn test_capture_passes_error_through() {
        let err = capture(|| -> Result<()> {
            Err(Error::msg(ErrorKind::KeyMaterial, "bad modulus"))
        })
        .await
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::KeyMaterial);
        assert_eq!(err.context().to_string(), "bad modulus");
    }

    #[tokio::test]
    async fn test_capture_contains_panic() {
        let err = capture(|| -> Result<u8> { panic!("provider exploded") })
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ProviderFault);
    }
}
