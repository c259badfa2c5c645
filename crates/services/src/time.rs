use futures::future::{select, Either};
use shared_types::AppError;
use std::future::Future;
use std::pin::pin;
use std::time::Duration;

/// Runtime-appropriate sleep: tokio natively, browser timers on wasm.
pub async fn sleep(duration: Duration) {
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;

    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
}

/// Race `future` against a timer. On expiry the future is dropped, which
/// cancels an in-flight request, and a `Timeout` error is returned.
pub async fn with_timeout<T, F>(duration: Duration, label: &str, future: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    let future = pin!(future);
    let timer = pin!(sleep(duration));
    match select(future, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            tracing::warn!(label, timeout_ms = duration.as_millis() as u64, "Request timed out");
            Err(AppError::timeout(format!(
                "{label} did not complete within {} ms",
                duration.as_millis()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::AppErrorKind;

    #[tokio::test]
    async fn fast_future_wins() {
        let result = with_timeout(Duration::from_millis(200), "fast", async { Ok::<_, AppError>(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test]
    async fn slow_future_times_out() {
        let result = with_timeout(Duration::from_millis(10), "slow", async {
            sleep(Duration::from_millis(500)).await;
            Ok::<_, AppError>(())
        })
        .await;
        let err = result.unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Timeout);
        assert!(err.message.contains("slow"));
    }

    #[tokio::test]
    async fn inner_error_passes_through() {
        let result: Result<(), AppError> = with_timeout(Duration::from_millis(200), "failing", async {
            Err(AppError::http_status(500, "boom"))
        })
        .await;
        assert_eq!(result.unwrap_err().kind, AppErrorKind::HttpStatus);
    }
}
