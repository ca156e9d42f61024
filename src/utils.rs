use std::future::Future;
use tokio::time::{sleep, Duration};
use tracing::warn;

/// Retries `operation` until it succeeds or `max_retries` attempts have
/// failed, doubling the delay between attempts.
///
/// Test support only: the program paths never retry, but the integration
/// tests have to wait out DynamoDB's asynchronous table creation.
pub async fn retry_with_backoff<T, E, Fut, F>(
    operation: F,
    initial_delay: Duration,
    max_retries: usize,
) -> Result<T, E>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Debug,
{
    let mut delay = initial_delay;
    let mut attempt = 0;

    loop {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(e) if attempt < max_retries => {
                attempt += 1;
                warn!("Attempt {attempt}/{max_retries} failed: {e:?}. Retrying in {delay:?}");
                sleep(delay).await;
                delay *= 2;
            }
            Err(e) => return Err(e),
        }
    }
}
