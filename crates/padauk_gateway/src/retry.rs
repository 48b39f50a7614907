//! Classified retry around the upstream stream acquisition.

use padauk_error::{ErrorClass, PadaukError, PadaukResult};
use padauk_interface::{ChunkStream, Streaming};
use padauk_rate_limit::BackoffPolicy;
use tokio_retry2::{Retry, RetryError};
use tracing::warn;

/// Open an upstream translation stream, retrying transient failures.
///
/// The first attempt doubles as classification: its error selects the
/// backoff curve (long multiplier for throttling/overload, short for the
/// rest). Fatal errors (auth, bad request) propagate immediately without
/// consuming any retry budget. Total attempts are bounded by
/// `1 + policy.max_retries()`.
pub(crate) async fn stream_with_retry(
    driver: &dyn Streaming,
    prompt: &str,
    policy: &BackoffPolicy,
) -> PadaukResult<ChunkStream> {
    let first_error = match driver.translate_stream(prompt).await {
        Ok(stream) => return Ok(stream),
        Err(e) => e,
    };

    let class = first_error.upstream_class();
    if class == ErrorClass::Fatal {
        warn!(error = %first_error, "Permanent upstream error, failing immediately");
        return Err(first_error);
    }

    if policy.max_retries() == 0 {
        return Err(first_error);
    }

    warn!(
        error = %first_error,
        class = %class,
        max_retries = policy.max_retries(),
        "Upstream call failed, will retry with classified backoff"
    );

    // The schedule yields one delay per remaining attempt; consuming the
    // first here keeps the spacing between attempt N and N+1 on the curve,
    // since Retry::spawn fires its initial attempt without delay.
    let mut schedule = policy.schedule(class);
    if let Some(first_delay) = schedule.next() {
        tokio::time::sleep(first_delay).await;
    }

    Retry::spawn(schedule, || async move {
        driver.translate_stream(prompt).await.map_err(classify_for_retry)
    })
    .await
}

/// Map an error into tokio-retry2's transient/permanent split.
fn classify_for_retry(error: PadaukError) -> RetryError<PadaukError> {
    if error.upstream_class() == ErrorClass::Fatal {
        warn!(error = %error, "Permanent upstream error, failing immediately");
        RetryError::Permanent(error)
    } else {
        warn!(error = %error, "Upstream call failed, will retry");
        RetryError::Transient {
            err: error,
            retry_after: None,
        }
    }
}
