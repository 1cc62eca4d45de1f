//! Load deadlines.

use std::future::Future;
use std::time::Duration;

use crate::view::ViewLoadError;

/// Run a view load, failing with `TimedOut` if it outlives `deadline`.
///
/// A zero deadline disables the limit.
pub async fn with_deadline<F, T>(
    component: &str,
    deadline: Duration,
    load: F,
) -> Result<T, ViewLoadError>
where
    F: Future<Output = Result<T, ViewLoadError>>,
{
    if deadline.is_zero() {
        return load.await;
    }

    match tokio::time::timeout(deadline, load).await {
        Ok(result) => result,
        Err(_) => Err(ViewLoadError::TimedOut {
            component: component.to_string(),
            after: deadline,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_completes_within_deadline() {
        let result = with_deadline("HomeView", Duration::from_millis(200), async {
            Ok::<_, ViewLoadError>(7)
        })
        .await;
        assert_eq!(result, Ok(7));
    }

    #[tokio::test]
    async fn test_times_out() {
        let result = with_deadline("GitView", Duration::from_millis(20), async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Ok::<_, ViewLoadError>(())
        })
        .await;
        assert!(matches!(result, Err(ViewLoadError::TimedOut { ref component, .. }) if component == "GitView"));
    }
}
