//! The try-then-substitute policy shared by the operations that must always
//! produce content.

use std::fmt::Display;
use std::future::Future;

use forge_core::enums::TaskKind;

/// Await `call`; on error, log it at `warn` and return `fallback()` instead.
pub async fn with_fallback<T, E, Fut, F>(task: TaskKind, call: Fut, fallback: F) -> T
where
    Fut: Future<Output = Result<T, E>>,
    E: Display,
    F: FnOnce() -> T,
{
    match call.await {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(%task, %error, "substituting fallback content");
            fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn success_skips_fallback() {
        let value = with_fallback(
            TaskKind::IdeaGeneration,
            async { Ok::<_, String>(1) },
            || unreachable!("fallback must not run"),
        )
        .await;
        assert_eq!(value, 1);
    }

    #[tokio::test]
    async fn error_uses_fallback() {
        let value = with_fallback(
            TaskKind::TimelineGeneration,
            async { Err::<u8, _>("boom") },
            || 7,
        )
        .await;
        assert_eq!(value, 7);
    }
}
