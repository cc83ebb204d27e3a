use reel_core::use_cases::{SyncFilmsUseCase, SyncReport};

/// One scheduled sync run. Failures are logged and swallowed so the next
/// tick still fires.
pub async fn run_sync(use_case: &SyncFilmsUseCase) -> Option<SyncReport> {
    match use_case.execute().await {
        Ok(report) => Some(report),
        Err(e) => {
            tracing::error!(error = %e, "Film catalog sync failed");
            None
        }
    }
}
