//! Handler for the `/migrate` resource.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use migrator_core::migration::{self, MigrationRequest, MigrationResult};

use crate::error::AppResult;

/// POST /migrate
///
/// Validate the request and return a simulated migration outcome. Missing or
/// blank fields, and payloads that are not the expected JSON object, yield
/// 400 with `status: "rejected"`.
pub async fn submit_migration(
    payload: Result<Json<MigrationRequest>, JsonRejection>,
) -> AppResult<Json<MigrationResult>> {
    let Json(request) = payload.inspect_err(|rejection| {
        tracing::warn!(
            status = %rejection.status(),
            error = %rejection.body_text(),
            "Malformed migration payload"
        );
    })?;

    let result = migration::try_submit_migration(&request).inspect_err(|err| {
        tracing::warn!(fields = ?err.fields(), "Migration request rejected");
    })?;

    tracing::info!(
        dashboard = ?request.dashboard_name,
        message = %result.message,
        "Migration simulated"
    );

    Ok(Json(result))
}
