use axum::routing::post;
use axum::Router;

use crate::handlers::migration;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// POST   /migrate      -> submit_migration
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/migrate", post(migration::submit_migration))
}
