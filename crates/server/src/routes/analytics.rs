//! Analytics route handlers.

use axum::extract::State;
use tracing::instrument;

use homeflame_core::UserId;

use super::extract::ApiPath;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::services::{AdminSummary, AnalyticsService, ChefAnalytics};
use crate::state::AppState;

/// GET /api/chef/analytics/{chefId}
#[instrument(skip(state))]
pub async fn chef_analytics(
    State(state): State<AppState>,
    ApiPath(chef_id): ApiPath<UserId>,
) -> Result<ApiResponse<ChefAnalytics>> {
    let analytics = AnalyticsService::new(state.subscriptions())
        .chef_analytics(chef_id)
        .await?;

    Ok(ApiResponse::success(
        analytics,
        "Chef analytics retrieved successfully",
    ))
}

/// GET /api/admin/reports/summary
#[instrument(skip_all)]
pub async fn admin_summary(State(state): State<AppState>) -> Result<ApiResponse<AdminSummary>> {
    let summary = AnalyticsService::new(state.subscriptions())
        .admin_summary()
        .await?;

    Ok(ApiResponse::success(
        summary,
        "Admin report summary retrieved successfully",
    ))
}
