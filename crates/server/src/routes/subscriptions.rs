//! Subscription route handlers.

use axum::extract::State;
use serde::Deserialize;
use tracing::instrument;

use homeflame_core::{SubscriptionPlan, UserId};

use super::extract::{ApiJson, ApiPath};
use crate::error::Result;
use crate::models::Subscription;
use crate::response::ApiResponse;
use crate::services::SubscriptionService;
use crate::state::AppState;

/// Subscription request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRequest {
    pub user_id: UserId,
    pub chef_id: UserId,
    pub plan_type: SubscriptionPlan,
}

/// Subscribe a user to a chef.
///
/// POST /api/subscriptions
#[instrument(skip_all)]
pub async fn subscribe(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SubscriptionRequest>,
) -> Result<ApiResponse<Subscription>> {
    let subscription = SubscriptionService::new(state.users(), state.subscriptions())
        .create(req.user_id, req.chef_id, req.plan_type)
        .await?;

    Ok(ApiResponse::success(
        subscription,
        "Subscription created successfully",
    ))
}

/// GET /api/subscriptions/user/{userId}
#[instrument(skip(state))]
pub async fn by_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<UserId>,
) -> Result<ApiResponse<Vec<Subscription>>> {
    let subscriptions = SubscriptionService::new(state.users(), state.subscriptions())
        .list_by_user(user_id)
        .await?;

    Ok(ApiResponse::success(
        subscriptions,
        "Subscriptions retrieved successfully",
    ))
}

/// GET /api/subscriptions/chef/{chefId}
#[instrument(skip(state))]
pub async fn by_chef(
    State(state): State<AppState>,
    ApiPath(chef_id): ApiPath<UserId>,
) -> Result<ApiResponse<Vec<Subscription>>> {
    let subscriptions = SubscriptionService::new(state.users(), state.subscriptions())
        .list_by_chef(chef_id)
        .await?;

    Ok(ApiResponse::success(
        subscriptions,
        "Subscriptions retrieved successfully",
    ))
}
