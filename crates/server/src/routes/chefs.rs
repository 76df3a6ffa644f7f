//! Chef directory route handlers.

use axum::extract::State;
use tracing::instrument;

use homeflame_core::UserId;

use super::extract::ApiPath;
use crate::error::Result;
use crate::models::Chef;
use crate::response::ApiResponse;
use crate::services::ChefDirectory;
use crate::state::AppState;

/// GET /api/chefs
#[instrument(skip_all)]
pub async fn list_chefs(State(state): State<AppState>) -> Result<ApiResponse<Vec<Chef>>> {
    let chefs = ChefDirectory::new(state.users()).list().await?;
    Ok(ApiResponse::success(chefs, "Chefs retrieved successfully"))
}

/// GET /api/chefs/{chefId}
#[instrument(skip(state))]
pub async fn get_chef(
    State(state): State<AppState>,
    ApiPath(chef_id): ApiPath<UserId>,
) -> Result<ApiResponse<Chef>> {
    let chef = ChefDirectory::new(state.users()).get(chef_id).await?;
    Ok(ApiResponse::success(chef, "Chef retrieved successfully"))
}
