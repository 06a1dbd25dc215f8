use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument, warn};

use crate::{
    auth::extractors::AuthUser,
    details::{
        dto::{DetailsRequest, DetailsResponse},
        repo::UserDetails,
    },
    error::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/protected", post(upsert_details))
}

/// Create-or-update the contact details for the authenticated user.
#[instrument(skip(state, payload))]
pub async fn upsert_details(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<DetailsRequest>,
) -> Result<Json<DetailsResponse>, ApiError> {
    let errors = payload.validate();
    if !errors.is_empty() {
        warn!(?errors, "details validation failed");
        return Err(ApiError::Validation(errors));
    }

    let details = match UserDetails::find_by_user(&state.db, user_id).await? {
        None => {
            UserDetails::insert(
                &state.db,
                user_id,
                &payload.phone,
                &payload.address,
                &payload.email,
            )
            .await?
        }
        Some(_) => {
            UserDetails::update(
                &state.db,
                user_id,
                &payload.phone,
                &payload.address,
                &payload.email,
            )
            .await?
        }
    };

    info!(user_id = %user_id, details_id = %details.id, "user details saved");
    Ok(Json(DetailsResponse {
        message: "User details saved successfully",
        details,
    }))
}
