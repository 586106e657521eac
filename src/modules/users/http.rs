use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Deserializer};
use serde_json::json;

use crate::modules::users::core::{UserChanges, validate_changes};
use crate::shared::core::envelope::{ApiError, ApiResult};
use crate::shared::core::identity::CurrentUser;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateProfileBody {
    pub name: Option<String>,
    // Distinguishes "bio": null (clear it) from the field being absent.
    #[serde(default, deserialize_with = "nullable_field")]
    pub bio: Option<Option<String>>,
}

fn nullable_field<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl UpdateProfileBody {
    fn into_changes(self) -> UserChanges {
        UserChanges {
            name: self.name,
            bio: self.bio,
        }
    }
}

/// GET /profile
pub async fn get_profile(CurrentUser(user): CurrentUser) -> ApiResult<Response> {
    Ok(Json(json!({ "user": user })).into_response())
}

/// PUT /profile
pub async fn update_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    body: Result<Json<UpdateProfileBody>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(body) = body.map_err(|_| ApiError::BadRequest("Invalid request body".to_string()))?;
    let changes =
        validate_changes(body.into_changes()).map_err(|e| ApiError::Validation(e.to_string()))?;
    let updated = state
        .users
        .update(&user.id, changes)
        .await
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;
    Ok(Json(json!({ "user": updated })).into_response())
}
