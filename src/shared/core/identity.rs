// Identity resolution for incoming requests.
//
// Purpose
// - Decide who the request acts as before any handler runs.
//
// Boundaries
// - This is a development stub, not a security design: there is no credential
//   verification. The resolved user id comes from `AppState` and defaults to
//   the seeded test user. Any real deployment must replace this extractor
//   with one that verifies a token against an auth backend.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::modules::users::core::User;
use crate::shared::core::envelope::ApiError;
use crate::shell::state::AppState;

/// User id the stub resolves when none is configured.
pub const DEV_USER_ID: &str = "1";

/// The user the current request acts as.
///
/// Handlers take this as an extractor argument; requests fail with 401 before
/// the handler body runs when the configured id does not resolve to a user.
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = state
            .users
            .find_by_id(&state.current_user_id)
            .await
            .ok_or(ApiError::Unauthorized)?;
        Ok(Self(user))
    }
}
