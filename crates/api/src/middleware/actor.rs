//! Actor resolution for request handlers.
//!
//! Mutating routes record who acted. A valid Bearer token supplies the
//! actor id; a missing or invalid token falls back to the configured
//! system actor, and the fallback is logged so unattributed writes stay
//! visible for audit. This extractor therefore never rejects.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use smartplanning_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::state::AppState;

/// The acting user for a request, resolved from the `Authorization`
/// header with a configured fallback.
///
/// ```ignore
/// async fn my_handler(actor: Actor) -> AppResult<Json<()>> {
///     tracing::info!(actor_id = actor.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    /// The actor's internal database id.
    pub id: DbId,
    /// True when the id came from the system-actor fallback rather than
    /// a presented token.
    pub is_system_fallback: bool,
}

impl FromRequestParts<AppState> for Actor {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));

        if let Some(token) = token {
            match validate_token(token, &state.config.jwt) {
                Ok(claims) => {
                    return Ok(Actor {
                        id: claims.sub,
                        is_system_fallback: false,
                    });
                }
                Err(error) => {
                    tracing::warn!(%error, "invalid bearer token, falling back to system actor");
                }
            }
        } else {
            tracing::warn!(
                actor_id = state.config.default_system_actor_id,
                "request without credentials attributed to the system actor"
            );
        }

        Ok(Actor {
            id: state.config.default_system_actor_id,
            is_system_fallback: true,
        })
    }
}
