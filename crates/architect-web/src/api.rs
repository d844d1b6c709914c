//! REST endpoint handlers.

use architect::api::{ErrorBody, GenerateRequest, GenerateResponse};
use architect::error::GenerateError;
use architect::service::ScenarioService;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{info, warn};

/// Shared application state passed to all handlers via axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub service: ScenarioService,
}

/// Boundary wrapper turning a [`GenerateError`] into the fixed-shape error
/// body. Only the status and the fixed message leave the server.
pub struct ApiError(pub GenerateError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(ErrorBody::new(self.0.user_message()))).into_response()
    }
}

/// `POST /api/generate-scenario`: generate a scenario for a problem.
///
/// Returns 200 with `{"scenario": ...}`, 400 when the problem is missing or
/// blank (or the body is not a JSON object), 500 on any downstream failure.
pub async fn post_generate_scenario(
    State(app): State<AppState>,
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let problem = match body {
        Ok(Json(req)) => req.problem.unwrap_or_default(),
        Err(rejection) => {
            warn!("Unreadable generate request: {rejection}");
            return Err(ApiError(GenerateError::InvalidInput));
        }
    };

    info!("POST /api/generate-scenario ({} chars)", problem.chars().count());

    let scenario = app.service.generate(&problem).await.map_err(ApiError)?;
    Ok(Json(GenerateResponse { scenario }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use architect::scenario::ExtractError;

    #[test]
    fn invalid_input_response_is_400() {
        let resp = ApiError(GenerateError::InvalidInput).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn downstream_failure_response_is_500() {
        let resp = ApiError(GenerateError::MalformedOutput(ExtractError::NoModules)).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let resp = ApiError(GenerateError::ExternalCall("boom".into())).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
