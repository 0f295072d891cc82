//! Route handlers
//!
//! Each handler maps failures to the body and status the dashboard frontend
//! expects for that route.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri};
use chrono::Utc;
use log::warn;
use serde::Deserialize;
use serde_json::{Value, json};

use super::AppState;
use super::auth::BearerToken;
use super::error::AppError;
use crate::client::Organization;
use crate::error::{ApiError, Error};
use crate::usage::{
    MemberStatisticsResponse, OrganizationReport, UserSummary, build_member_statistics,
    build_organization_report, build_user_summary,
};

/// Body of the OAuth callback
#[derive(Debug, Default, Deserialize)]
pub struct CallbackRequest {
    #[serde(default)]
    pub code: String,
}

/// `GET /` - service banner
pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "GitHub Copilot Dashboard API",
        "status": "running",
        "endpoints": {
            "auth": "/api/auth/github/callback",
            "user": "/api/github/user",
            "organizations": "/api/github/orgs",
            "orgMembers": "/api/github/copilot/org/:orgName/members",
            "userCopilot": "/api/github/copilot/user/:username",
            "organizationMembers": "/api/github/organization/members",
        },
    }))
}

/// `POST /api/auth/github/callback` - exchange an OAuth code and verify the token
pub async fn oauth_callback(
    State(state): State<AppState>,
    body: Result<Json<CallbackRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let request = match body {
        Ok(Json(request)) => request,
        // No JSON body at all: exchange an empty code
        Err(JsonRejection::MissingJsonContentType(_)) => CallbackRequest::default(),
        Err(rejection) => return Err(Error::InvalidBody(rejection.body_text()).into()),
    };

    let access_token = match state.api.exchange_oauth_code(&request.code).await {
        Ok(token) => token,
        Err(Error::Api(ApiError::OAuth(body))) => {
            return Err(AppError::new(StatusCode::BAD_REQUEST, body));
        }
        Err(err) => {
            warn!("OAuth code exchange failed: {}", err);
            return Err(AppError::message(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to exchange code for token",
            ));
        }
    };

    match state.api.get_authenticated_user(&access_token).await {
        Ok(user) => Ok(Json(json!({ "access_token": access_token, "user": user }))),
        Err(err) => {
            warn!("Token verification failed: {}", err);
            Err(AppError::message(
                StatusCode::UNAUTHORIZED,
                "Token verification failed",
            ))
        }
    }
}

/// `GET /api/github/user` - the token owner's profile
pub async fn user(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<Json<Value>, AppError> {
    state
        .api
        .get_authenticated_user(token.as_str())
        .await
        .map(Json)
        .map_err(|_| AppError::message(StatusCode::UNAUTHORIZED, "Failed to fetch user data"))
}

/// `GET /api/github/orgs` - the token owner's organizations
pub async fn orgs(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<Json<Vec<Organization>>, AppError> {
    state
        .api
        .list_user_orgs(token.as_str())
        .await
        .map(Json)
        .map_err(|_| {
            AppError::message(StatusCode::UNAUTHORIZED, "Failed to fetch organizations")
        })
}

/// `GET /api/github/copilot/org/:org_name/members` - organization usage report
pub async fn org_members(
    State(state): State<AppState>,
    token: BearerToken,
    Path(org_name): Path<String>,
) -> Result<Json<OrganizationReport>, AppError> {
    build_organization_report(
        state.api.as_ref(),
        &org_name,
        token.as_str(),
        state.member_concurrency,
    )
    .await
    .map(Json)
    .map_err(|err| AppError::with_details("Failed to fetch organization data", &err))
}

/// `GET /api/github/copilot/user/:username` - single user usage summary
pub async fn user_usage(
    State(state): State<AppState>,
    token: BearerToken,
    Path(username): Path<String>,
) -> Result<Json<UserSummary>, AppError> {
    let today = Utc::now().date_naive();
    build_user_summary(state.api.as_ref(), &username, token.as_str(), today)
        .await
        .map(Json)
        .map_err(|err| AppError::with_details("Failed to fetch user data", &err))
}

/// `GET /api/github/organization/members` - statistics for the first organization
pub async fn organization_members(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<Json<MemberStatisticsResponse>, AppError> {
    build_member_statistics(state.api.as_ref(), token.as_str(), state.member_concurrency)
        .await
        .map(Json)
        .map_err(|err| AppError::with_details("Failed to fetch organization data", &err))
}

/// Fallback for unmatched routes
pub async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(&uri.to_string())
}
