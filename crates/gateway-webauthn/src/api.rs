//! Raw calls to the gateway's WebAuthn endpoints.
//!
//! One function per endpoint. Responses come back as the untouched envelope;
//! deciding what a `success: false` means is left to the ceremonies.

use gateway_core::{api::ApiResponse, client::ApiConfiguration, ApiError};
use serde::Serialize;

use crate::{
    credentials::PasskeyCredentialView,
    types::{
        CredentialAssertionData, CredentialCreationData, LoginFinishRequest,
        RegistrationFinishRequest,
    },
};

#[derive(Debug, Serialize)]
pub(crate) struct RegistrationBeginRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginBeginRequest<'a> {
    pub username: &'a str,
}

fn with_bearer(
    builder: reqwest::RequestBuilder,
    config: &ApiConfiguration,
) -> reqwest::RequestBuilder {
    match &config.session_token {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    }
}

pub(crate) async fn begin_registration(
    config: &ApiConfiguration,
    request: &RegistrationBeginRequest<'_>,
) -> Result<ApiResponse<CredentialCreationData>, ApiError> {
    let response = config
        .client
        .post(format!(
            "{}/api/webauthn/registration/begin",
            config.base_path
        ))
        .json(request)
        .send()
        .await?;

    ApiResponse::from_response(response).await
}

pub(crate) async fn finish_registration(
    config: &ApiConfiguration,
    request: &RegistrationFinishRequest,
) -> Result<ApiResponse<()>, ApiError> {
    let builder = config
        .client
        .post(format!(
            "{}/api/webauthn/registration/finish",
            config.base_path
        ))
        .json(request);

    let response = with_bearer(builder, config).send().await?;
    ApiResponse::from_response(response).await
}

pub(crate) async fn begin_login(
    config: &ApiConfiguration,
    request: &LoginBeginRequest<'_>,
) -> Result<ApiResponse<CredentialAssertionData>, ApiError> {
    let response = config
        .client
        .post(format!("{}/api/webauthn/login/begin", config.base_path))
        .json(request)
        .send()
        .await?;

    ApiResponse::from_response(response).await
}

pub(crate) async fn finish_login(
    config: &ApiConfiguration,
    request: &LoginFinishRequest,
) -> Result<ApiResponse<()>, ApiError> {
    let response = config
        .client
        .post(format!("{}/api/webauthn/login/finish", config.base_path))
        .json(request)
        .send()
        .await?;

    ApiResponse::from_response(response).await
}

pub(crate) async fn list_credentials(
    config: &ApiConfiguration,
) -> Result<ApiResponse<Vec<PasskeyCredentialView>>, ApiError> {
    let builder = config
        .client
        .get(format!("{}/api/webauthn/credentials", config.base_path));

    let response = with_bearer(builder, config).send().await?;
    ApiResponse::from_response(response).await
}

pub(crate) async fn delete_credential(
    config: &ApiConfiguration,
    id: i32,
) -> Result<ApiResponse<()>, ApiError> {
    let builder = config
        .client
        .delete(format!("{}/api/webauthn/credentials/{id}", config.base_path));

    let response = with_bearer(builder, config).send().await?;
    ApiResponse::from_response(response).await
}
