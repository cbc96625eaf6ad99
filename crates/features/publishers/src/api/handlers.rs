use super::extract::ApiJson;
use crate::Publishers;
use crate::error::{PublisherError, PublisherErrorExt};
use crate::model::{
    AddDomainRequest, AddPublisherRequest, ErrorResponse, MessageResponse, Publisher,
    UpdateDomainRequest,
};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use plist_derive::api_handler;
use plist_kernel::domain::constants::PUBLISHERS_TAG;
use plist_kernel::server::ApiState;

type Created = (StatusCode, Json<MessageResponse>);

fn slice(state: &ApiState) -> Result<&Publishers, PublisherError> {
    state.try_get_slice::<Publishers>().context("publishers slice")
}

const fn created(message: &'static str) -> Created {
    (StatusCode::CREATED, Json(MessageResponse { message }))
}

#[api_handler(
    get,
    path = "/api/data",
    responses(
        (status = OK, description = "Every publisher with its domains", body = Vec<Publisher>),
        (status = INTERNAL_SERVER_ERROR, description = "Unexpected failure", body = ErrorResponse),
    ),
    tag = PUBLISHERS_TAG,
)]
pub(super) async fn list_handler(
    State(state): State<ApiState>,
) -> Result<Json<Vec<Publisher>>, PublisherError> {
    Ok(Json(slice(&state)?.snapshot()))
}

#[api_handler(
    post,
    path = "/api/addPublisher",
    request_body = AddPublisherRequest,
    responses(
        (status = CREATED, description = "Publisher added", body = MessageResponse),
        (status = CONFLICT, description = "Publisher or one of its domains exists", body = ErrorResponse),
        (status = BAD_REQUEST, description = "Malformed body", body = ErrorResponse),
        (status = NOT_FOUND, description = "Publisher is not added", body = ErrorResponse),
    ),
    tag = PUBLISHERS_TAG,
)]
pub(super) async fn add_publisher_handler(
    State(state): State<ApiState>,
    ApiJson(req): ApiJson<AddPublisherRequest>,
) -> Result<Created, PublisherError> {
    slice(&state)
        .and_then(|publishers| publishers.add_publisher(req.into()))
        .map_err(PublisherError::into_not_added)?;

    Ok(created("Publisher added successfully"))
}

#[api_handler(
    post,
    path = "/api/addDomain",
    request_body = AddDomainRequest,
    responses(
        (status = CREATED, description = "Domain added", body = MessageResponse),
        (status = CONFLICT, description = "Domain exists; `publisher` names its owner", body = ErrorResponse),
        (status = NOT_FOUND, description = "Publisher not found", body = ErrorResponse),
        (status = BAD_REQUEST, description = "Malformed body", body = ErrorResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Unexpected failure", body = ErrorResponse),
    ),
    tag = PUBLISHERS_TAG,
)]
pub(super) async fn add_domain_handler(
    State(state): State<ApiState>,
    ApiJson(req): ApiJson<AddDomainRequest>,
) -> Result<Created, PublisherError> {
    let (publisher_name, domain) = req.into_parts();
    slice(&state)?.add_domain(&publisher_name, domain)?;

    Ok(created("Domain added successfully"))
}

#[api_handler(
    put,
    path = "/api/updateDomain",
    request_body = UpdateDomainRequest,
    responses(
        (status = CREATED, description = "Domain updated", body = MessageResponse),
        (status = CONFLICT, description = "New name is taken; `publisher` names its owner", body = ErrorResponse),
        (status = BAD_REQUEST, description = "No edit or malformed body", body = ErrorResponse),
        (status = NOT_FOUND, description = "Publisher or domain not found", body = ErrorResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Unexpected failure", body = ErrorResponse),
    ),
    tag = PUBLISHERS_TAG,
)]
pub(super) async fn update_domain_handler(
    State(state): State<ApiState>,
    ApiJson(req): ApiJson<UpdateDomainRequest>,
) -> Result<Created, PublisherError> {
    let UpdateDomainRequest { original_domain, input_domain } = req;
    slice(&state)?.update_domain(&original_domain, input_domain)?;

    Ok(created("Domain updated successfully"))
}
