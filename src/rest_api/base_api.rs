use crate::constants::{APPLICATION_JSON, WELCOME_MESSAGE};
use crate::dtos::base::{ErrorResponse, Welcome};
use crate::errors::ShipmentError;
use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{get, HttpRequest, HttpResponse};
use log::{error, info};

#[get("/")]
pub async fn welcome() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(APPLICATION_JSON)
        .json(Welcome { message: WELCOME_MESSAGE.to_string() })
}

pub fn status_for(shipment_error: &ShipmentError) -> StatusCode {
    if shipment_error.is_not_found() {
        return StatusCode::NOT_FOUND;
    }
    StatusCode::BAD_REQUEST
}

pub fn log_error_and_respond(shipment_error: ShipmentError) -> HttpResponse {
    match shipment_error {
        ShipmentError::StoreFailure(ref dao_error) => error!("DaoError: {}", dao_error),
        ref other => info!("Request rejected: {}", other),
    }
    error_response(status_for(&shipment_error), shipment_error.to_string())
}

pub fn error_response(status: StatusCode, error: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(APPLICATION_JSON)
        .json(ErrorResponse::new(error))
}

pub fn json_error_handler(payload_error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = error_response(StatusCode::BAD_REQUEST, payload_error.to_string());
    InternalError::from_response(payload_error, response).into()
}

pub fn query_error_handler(query_error: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = error_response(StatusCode::BAD_REQUEST, query_error.to_string());
    InternalError::from_response(query_error, response).into()
}
