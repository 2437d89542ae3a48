use crate::constants::APPLICATION_JSON;
use crate::dtos::shipment::{Shipment, ShipmentRequest};
use crate::errors::ShipmentError;
use crate::rest_api::base_api::log_error_and_respond;
use crate::services::shipping_service::ShippingService;
use actix_web::web::{Json, Path, ThinData};
use actix_web::{get, post, HttpResponse};
use log::info;

#[post("/new")]
pub async fn create_shipment(shipping_service: ThinData<ShippingService>,
                             shipment_request: Json<ShipmentRequest>) -> HttpResponse {
    info!("create_shipment called");
    let order = match shipment_request.to_shipment_order() {
        Ok(x) => x,
        Err(request_error) => return log_error_and_respond(request_error),
    };
    let shipment = match shipping_service.create_shipment(&order).await {
        Ok(x) => x,
        Err(shipment_error) => return log_error_and_respond(shipment_error),
    };
    HttpResponse::Created()
        .content_type(APPLICATION_JSON)
        .json(shipment.to_rest_api_shipment_created())
}

#[get("/history/{email}")]
pub async fn shipment_history(shipping_service: ThinData<ShippingService>,
                              email: Path<(String,)>) -> HttpResponse {
    let email = email.0.as_str();
    info!("shipment_history called for {email}");
    let shipments = match shipping_service.shipment_history(email).await {
        Ok(x) => x,
        Err(history_error) => return log_error_and_respond(history_error),
    };
    let api_shipments: Vec<Shipment> = shipments.iter()
        .map(|shipment| shipment.to_rest_api_shipment())
        .collect();
    HttpResponse::Ok()
        .content_type(APPLICATION_JSON)
        .json(api_shipments)
}

#[get("/history/")]
pub async fn empty_shipment_history() -> HttpResponse {
    log_error_and_respond(ShipmentError::not_found("invalid email provided"))
}

#[get("/shipments/{shipment_id}")]
pub async fn get_shipment(shipping_service: ThinData<ShippingService>,
                          shipment_id: Path<(String,)>) -> HttpResponse {
    let shipment_id = shipment_id.0.as_str();
    info!("get_shipment called for {shipment_id}");
    match shipping_service.find_shipment(shipment_id).await {
        Ok(shipment) => HttpResponse::Ok()
            .content_type(APPLICATION_JSON)
            .json(shipment.to_rest_api_shipment()),
        Err(shipment_error) => log_error_and_respond(shipment_error),
    }
}
