use crate::constants::APPLICATION_JSON;
use crate::dtos::customer::CustomerNameUpdate;
use crate::rest_api::base_api::log_error_and_respond;
use crate::services::shipping_service::ShippingService;
use actix_web::web::{Json, Path, ThinData};
use actix_web::{get, put, HttpResponse};
use log::info;

#[get("/customers/{customer_id}")]
pub async fn get_customer(shipping_service: ThinData<ShippingService>,
                          customer_id: Path<(String,)>) -> HttpResponse {
    let customer_id = customer_id.0.as_str();
    info!("get_customer called for {customer_id}");
    match shipping_service.find_customer(customer_id).await {
        Ok(customer) => HttpResponse::Ok()
            .content_type(APPLICATION_JSON)
            .json(customer.to_rest_api_customer()),
        Err(customer_error) => log_error_and_respond(customer_error),
    }
}

#[put("/customers/{customer_id}")]
pub async fn rename_customer(shipping_service: ThinData<ShippingService>,
                             customer_id: Path<(String,)>,
                             name_update: Json<CustomerNameUpdate>) -> HttpResponse {
    let customer_id = customer_id.0.as_str();
    info!("rename_customer called for {customer_id}");
    match shipping_service.rename_customer(customer_id, &name_update.name).await {
        Ok(customer) => HttpResponse::Ok()
            .content_type(APPLICATION_JSON)
            .json(customer.to_rest_api_customer()),
        Err(customer_error) => log_error_and_respond(customer_error),
    }
}

#[cfg(test)]
mod tests {
    use crate::stores::customer_store::CustomerStore;
    use crate::stores::memory_store::MemoryStore;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use serde_json::{json, Value};
    use std::sync::Arc;

    #[actix_rt::test]
    async fn customer_is_renamed_and_read_back() {
        let store = Arc::new(MemoryStore::new());
        let customer = store.create_customer("Ada", "ada@example.com").await.unwrap();
        let app = test_app!(store).await;
        let uri = format!("/customers/{}", customer.customer_id);

        let req = actix_test::TestRequest::put().uri(&uri)
            .set_json(json!({"name": "Ada King"}))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = actix_test::TestRequest::get().uri(&uri).to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body, json!({
            "id": customer.customer_id,
            "name": "Ada King",
            "email": "ada@example.com",
        }));
    }

    #[actix_rt::test]
    async fn blank_name_is_bad_request_and_unknown_customer_is_not_found() {
        let store = Arc::new(MemoryStore::new());
        let customer = store.create_customer("Ada", "ada@example.com").await.unwrap();
        let app = test_app!(store).await;

        let req = actix_test::TestRequest::put().uri(&format!("/customers/{}", customer.customer_id))
            .set_json(json!({"name": " "}))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body, json!({"success": false, "error": "name is required"}));

        let req = actix_test::TestRequest::put().uri("/customers/nobody")
            .set_json(json!({"name": "Ada"}))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = actix_test::TestRequest::get().uri("/customers/nobody").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
