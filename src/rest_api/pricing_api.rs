use crate::constants::APPLICATION_JSON;
use crate::dtos::pricing::PricingQuery;
use crate::pricing::pricing_engine::PricingEngine;
use crate::rest_api::base_api::log_error_and_respond;
use actix_web::web::{Query, ThinData};
use actix_web::{get, HttpResponse};
use log::info;

#[get("/pricing")]
pub async fn get_pricing(pricing_engine: ThinData<PricingEngine>,
                         pricing_query: Query<PricingQuery>) -> HttpResponse {
    info!("get_pricing called for {} kg {} -> {}", pricing_query.weight, pricing_query.origin, pricing_query.destination);
    let quote = match pricing_engine.quote(pricing_query.weight, &pricing_query.origin, &pricing_query.destination) {
        Ok(x) => x,
        Err(pricing_error) => return log_error_and_respond(pricing_error),
    };
    HttpResponse::Ok()
        .content_type(APPLICATION_JSON)
        .json(quote.to_rest_api_pricing())
}

#[cfg(test)]
mod tests {
    use crate::stores::memory_store::MemoryStore;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use serde_json::{json, Value};
    use std::sync::Arc;

    async fn get(uri: &str) -> (StatusCode, Value) {
        let app = test_app!(Arc::new(MemoryStore::new())).await;
        let req = actix_test::TestRequest::get().uri(uri).to_request();
        let resp = actix_test::call_service(&app, req).await;
        let status = resp.status();
        (status, actix_test::read_body_json(resp).await)
    }

    #[actix_rt::test]
    async fn quotes_price_and_category() {
        let (status, body) = get("/pricing?weight=45&origin=us&destination=se").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({
            "weight": 45.0,
            "origin": "us",
            "destination": "se",
            "weight_category": "large",
            "price": 1250.0,
        }));
    }

    #[actix_rt::test]
    async fn unpriced_weight_is_bad_request() {
        let (status, body) = get("/pricing?weight=5000&origin=se&destination=dk").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "weight price not defined unknown");
    }

    #[actix_rt::test]
    async fn unknown_country_is_bad_request() {
        let (status, body) = get("/pricing?weight=5&origin=xx&destination=dk").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[actix_rt::test]
    async fn malformed_query_uses_the_error_envelope() {
        for uri in ["/pricing?weight=heavy&origin=se&destination=dk", "/pricing?weight=5&origin=se"] {
            let (status, body) = get(uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            assert_eq!(body["success"], false, "{}", uri);
            assert!(body["error"].is_string(), "{}", uri);
        }
    }
}
