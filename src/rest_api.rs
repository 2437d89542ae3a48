use actix_web::web;

#[cfg(test)]
macro_rules! test_app {
    ($store:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::ThinData(
                    crate::services::shipping_service::tests::shipping_service($store),
                ))
                .app_data(actix_web::web::ThinData(
                    crate::pricing::pricing_engine::tests::pricing_engine(),
                ))
                .configure(crate::rest_api::configure),
        )
    };
}

pub(crate) mod base_api;
pub(crate) mod customer_api;
pub(crate) mod pricing_api;
pub(crate) mod shipment_api;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(base_api::json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(base_api::query_error_handler))
        .service(base_api::welcome)
        .service(shipment_api::create_shipment)
        .service(shipment_api::shipment_history)
        .service(shipment_api::empty_shipment_history)
        .service(shipment_api::get_shipment)
        .service(customer_api::get_customer)
        .service(customer_api::rename_customer)
        .service(pricing_api::get_pricing);
}
