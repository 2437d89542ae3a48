use crate::config::ShipmentsConfig;
use crate::persistence::dao::Dao;
use crate::pricing::pricing_engine::PricingEngine;
use crate::services::customer_service::CustomerService;
use crate::services::shipment_service::ShipmentService;
use crate::services::shipping_service::ShippingService;
use crate::stores::postgres_store::PostgresStore;

use actix_web::{middleware, web::ThinData, App, HttpServer};
use confik::{Configuration as _, EnvSource};
use std::io;
use std::sync::Arc;
use tokio_postgres::NoTls;

use dotenv::dotenv;
use env_logger::Env;
use log::info;

mod constants;

mod rest_api;

mod config;
mod converters;
mod countries;
mod dtos;
mod entities;
mod errors;
mod persistence;
mod pricing;
mod services;
mod stores;
mod validator;

#[actix_rt::main]
async fn main() -> io::Result<()> {
    dotenv().ok();

    let config = match ShipmentsConfig::builder()
        .override_with(EnvSource::new())
        .try_build() {
        Ok(config) => config,
        Err(build_error) => panic!("Could not create ShipmentsConfig: {}", build_error),
    };

    env_logger::init_from_env(Env::default().default_filter_or(config.log_level.clone()));

    let country_registry = match config.load_country_registry() {
        Ok(country_registry) => country_registry,
        Err(registry_error) => panic!("Could not load country dataset: {:#}", registry_error),
    };
    info!("Loaded {} countries", country_registry.len());

    let pool = match config.pg.create_pool(None, NoTls) {
        Ok(pool) => pool,
        Err(pool_error) => panic!("Could not create database connection pool: {}", pool_error),
    };
    let dao = Dao::new(pool);
    if let Err(dao_error) = dao.migrate().await {
        panic!("Could not prepare database schema: {}", dao_error);
    }

    let pricing_engine = PricingEngine::new(Arc::new(country_registry));
    let store = Arc::new(PostgresStore::new(dao));
    let shipping_service = ShippingService::new(
        CustomerService::new(store.clone()),
        ShipmentService::new(store, pricing_engine.clone()),
    );

    info!("Starting server on {}", config.server_addr);
    HttpServer::new(move || {
        App::new()
            .app_data(ThinData(shipping_service.clone()))
            .app_data(ThinData(pricing_engine.clone()))
            .wrap(middleware::Logger::default())
            .configure(rest_api::configure)
         })
        .bind(config.server_addr)?
        .run()
        .await
}
