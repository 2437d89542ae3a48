use crate::countries::country_registry::normalize_code;
use crate::entities::shipment::{NewShipment, Shipment};
use crate::errors::{Result, ShipmentError};
use crate::pricing::pricing_engine::PricingEngine;
use crate::stores::shipment_store::ShipmentStore;
use log::info;
use std::sync::Arc;

#[derive(Clone)]
pub struct ShipmentService {
    store: Arc<dyn ShipmentStore>,
    pricing_engine: PricingEngine,
}

impl ShipmentService {
    pub fn new(store: Arc<dyn ShipmentStore>, pricing_engine: PricingEngine) -> ShipmentService {
        ShipmentService { store, pricing_engine }
    }

    /// Prices and stores a shipment. Nothing is stored when pricing fails.
    pub async fn create(&self, customer_id: &str, origin: &str, destination: &str, weight: f64) -> Result<Shipment> {
        let price = self.pricing_engine.price_from_weight(weight, origin, destination)?;
        let new_shipment = NewShipment {
            customer_id: customer_id.to_string(),
            origin: normalize_code(origin),
            destination: normalize_code(destination),
            weight,
            price,
        };
        let shipment = self.store.create_shipment(new_shipment).await?;
        info!("Created shipment {} for customer {} priced {}", shipment.shipment_id, customer_id, price);
        Ok(shipment)
    }

    pub async fn find(&self, shipment_id: &str) -> Result<Shipment> {
        self.store.find_shipment(shipment_id).await?
            .ok_or_else(|| ShipmentError::not_found("shipment not found"))
    }

    pub async fn find_customer_shipments(&self, customer_id: &str) -> Result<Vec<Shipment>> {
        Ok(self.store.find_customer_shipments(customer_id).await?)
    }
}
