use crate::entities::shipment::{NewShipment, Shipment};
use crate::persistence::dao::DaoError;
use async_trait::async_trait;

#[async_trait]
pub trait ShipmentStore: Send + Sync {
    async fn create_shipment(&self, new_shipment: NewShipment) -> Result<Shipment, DaoError>;

    async fn find_shipment(&self, shipment_id: &str) -> Result<Option<Shipment>, DaoError>;

    async fn find_customer_shipments(&self, customer_id: &str) -> Result<Vec<Shipment>, DaoError>;
}
