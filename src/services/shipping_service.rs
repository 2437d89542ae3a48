use crate::entities::customer::Customer;
use crate::entities::shipment::Shipment;
use crate::errors::{Result, ShipmentError};
use crate::services::customer_service::CustomerService;
use crate::services::shipment_service::ShipmentService;
use crate::validator::validator::validate_shipment_order;
use log::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct ShipmentOrder {
    pub name: String,
    pub email: String,
    pub origin: String,
    pub destination: String,
    pub weight: f64,
}

/// Ties customers to priced shipments.
#[derive(Clone)]
pub struct ShippingService {
    customer_service: CustomerService,
    shipment_service: ShipmentService,
}

impl ShippingService {
    pub fn new(customer_service: CustomerService, shipment_service: ShipmentService) -> ShippingService {
        ShippingService { customer_service, shipment_service }
    }

    pub async fn create_shipment(&self, order: &ShipmentOrder) -> Result<Shipment> {
        validate_shipment_order(order)?;
        let customer = self.customer_service.find_or_create(&order.name, &order.email).await?;
        debug!("Shipment order from {} resolved to customer {}", order.email, customer.customer_id);
        self.shipment_service
            .create(&customer.customer_id, &order.origin, &order.destination, order.weight)
            .await
    }

    pub async fn shipment_history(&self, email_address: &str) -> Result<Vec<Shipment>> {
        if email_address.trim().is_empty() {
            return Err(ShipmentError::not_found("invalid email provided"));
        }
        let customer = self.customer_service.find_by_email(email_address).await?;
        self.shipment_service.find_customer_shipments(&customer.customer_id).await
    }

    pub async fn find_shipment(&self, shipment_id: &str) -> Result<Shipment> {
        self.shipment_service.find(shipment_id).await
    }

    pub async fn find_customer(&self, customer_id: &str) -> Result<Customer> {
        self.customer_service.find(customer_id).await
    }

    pub async fn rename_customer(&self, customer_id: &str, customer_name: &str) -> Result<Customer> {
        self.customer_service.update_name(customer_id, customer_name).await
    }
}
