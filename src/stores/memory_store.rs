use crate::entities::customer::Customer;
use crate::entities::shipment::{NewShipment, Shipment};
use crate::persistence::dao::DaoError;
use crate::stores::customer_store::CustomerStore;
use crate::stores::shipment_store::ShipmentStore;
use async_trait::async_trait;
use std::sync::RwLock;
use uuid::Uuid;

/// In-memory stand-in for the postgres tables, with the same unique email constraint.
#[derive(Default)]
pub struct MemoryStore {
    customers: RwLock<Vec<Customer>>,
    shipments: RwLock<Vec<Shipment>>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    pub fn customer_count(&self) -> usize {
        self.customers.read().unwrap().len()
    }

    pub fn shipment_count(&self) -> usize {
        self.shipments.read().unwrap().len()
    }
}

#[async_trait]
impl CustomerStore for MemoryStore {
    async fn create_customer(&self, customer_name: &str, email_address: &str) -> Result<Customer, DaoError> {
        let mut customers = self.customers.write().unwrap();
        if customers.iter().any(|customer| customer.email_address == email_address) {
            return Err(DaoError::UniqueViolation {
                description: format!("customers.email {} already exists", email_address),
            });
        }
        let customer = Customer {
            customer_id: Uuid::new_v4().to_string(),
            customer_name: customer_name.to_string(),
            email_address: email_address.to_string(),
        };
        customers.push(customer.clone());
        Ok(customer)
    }

    async fn find_customer(&self, customer_id: &str) -> Result<Option<Customer>, DaoError> {
        let customers = self.customers.read().unwrap();
        Ok(customers.iter().find(|customer| customer.customer_id == customer_id).cloned())
    }

    async fn find_customer_by_email(&self, email_address: &str) -> Result<Option<Customer>, DaoError> {
        let customers = self.customers.read().unwrap();
        Ok(customers.iter().find(|customer| customer.email_address == email_address).cloned())
    }

    async fn update_customer_name(&self, customer_id: &str, customer_name: &str) -> Result<bool, DaoError> {
        let mut customers = self.customers.write().unwrap();
        match customers.iter_mut().find(|customer| customer.customer_id == customer_id) {
            Some(customer) => {
                customer.customer_name = customer_name.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl ShipmentStore for MemoryStore {
    async fn create_shipment(&self, new_shipment: NewShipment) -> Result<Shipment, DaoError> {
        let shipment = new_shipment.into_shipment(Uuid::new_v4().to_string());
        self.shipments.write().unwrap().push(shipment.clone());
        Ok(shipment)
    }

    async fn find_shipment(&self, shipment_id: &str) -> Result<Option<Shipment>, DaoError> {
        let shipments = self.shipments.read().unwrap();
        Ok(shipments.iter().find(|shipment| shipment.shipment_id == shipment_id).cloned())
    }

    async fn find_customer_shipments(&self, customer_id: &str) -> Result<Vec<Shipment>, DaoError> {
        let shipments = self.shipments.read().unwrap();
        Ok(shipments.iter().filter(|shipment| shipment.customer_id == customer_id).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_shipment(customer_id: &str) -> NewShipment {
        NewShipment {
            customer_id: customer_id.to_string(),
            origin: "se".to_string(),
            destination: "dk".to_string(),
            weight: 250.0,
            price: 2500.0,
        }
    }

    #[actix_rt::test]
    async fn duplicate_email_is_a_unique_violation() {
        let store = MemoryStore::new();
        store.create_customer("Ada", "ada@example.com").await.unwrap();
        let error = store.create_customer("Other Ada", "ada@example.com").await.unwrap_err();
        assert!(matches!(error, DaoError::UniqueViolation { .. }));
        assert_eq!(store.customer_count(), 1);
    }

    #[actix_rt::test]
    async fn customer_shipments_are_filtered_by_customer() {
        let store = MemoryStore::new();
        for _ in 0..5 {
            store.create_shipment(new_shipment("customer-a")).await.unwrap();
        }
        store.create_shipment(new_shipment("customer-b")).await.unwrap();

        assert_eq!(store.find_customer_shipments("customer-a").await.unwrap().len(), 5);
        assert!(store.find_customer_shipments("customer-c").await.unwrap().is_empty());
    }
}
