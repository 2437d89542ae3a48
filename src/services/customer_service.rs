use crate::entities::customer::Customer;
use crate::errors::{Result, ShipmentError};
use crate::persistence::dao::DaoError;
use crate::stores::customer_store::CustomerStore;
use log::{info, warn};
use std::sync::Arc;

#[derive(Clone)]
pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
}

impl CustomerService {
    pub fn new(store: Arc<dyn CustomerStore>) -> CustomerService {
        CustomerService { store }
    }

    pub async fn create(&self, customer_name: &str, email_address: &str) -> Result<Customer> {
        if email_address.trim().is_empty() {
            return Err(ShipmentError::invalid_input("invalid email for customer"));
        }
        let customer = self.store.create_customer(customer_name, email_address).await?;
        info!("Created customer {}", customer.customer_id);
        Ok(customer)
    }

    /// Returns the customer registered under `email_address`, creating it with
    /// `customer_name` when there is none. A unique violation on create means a
    /// concurrent request won the race, so the stored customer is re-read once.
    pub async fn find_or_create(&self, customer_name: &str, email_address: &str) -> Result<Customer> {
        if let Some(customer) = self.store.find_customer_by_email(email_address).await? {
            return Ok(customer);
        }
        match self.create(customer_name, email_address).await {
            Err(ShipmentError::StoreFailure(DaoError::UniqueViolation { description })) => {
                warn!("Customer {} created concurrently ({}), reusing it", email_address, description);
                self.find_by_email(email_address).await
            }
            result => result,
        }
    }

    pub async fn find(&self, customer_id: &str) -> Result<Customer> {
        self.store.find_customer(customer_id).await?
            .ok_or_else(|| ShipmentError::not_found("customer not found"))
    }

    pub async fn find_by_email(&self, email_address: &str) -> Result<Customer> {
        self.store.find_customer_by_email(email_address).await?
            .ok_or_else(|| ShipmentError::not_found("customer not found"))
    }

    pub async fn update_name(&self, customer_id: &str, customer_name: &str) -> Result<Customer> {
        if customer_name.trim().is_empty() {
            return Err(ShipmentError::invalid_input("name is required"));
        }
        if !self.store.update_customer_name(customer_id, customer_name).await? {
            return Err(ShipmentError::not_found("customer not found"));
        }
        self.find(customer_id).await
    }
}
