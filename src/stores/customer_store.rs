use crate::entities::customer::Customer;
use crate::persistence::dao::DaoError;
use async_trait::async_trait;

/// Customer persistence capability. Lookups report absence as `Ok(None)`,
/// never as an error.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    async fn create_customer(&self, customer_name: &str, email_address: &str) -> Result<Customer, DaoError>;

    async fn find_customer(&self, customer_id: &str) -> Result<Option<Customer>, DaoError>;

    async fn find_customer_by_email(&self, email_address: &str) -> Result<Option<Customer>, DaoError>;

    /// Returns false when no customer has the given id.
    async fn update_customer_name(&self, customer_id: &str, customer_name: &str) -> Result<bool, DaoError>;
}
