use crate::entities::customer::Customer;
use crate::entities::shipment::{NewShipment, Shipment};
use crate::persistence::dao::{Dao, DaoError};
use crate::stores::customer_store::CustomerStore;
use crate::stores::shipment_store::ShipmentStore;
use async_trait::async_trait;

/// Runs every store call in its own transaction. Reads roll back, writes commit.
/// A transaction dropped without commit is rolled back.
#[derive(Clone)]
pub struct PostgresStore {
    dao: Dao,
}

impl PostgresStore {
    pub fn new(dao: Dao) -> PostgresStore {
        PostgresStore { dao }
    }
}

#[async_trait]
impl CustomerStore for PostgresStore {
    async fn create_customer(&self, customer_name: &str, email_address: &str) -> Result<Customer, DaoError> {
        let mut db_connection = self.dao.get_connection().await?;
        let txn = self.dao.begin(&mut db_connection).await?;
        let customer = txn.save_customer(customer_name, email_address).await?;
        txn.commit().await?;
        Ok(customer)
    }

    async fn find_customer(&self, customer_id: &str) -> Result<Option<Customer>, DaoError> {
        let mut db_connection = self.dao.get_connection().await?;
        let txn = self.dao.begin(&mut db_connection).await?;
        let customer = txn.get_customer(customer_id).await?;
        txn.rollback().await?;
        Ok(customer)
    }

    async fn find_customer_by_email(&self, email_address: &str) -> Result<Option<Customer>, DaoError> {
        let mut db_connection = self.dao.get_connection().await?;
        let txn = self.dao.begin(&mut db_connection).await?;
        let customer = txn.get_customer_by_email(email_address).await?;
        txn.rollback().await?;
        Ok(customer)
    }

    async fn update_customer_name(&self, customer_id: &str, customer_name: &str) -> Result<bool, DaoError> {
        let mut db_connection = self.dao.get_connection().await?;
        let txn = self.dao.begin(&mut db_connection).await?;
        let updated = txn.update_customer_name(customer_id, customer_name).await?;
        txn.commit().await?;
        Ok(updated)
    }
}

#[async_trait]
impl ShipmentStore for PostgresStore {
    async fn create_shipment(&self, new_shipment: NewShipment) -> Result<Shipment, DaoError> {
        let mut db_connection = self.dao.get_connection().await?;
        let txn = self.dao.begin(&mut db_connection).await?;
        let shipment = txn.save_shipment(new_shipment).await?;
        txn.commit().await?;
        Ok(shipment)
    }

    async fn find_shipment(&self, shipment_id: &str) -> Result<Option<Shipment>, DaoError> {
        let mut db_connection = self.dao.get_connection().await?;
        let txn = self.dao.begin(&mut db_connection).await?;
        let shipment = txn.get_shipment(shipment_id).await?;
        txn.rollback().await?;
        Ok(shipment)
    }

    async fn find_customer_shipments(&self, customer_id: &str) -> Result<Vec<Shipment>, DaoError> {
        let mut db_connection = self.dao.get_connection().await?;
        let txn = self.dao.begin(&mut db_connection).await?;
        let shipments = txn.get_customer_shipments(customer_id).await?;
        txn.rollback().await?;
        Ok(shipments)
    }
}
