use crate::entities::shipment::{NewShipment, Shipment};
use crate::persistence::dao::{gen_dao_error, DaoError, DaoTransaction};
use tokio_postgres::Row;
use uuid::Uuid;

impl<'b> DaoTransaction<'b> {
    pub async fn save_shipment(&self, new_shipment: NewShipment) -> Result<Shipment, DaoError> {
        let shipment_id = Uuid::new_v4().to_string();
        let row_count = self.transaction.execute(
            "INSERT INTO shipments \
            (id, customer_id, origin, destination, weight, price) \
            VALUES ($1, $2, $3, $4, $5, $6)",
            &[&shipment_id,
                &new_shipment.customer_id,
                &new_shipment.origin,
                &new_shipment.destination,
                &new_shipment.weight,
                &new_shipment.price,
            ]
        ).await
            .map_err(|db_error| gen_dao_error("save_shipment", db_error))?;
        if row_count != 1 {
            return Err(DaoError::ExecuteFailed { description: format!("shipments insert returned {} rows, not 1", row_count) });
        }
        Ok(new_shipment.into_shipment(shipment_id))
    }

    pub async fn get_shipment(&self, shipment_id: &str) -> Result<Option<Shipment>, DaoError> {
        let mut query_string: String = "".to_owned();
        query_string.push_str(SHIPMENT_QUERY);
        query_string.push_str("AND id = $1");
        let rows = self.transaction.query(&query_string, &[&shipment_id]).await
            .map_err(|db_error| gen_dao_error("get_shipment", db_error))?;
        Ok(rows.first().map(convert_row_to_shipment))
    }

    pub async fn get_customer_shipments(&self, customer_id: &str) -> Result<Vec<Shipment>, DaoError> {
        let mut query_string: String = "".to_owned();
        query_string.push_str(SHIPMENT_QUERY);
        query_string.push_str("AND customer_id = $1 ");
        query_string.push_str("ORDER BY created_at, id");
        let rows = self.transaction.query(&query_string, &[&customer_id]).await
            .map_err(|db_error| gen_dao_error("get_customer_shipments", db_error))?;
        Ok(rows.iter().map(convert_row_to_shipment).collect())
    }
}

fn convert_row_to_shipment(row: &Row) -> Shipment {
    Shipment {
        shipment_id: row.get("id"),
        customer_id: row.get("customer_id"),
        origin: row.get("origin"),
        destination: row.get("destination"),
        weight: row.get("weight"),
        price: row.get("price"),
    }
}

const SHIPMENT_QUERY: &str = "\
SELECT id, customer_id, origin, destination, weight, price \
FROM shipments \
WHERE deleted_at IS NULL \
";
