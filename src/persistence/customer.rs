use crate::entities::customer::Customer;
use crate::persistence::dao::{gen_dao_error, DaoError, DaoTransaction};
use tokio_postgres::Row;
use uuid::Uuid;

impl<'b> DaoTransaction<'b> {
    pub async fn get_customer(&self, customer_id: &str) -> Result<Option<Customer>, DaoError> {
        let mut query_string: String = "".to_owned();
        query_string.push_str(CUSTOMER_QUERY);
        query_string.push_str("AND id = $1");
        let rows = self.transaction.query(&query_string, &[&customer_id]).await
            .map_err(|db_error| gen_dao_error("get_customer", db_error))?;
        Ok(rows.first().map(convert_row_to_customer))
    }

    pub async fn get_customer_by_email(&self, email_address: &str) -> Result<Option<Customer>, DaoError> {
        let mut query_string: String = "".to_owned();
        query_string.push_str(CUSTOMER_QUERY);
        query_string.push_str("AND email = $1");
        let rows = self.transaction.query(&query_string, &[&email_address]).await
            .map_err(|db_error| gen_dao_error("get_customer_by_email", db_error))?;
        if rows.len() > 1 {
            return Err(DaoError::QueryFailed {
                description: format!("get_customer_by_email got {} rows, expected at most 1", rows.len()),
            });
        }
        Ok(rows.first().map(convert_row_to_customer))
    }

    pub async fn save_customer(&self, customer_name: &str, email_address: &str) -> Result<Customer, DaoError> {
        let customer_id = Uuid::new_v4().to_string();
        let row_count = self.transaction.execute(
            "INSERT INTO customers \
            (id, name, email) \
            VALUES ($1, $2, $3)",
            &[&customer_id,
                &customer_name,
                &email_address,
            ]
        ).await
            .map_err(|db_error| gen_dao_error("save_customer", db_error))?;
        if row_count != 1 {
            return Err(DaoError::ExecuteFailed { description: format!("customers insert returned {} rows, not 1", row_count) });
        }
        Ok(Customer {
            customer_id,
            customer_name: customer_name.to_string(),
            email_address: email_address.to_string(),
        })
    }

    pub async fn update_customer_name(&self, customer_id: &str, customer_name: &str) -> Result<bool, DaoError> {
        let row_count = self.transaction.execute(
            "UPDATE customers \
            SET name = $1, updated_at = now() \
            WHERE id = $2 AND deleted_at IS NULL",
            &[&customer_name,
                &customer_id,
            ]
        ).await
            .map_err(|db_error| gen_dao_error("update_customer_name", db_error))?;
        Ok(row_count == 1)
    }
}

fn convert_row_to_customer(row: &Row) -> Customer {
    Customer {
        customer_id: row.get("id"),
        customer_name: row.get("name"),
        email_address: row.get("email"),
    }
}

const CUSTOMER_QUERY: &str = "\
SELECT id, name, email \
FROM customers \
WHERE deleted_at IS NULL \
";
