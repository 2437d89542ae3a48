use crate::persistence::schema::SCHEMA;
use deadpool_postgres::{Object, Pool, Transaction};
use log::{error, info};
use thiserror::Error;
use tokio_postgres::error::SqlState;

#[derive(Error, Debug)]
pub enum DaoError {
    #[error("could not get a database connection: {description}")]
    PoolFailed { description: String },
    #[error("could not begin transaction: {description}")]
    BeginFailed { description: String },
    #[error("could not commit transaction: {description}")]
    CommitFailed { description: String },
    #[error("could not roll back transaction: {description}")]
    RollbackFailed { description: String },
    #[error("{description}")]
    ExecuteFailed { description: String },
    #[error("{description}")]
    QueryFailed { description: String },
    #[error("duplicate record: {description}")]
    UniqueViolation { description: String },
}

pub fn gen_dao_error(method: &str, db_error: tokio_postgres::Error) -> DaoError {
    error!("{} {}: {}", method, db_error, match db_error.as_db_error() {
        Some(x) => format!("{}", x),
        None => "none".to_string()});
    if db_error.code() == Some(&SqlState::UNIQUE_VIOLATION) {
        return DaoError::UniqueViolation {
            description: db_error.to_string()
        };
    }
    DaoError::ExecuteFailed {
        description: db_error.to_string()
    }
}

#[derive(Clone)]
pub struct Dao {
    pool: Pool,
}

pub struct DaoTransaction<'a> {
    pub transaction: Transaction<'a>
}

impl Dao {
    pub fn new(pool: Pool) -> Dao {
        Dao {
            pool
        }
    }

    pub async fn get_connection(&self) -> Result<Object, DaoError> {
        self.pool.get().await
            .map_err(|pool_error| DaoError::PoolFailed { description: pool_error.to_string() })
    }

    pub async fn begin<'b>(&self, manager: &'b mut Object) -> Result<DaoTransaction<'b>, DaoError> {
        let transaction = manager.build_transaction().start().await
            .map_err(|tx_error| DaoError::BeginFailed { description: tx_error.to_string() })?;
        Ok(DaoTransaction {
            transaction
        })
    }

    /// Creates the customers and shipments tables when they do not exist yet.
    pub async fn migrate(&self) -> Result<(), DaoError> {
        let db_connection = self.get_connection().await?;
        db_connection.batch_execute(SCHEMA).await
            .map_err(|db_error| gen_dao_error("migrate", db_error))?;
        info!("Database schema is up to date");
        Ok(())
    }
}

impl<'b> DaoTransaction<'b> {
    pub async fn commit(self) -> Result<(), DaoError> {
        self.transaction.commit().await
            .map_err(|transaction_error| DaoError::CommitFailed { description: transaction_error.to_string() })
    }

    pub async fn rollback(self) -> Result<(), DaoError> {
        self.transaction.rollback().await
            .map_err(|transaction_error| DaoError::RollbackFailed { description: transaction_error.to_string() })
    }
}
