use crate::persistence::dao::DaoError;
use crate::pricing::weight_category::WeightCategory;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShipmentError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("country not found: {0:?}")]
    CountryNotFound(String),

    #[error("weight price not defined {0}")]
    UndefinedWeightPrice(WeightCategory),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    StoreFailure(#[from] DaoError),
}

impl ShipmentError {
    pub fn invalid_input(description: &str) -> Self {
        ShipmentError::InvalidInput(description.to_string())
    }

    pub fn not_found(description: &str) -> Self {
        ShipmentError::NotFound(description.to_string())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ShipmentError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, ShipmentError>;
