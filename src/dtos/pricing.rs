use crate::pricing::weight_category::WeightCategory;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct PricingQuery {
    pub weight: f64,
    pub origin: String,
    pub destination: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pricing {
    pub weight: f64,
    pub origin: String,
    pub destination: String,
    pub weight_category: WeightCategory,
    pub price: f64,
}
