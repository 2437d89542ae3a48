use serde::{Deserialize, Serialize};

/// Body of `POST /new`. Fields are optional here so that missing ones are
/// reported by name instead of as a JSON error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShipmentRequest {
    pub name: String,
    pub email: String,
    pub origin: String,
    pub destination: String,
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentCreated {
    pub success: bool,
    pub reference: String,
    pub customer_id: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: String,
    pub customer_id: String,
    pub origin: String,
    pub destination: String,
    pub weight: f64,
    pub price: f64,
}
