use crate::errors::{Result, ShipmentError};
use crate::services::shipping_service::ShipmentOrder;

pub fn validate_shipment_order(order: &ShipmentOrder) -> Result<()> {
    require("name", &order.name)?;
    require("email", &order.email)?;
    require("origin", &order.origin)?;
    require("destination", &order.destination)?;
    if !order.weight.is_finite() {
        return Err(ShipmentError::invalid_input("weight must be a finite number"));
    }
    Ok(())
}

pub fn require(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ShipmentError::InvalidInput(format!("{} is required", field_name)));
    }
    Ok(())
}
