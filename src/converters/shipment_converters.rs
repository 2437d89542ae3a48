use crate::dtos::shipment::{Shipment, ShipmentCreated, ShipmentRequest};
use crate::entities;
use crate::errors::{Result, ShipmentError};
use crate::services::shipping_service::ShipmentOrder;

impl entities::shipment::Shipment {
    pub fn to_rest_api_shipment(&self) -> Shipment {
        Shipment {
            id: self.shipment_id.clone(),
            customer_id: self.customer_id.clone(),
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            weight: self.weight,
            price: self.price,
        }
    }

    pub fn to_rest_api_shipment_created(&self) -> ShipmentCreated {
        ShipmentCreated {
            success: true,
            reference: self.shipment_id.clone(),
            customer_id: self.customer_id.clone(),
            price: self.price,
        }
    }
}

impl ShipmentRequest {
    pub fn to_shipment_order(&self) -> Result<ShipmentOrder> {
        let weight = self.weight
            .ok_or_else(|| ShipmentError::invalid_input("weight is required"))?;
        Ok(ShipmentOrder {
            name: self.name.clone(),
            email: self.email.clone(),
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            weight,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_weight_is_invalid_input() {
        let request = ShipmentRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            origin: "se".to_string(),
            destination: "dk".to_string(),
            weight: None,
        };
        let error = request.to_shipment_order().unwrap_err();
        assert_eq!(error.to_string(), "weight is required");
    }

    #[test]
    fn history_entries_use_wire_field_names() {
        let shipment = entities::shipment::Shipment {
            shipment_id: "s-1".to_string(),
            customer_id: "c-1".to_string(),
            origin: "se".to_string(),
            destination: "dk".to_string(),
            weight: 12.5,
            price: 450.0,
        };
        let json = serde_json::to_value(shipment.to_rest_api_shipment()).unwrap();
        assert_eq!(json, serde_json::json!({
            "id": "s-1",
            "customer_id": "c-1",
            "origin": "se",
            "destination": "dk",
            "weight": 12.5,
            "price": 450.0,
        }));
    }
}
