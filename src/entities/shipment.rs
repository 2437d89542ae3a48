#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shipment {
    pub shipment_id: String,
    pub customer_id: String,
    pub origin: String,
    pub destination: String,
    pub weight: f64,
    pub price: f64,
}

/// A priced shipment that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShipment {
    pub customer_id: String,
    pub origin: String,
    pub destination: String,
    pub weight: f64,
    pub price: f64,
}

impl NewShipment {
    pub fn into_shipment(self, shipment_id: String) -> Shipment {
        Shipment {
            shipment_id,
            customer_id: self.customer_id,
            origin: self.origin,
            destination: self.destination,
            weight: self.weight,
            price: self.price,
        }
    }
}
