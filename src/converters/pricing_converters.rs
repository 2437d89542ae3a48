use crate::dtos::pricing::Pricing;
use crate::pricing::pricing_engine::PriceQuote;

impl PriceQuote {
    pub fn to_rest_api_pricing(&self) -> Pricing {
        Pricing {
            weight: self.weight,
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            weight_category: self.weight_category,
            price: self.price,
        }
    }
}
