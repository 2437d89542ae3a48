use crate::constants::HOME_COUNTRY_CODE;
use crate::countries::country_registry::{normalize_code, CountryRegistry};
use crate::errors::{Result, ShipmentError};
use crate::pricing::weight_category::WeightCategory;
use log::debug;
use std::sync::Arc;

pub const HOME_MULTIPLIER: f64 = 1.0;
pub const EU_MULTIPLIER: f64 = 1.5;
pub const INTERNATIONAL_MULTIPLIER: f64 = 2.5;

#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub weight: f64,
    pub origin: String,
    pub destination: String,
    pub weight_category: WeightCategory,
    pub price: f64,
}

#[derive(Clone)]
pub struct PricingEngine {
    countries: Arc<CountryRegistry>,
}

impl PricingEngine {
    pub fn new(countries: Arc<CountryRegistry>) -> PricingEngine {
        PricingEngine { countries }
    }

    pub fn multiplier(&self, origin: &str, destination: &str) -> Result<f64> {
        let origin_in_eu = self.countries.is_eu_member(origin)?;
        let destination_in_eu = self.countries.is_eu_member(destination)?;
        if self.is_home(origin)? && self.is_home(destination)? {
            return Ok(HOME_MULTIPLIER);
        }
        if origin_in_eu && destination_in_eu {
            return Ok(EU_MULTIPLIER);
        }
        Ok(INTERNATIONAL_MULTIPLIER)
    }

    /// Alpha-2 and alpha-3 spellings of the home country both count.
    fn is_home(&self, code: &str) -> Result<bool> {
        let country = self.countries.find(code)?;
        Ok(normalize_code(&country.alpha2) == HOME_COUNTRY_CODE)
    }

    pub fn price_from_weight(&self, weight: f64, origin: &str, destination: &str) -> Result<f64> {
        debug!("price_from_weight weight={} origin={} destination={}", weight, origin, destination);
        self.price_from_category(WeightCategory::from_weight(weight), origin, destination)
    }

    pub fn price_from_category(&self, category: WeightCategory, origin: &str, destination: &str) -> Result<f64> {
        let base_price = category
            .base_price()
            .ok_or(ShipmentError::UndefinedWeightPrice(category))?;
        let multiplier = self.multiplier(origin, destination)?;
        debug!("price_from_category category={} base_price={} multiplier={}", category, base_price, multiplier);
        Ok(base_price * multiplier)
    }

    pub fn quote(&self, weight: f64, origin: &str, destination: &str) -> Result<PriceQuote> {
        let weight_category = WeightCategory::from_weight(weight);
        let price = self.price_from_category(weight_category, origin, destination)?;
        Ok(PriceQuote {
            weight,
            origin: origin.to_string(),
            destination: destination.to_string(),
            weight_category,
            price,
        })
    }
}
