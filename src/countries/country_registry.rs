use crate::constants::BUNDLED_COUNTRIES;
use crate::errors::{Result, ShipmentError};
use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Country {
    pub alpha2: String,
    #[serde(default)]
    pub alpha3: Option<String>,
    pub name: String,
    pub eu_member: bool,
}

/// Read-only ISO 3166-1 reference table. A country is found by its alpha-2
/// or alpha-3 code, compared in lower case.
#[derive(Debug, Clone, Default)]
pub struct CountryRegistry {
    countries: Vec<Country>,
    by_code: HashMap<String, usize>,
}

impl CountryRegistry {
    pub fn new(countries: Vec<Country>) -> CountryRegistry {
        let mut by_code = HashMap::new();
        for (index, country) in countries.iter().enumerate() {
            by_code.insert(normalize_code(&country.alpha2), index);
            if let Some(alpha3) = &country.alpha3 {
                by_code.insert(normalize_code(alpha3), index);
            }
        }
        CountryRegistry { countries, by_code }
    }

    pub fn bundled() -> anyhow::Result<CountryRegistry> {
        Self::from_json(BUNDLED_COUNTRIES)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<CountryRegistry> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("could not read country dataset {}", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("could not load country dataset {}", path.display()))
    }

    pub fn from_json(json: &str) -> anyhow::Result<CountryRegistry> {
        let countries: Vec<Country> =
            serde_json::from_str(json).context("country dataset is not a JSON list of countries")?;
        for country in &countries {
            if !is_alpha_code(&country.alpha2, 2) {
                bail!("country {} has an invalid alpha-2 code {:?}", country.name, country.alpha2);
            }
            if let Some(alpha3) = country.alpha3.as_deref().filter(|alpha3| !is_alpha_code(alpha3, 3)) {
                bail!("country {} has an invalid alpha-3 code {:?}", country.name, alpha3);
            }
        }
        Ok(Self::new(countries))
    }

    pub fn find(&self, code: &str) -> Result<&Country> {
        self.by_code
            .get(&normalize_code(code))
            .map(|&index| &self.countries[index])
            .ok_or_else(|| ShipmentError::CountryNotFound(code.to_string()))
    }

    pub fn is_eu_member(&self, code: &str) -> Result<bool> {
        Ok(self.find(code)?.eu_member)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }
}

pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_lowercase()
}

fn is_alpha_code(code: &str, length: usize) -> bool {
    let code = normalize_code(code);
    code.len() == length && code.chars().all(|c| c.is_ascii_alphabetic())
}
