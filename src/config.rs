use crate::countries::country_registry::CountryRegistry;
use confik::Configuration;
use serde::Deserialize;

#[derive(Debug, Default, Configuration, Clone)]
pub struct ShipmentsConfig {
    pub server_addr: String,
    pub log_level: String,
    /// JSON country dataset replacing the bundled ISO 3166-1 table.
    pub countries_file: Option<String>,
    #[confik(from = DbConfig)]
    pub pg: deadpool_postgres::Config,
}

impl ShipmentsConfig {
    pub fn load_country_registry(&self) -> anyhow::Result<CountryRegistry> {
        match &self.countries_file {
            Some(countries_file) => CountryRegistry::from_file(countries_file),
            None => CountryRegistry::bundled(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct DbConfig(deadpool_postgres::Config);

impl From<DbConfig> for deadpool_postgres::Config {
    fn from(value: DbConfig) -> Self {
        value.0
    }
}

impl confik::Configuration for DbConfig {
    type Builder = Option<Self>;
}
