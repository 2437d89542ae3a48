pub const APPLICATION_JSON: &str = "application/json";

pub const HOME_COUNTRY_CODE: &str = "se";

pub const BUNDLED_COUNTRIES: &str = include_str!("../resources/countries.json");

pub const WELCOME_MESSAGE: &str = "Welcome to Shipments API service";
