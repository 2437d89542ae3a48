pub(crate) mod country_registry;
