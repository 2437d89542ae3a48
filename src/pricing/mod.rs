pub(crate) mod pricing_engine;
pub(crate) mod weight_category;
