pub(crate) mod dao;
pub(crate) mod customer;
pub(crate) mod shipment;
pub(crate) mod schema;
