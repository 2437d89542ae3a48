pub(crate) mod base;
pub(crate) mod customer;
pub(crate) mod pricing;
pub(crate) mod shipment;
