pub(crate) mod customer_converters;
pub(crate) mod pricing_converters;
pub(crate) mod shipment_converters;
