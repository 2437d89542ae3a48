pub(crate) mod customer_service;
pub(crate) mod shipment_service;
pub(crate) mod shipping_service;
