pub(crate) mod customer_store;
pub(crate) mod shipment_store;
pub(crate) mod postgres_store;
#[cfg(test)]
pub(crate) mod memory_store;
