#[derive(Debug, Clone, PartialEq, Default)]
pub struct Customer {
    pub customer_id: String,
    pub customer_name: String,
    pub email_address: String,
}
