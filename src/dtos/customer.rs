use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Body of `PUT /customers/{customer_id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CustomerNameUpdate {
    pub name: String,
}
