use crate::dtos::customer::Customer;
use crate::entities;

impl entities::customer::Customer {
    pub fn to_rest_api_customer(&self) -> Customer {
        Customer {
            id: self.customer_id.clone(),
            name: self.customer_name.clone(),
            email: self.email_address.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::entities::customer::Customer;

    #[test]
    fn customer_fields_are_renamed_for_the_wire() {
        let customer = Customer {
            customer_id: "c-1".to_string(),
            customer_name: "Ada".to_string(),
            email_address: "ada@example.com".to_string(),
        };
        let api_customer = customer.to_rest_api_customer();
        assert_eq!(api_customer.id, "c-1");
        assert_eq!(api_customer.name, "Ada");
        assert_eq!(api_customer.email, "ada@example.com");
    }
}
