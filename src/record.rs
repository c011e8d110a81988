//! User record as served by the directory endpoint.

use serde::{Deserialize, Serialize};

/// A single user entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Stable identifier assigned by the source.
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

/// Postal address of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
}

/// Employer of a user. Only the name is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
}

impl Address {
    /// Formats the address on one line, e.g. `Kulas Light, Apt. 556, Gwenborough, 92998-3874`.
    pub fn single_line(&self) -> String {
        format!("{}, {}, {}, {}", self.street, self.suite, self.city, self.zipcode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let data = json!({
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        });

        let record: Record = serde_json::from_value(data).unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.name, "Leanne Graham");
        assert_eq!(record.company.name, "Romaguera-Crona");
        assert_eq!(
            record.address.single_line(),
            "Kulas Light, Apt. 556, Gwenborough, 92998-3874"
        );
    }

    #[test]
    fn test_decode_rejects_missing_name() {
        let data = json!({ "id": 3, "username": "Samantha" });
        assert!(serde_json::from_value::<Record>(data).is_err());
    }
}
