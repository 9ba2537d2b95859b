//! Sellers

use serde::{Deserialize, Serialize};

/// Seller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    /// Seller identifier, unique within a data set
    pub id: String,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,
}

impl Seller {
    /// Create a new seller.
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Display name, first name followed by last name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_first_and_last() {
        let seller = Seller::new("seller_1", "Alexey", "Petrov");

        assert_eq!(seller.full_name(), "Alexey Petrov");
    }
}
