//! Sales Data

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{products::Product, records::PurchaseRecord, sellers::Seller};

/// Errors raised when the input bundle is unusable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidInputError {
    /// The bundle contained no sellers.
    #[error("no sellers provided")]
    NoSellers,

    /// The bundle contained no products.
    #[error("no products provided")]
    NoProducts,

    /// The bundle contained no purchase records.
    #[error("no purchase records provided")]
    NoPurchaseRecords,

    /// The raw input was missing a collection or had the wrong shape.
    #[error("malformed sales data: {0}")]
    Malformed(String),

    /// A purchase item referenced a sku missing from the product catalog.
    #[error("purchase by seller {seller_id} references unknown product {sku}")]
    UnknownProduct {
        /// The sku that could not be resolved
        sku: String,

        /// Seller whose record contained the item
        seller_id: String,
    },

    /// An item's amount or quantity overflowed while being accumulated.
    #[error("amounts for product {sku} sold by seller {seller_id} overflowed")]
    AmountOverflow {
        /// Seller whose record contained the item
        seller_id: String,

        /// The sku being accumulated
        sku: String,
    },

    /// A seller's record count overflowed.
    #[error("too many purchase records for seller {seller_id}")]
    TooManySales {
        /// Seller whose record count overflowed
        seller_id: String,
    },
}

/// The complete input to an analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesData {
    /// Sellers to report on
    pub sellers: Vec<Seller>,

    /// Product catalog
    pub products: Vec<Product>,

    /// Transactions to replay
    pub purchase_records: Vec<PurchaseRecord>,
}

impl SalesData {
    /// Create a new bundle from its three collections.
    pub fn new(
        sellers: Vec<Seller>,
        products: Vec<Product>,
        purchase_records: Vec<PurchaseRecord>,
    ) -> Self {
        Self {
            sellers,
            products,
            purchase_records,
        }
    }

    /// Parse a bundle from a YAML document with `sellers`, `products` and
    /// `purchase_records` keys.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::Malformed`] if a collection is missing or
    /// has the wrong shape.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, InvalidInputError> {
        serde_norway::from_str(yaml).map_err(|err| InvalidInputError::Malformed(err.to_string()))
    }

    /// Check that every collection is present and non-empty.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvalidInputError`] found, checking sellers, then
    /// products, then purchase records.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        if self.sellers.is_empty() {
            return Err(InvalidInputError::NoSellers);
        }

        if self.products.is_empty() {
            return Err(InvalidInputError::NoProducts);
        }

        if self.purchase_records.is_empty() {
            return Err(InvalidInputError::NoPurchaseRecords);
        }

        Ok(())
    }
}
