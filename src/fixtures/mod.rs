//! Fixtures
//!
//! Named sales data sets stored as YAML, one file per collection:
//!
//! ```text
//! fixtures/sellers/<name>.yml
//! fixtures/products/<name>.yml
//! fixtures/purchase_records/<name>.yml
//! ```

use std::{fs, path::PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::{data::SalesData, products::Product, records::PurchaseRecord, sellers::Seller};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// Wrapper for sellers in YAML
#[derive(Debug, Deserialize)]
struct SellersFixture {
    sellers: Vec<Seller>,
}

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
struct ProductsFixture {
    products: Vec<Product>,
}

/// Wrapper for purchase records in YAML
#[derive(Debug, Deserialize)]
struct PurchaseRecordsFixture {
    purchase_records: Vec<PurchaseRecord>,
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Data loaded so far
    data: SalesData,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            data: SalesData::default(),
        }
    }

    /// Load sellers from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_sellers(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: SellersFixture = self.read("sellers", name)?;

        self.data.sellers.extend(fixture.sellers);

        Ok(self)
    }

    /// Load products from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: ProductsFixture = self.read("products", name)?;

        self.data.products.extend(fixture.products);

        Ok(self)
    }

    /// Load purchase records from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_purchase_records(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: PurchaseRecordsFixture = self.read("purchase_records", name)?;

        self.data.purchase_records.extend(fixture.purchase_records);

        Ok(self)
    }

    /// Load sellers, products and purchase records from a fixture set
    ///
    /// # Errors
    ///
    /// Returns an error if any of the files cannot be read or parsed.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture
            .load_sellers(name)?
            .load_products(name)?
            .load_purchase_records(name)?;

        Ok(fixture)
    }

    /// Consume the fixture, returning its sales data
    pub fn into_data(self) -> SalesData {
        self.data
    }

    fn read<T>(&self, collection: &str, name: &str) -> Result<T, FixtureError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let file_path = self.base_path.join(collection).join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;

        Ok(serde_norway::from_str(&contents)?)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
