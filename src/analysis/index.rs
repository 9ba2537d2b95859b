//! Lookup Indices

use rustc_hash::FxHashMap;

use crate::{data::SalesData, products::Product, stats::SellerStat};

/// Identity lookups over one bundle of sales data.
///
/// Duplicate seller ids or skus are not rejected: the last occurrence wins.
#[derive(Debug)]
pub struct SalesIndex<'d> {
    sellers: FxHashMap<&'d str, usize>,
    products: FxHashMap<&'d str, &'d Product>,
}

impl<'d> SalesIndex<'d> {
    /// Build an empty accumulator per input seller, in input order, and the
    /// indices that resolve ids and skus.
    pub fn build(data: &'d SalesData) -> (Self, Vec<SellerStat>) {
        let stats: Vec<SellerStat> = data.sellers.iter().map(SellerStat::new).collect();

        let sellers = data
            .sellers
            .iter()
            .enumerate()
            .map(|(slot, seller)| (seller.id.as_str(), slot))
            .collect();

        let products = data
            .products
            .iter()
            .map(|product| (product.sku.as_str(), product))
            .collect();

        (Self { sellers, products }, stats)
    }

    /// Accumulator slot of the seller with `id`
    pub fn seller_slot(&self, id: &str) -> Option<usize> {
        self.sellers.get(id).copied()
    }

    /// Product with `sku`
    pub fn product(&self, sku: &str) -> Option<&'d Product> {
        self.products.get(sku).copied()
    }
}
