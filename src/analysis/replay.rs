//! Purchase Replay

use tracing::debug;

use crate::{
    analysis::index::SalesIndex,
    data::InvalidInputError,
    products::Product,
    records::{PurchaseItem, PurchaseRecord},
    rounding::RoundingPolicy,
    stats::SellerStat,
    strategies::RevenueStrategy,
};

/// Replay every purchase record into the seller accumulators.
///
/// Records from sellers missing from the index are skipped. Items whose sku is
/// missing from the catalog abort the replay, since their cost is unknown.
///
/// Returns the number of skipped records.
///
/// # Errors
///
/// - [`InvalidInputError::UnknownProduct`]: the first unresolvable sku.
/// - [`InvalidInputError::AmountOverflow`]: an item's cost, revenue, profit or
///   quantity no longer fits once accumulated.
/// - [`InvalidInputError::TooManySales`]: a seller's record count overflowed.
pub fn replay_records(
    records: &[PurchaseRecord],
    index: &SalesIndex<'_>,
    stats: &mut [SellerStat],
    revenue: &dyn RevenueStrategy,
    rounding: RoundingPolicy,
) -> Result<usize, InvalidInputError> {
    let mut skipped = 0;

    for record in records {
        let Some(stat) = index
            .seller_slot(&record.seller_id)
            .and_then(|slot| stats.get_mut(slot))
        else {
            debug!(seller_id = %record.seller_id, "skipping record from unknown seller");
            skipped += 1;
            continue;
        };

        stat.record_sale()
            .ok_or_else(|| InvalidInputError::TooManySales {
                seller_id: record.seller_id.clone(),
            })?;

        for item in &record.items {
            let product = index
                .product(&item.sku)
                .ok_or_else(|| InvalidInputError::UnknownProduct {
                    sku: item.sku.clone(),
                    seller_id: record.seller_id.clone(),
                })?;

            accumulate_item(stat, item, product, revenue, rounding).ok_or_else(|| {
                InvalidInputError::AmountOverflow {
                    seller_id: record.seller_id.clone(),
                    sku: item.sku.clone(),
                }
            })?;
        }
    }

    Ok(skipped)
}

/// Fold one item into its seller's totals. `None` if any figure overflows.
fn accumulate_item(
    stat: &mut SellerStat,
    item: &PurchaseItem,
    product: &Product,
    revenue: &dyn RevenueStrategy,
    rounding: RoundingPolicy,
) -> Option<()> {
    let cost = product.cost_of(item.quantity)?;
    let item_revenue = revenue.revenue(item, product)?;
    let total_revenue = rounding.accumulate_revenue(stat.revenue(), item_revenue)?;

    stat.add_profit(item_revenue.checked_sub(cost)?)?;
    stat.add_quantity(&item.sku, item.quantity)?;
    stat.set_revenue(total_revenue);

    Some(())
}
