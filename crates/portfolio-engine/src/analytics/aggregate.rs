use super::domain::PropertyAsset;
use serde::Serialize;
use tracing::{debug, warn};

/// Discount rate (in percent) above which an asset is put on the watch list.
pub const DEFAULT_DISCOUNT_WATCH_PCT: f64 = 2.7;

/// Portfolio-level figures reduced from the canonical asset collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioAggregate {
    pub asset_count: usize,
    pub total_market_value: i64,
    pub total_net_rental: i64,
    /// Vacancy rate in percent, weighted by net rental.
    pub weighted_vacancy_rate: f64,
    /// Estimated income lost to vacancy per month.
    pub monthly_leakage: f64,
    pub discount_watch_threshold: f64,
    pub discount_watch_count: usize,
}

pub fn aggregate(assets: &[PropertyAsset], discount_watch_threshold: f64) -> PortfolioAggregate {
    let total_market_value = assets.iter().map(|asset| asset.market_value).sum();
    let total_net_rental: i64 = assets.iter().map(|asset| asset.net_rental).sum();

    let vacancy_weight: f64 = assets
        .iter()
        .map(|asset| asset.vacancy_rate * asset.net_rental as f64)
        .sum();
    let weighted_vacancy_rate = if total_net_rental == 0 {
        if !assets.is_empty() {
            warn!("total net rental is zero; weighted vacancy reported as 0");
        }
        0.0
    } else {
        vacancy_weight / total_net_rental as f64
    };

    let monthly_leakage = assets
        .iter()
        .map(|asset| asset.vacancy_rate / 100.0 * asset.net_rental as f64)
        .sum();

    let discount_watch_count = assets
        .iter()
        .filter(|asset| asset.discount_rate > discount_watch_threshold)
        .count();

    let aggregate = PortfolioAggregate {
        asset_count: assets.len(),
        total_market_value,
        total_net_rental,
        weighted_vacancy_rate,
        monthly_leakage,
        discount_watch_threshold,
        discount_watch_count,
    };
    debug!(
        assets = aggregate.asset_count,
        weighted_vacancy = aggregate.weighted_vacancy_rate,
        leakage = aggregate.monthly_leakage,
        watch = aggregate.discount_watch_count,
        "aggregated portfolio"
    );
    aggregate
}
