use super::domain::{PropertyAsset, CURRENCY_MILLION};
use super::normalizer::round_to;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Asset selected for the yield-gap chart with its estimated market-rate gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldGapTarget {
    pub asset_id: String,
    pub uplift: f64,
}

impl YieldGapTarget {
    pub fn new(asset_id: impl Into<String>, uplift: f64) -> Self {
        Self {
            asset_id: asset_id.into(),
            uplift,
        }
    }
}

/// Budget and projection multipliers for one quarter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterDrift {
    pub quarter: String,
    pub budget: f64,
    pub projection: f64,
}

impl QuarterDrift {
    pub fn new(quarter: impl Into<String>, budget: f64, projection: f64) -> Self {
        Self {
            quarter: quarter.into(),
            budget,
            projection,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    pub yield_targets: Vec<YieldGapTarget>,
    pub quarters: Vec<QuarterDrift>,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            yield_targets: vec![
                YieldGapTarget::new("rue-du-mole-5", 0.06),
                YieldGapTarget::new("rue-du-grand-pre-39", 0.12),
                YieldGapTarget::new("avenue-du-censuy-18-26", 0.05),
                YieldGapTarget::new("rue-de-couvaloup-24", 0.15),
            ],
            quarters: vec![
                QuarterDrift::new("Q1", 0.98, 0.96),
                QuarterDrift::new("Q2", 1.0, 0.99),
                QuarterDrift::new("Q3", 1.01, 1.04),
                QuarterDrift::new("Q4", 1.03, 1.12),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YieldGapPoint {
    pub asset_id: String,
    pub address: String,
    pub city: String,
    /// Current monthly net rental, whole currency units.
    pub current_rent: f64,
    /// Market-aligned monthly rental, whole currency units.
    pub market_rent: f64,
}

impl YieldGapPoint {
    pub fn gap(&self) -> f64 {
        self.market_rent - self.current_rent
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpexPoint {
    pub quarter: String,
    /// Millions, two decimals.
    pub budget: f64,
    /// Millions, two decimals.
    pub projection: f64,
}

/// Pairs current and market-aligned monthly rent for each configured target.
///
/// Targets naming an asset missing from the collection are skipped.
pub fn build_yield_gap(assets: &[PropertyAsset], targets: &[YieldGapTarget]) -> Vec<YieldGapPoint> {
    targets
        .iter()
        .filter_map(|target| {
            let Some(asset) = assets.iter().find(|asset| asset.id == target.asset_id) else {
                warn!(asset = %target.asset_id, "yield gap target not found in portfolio");
                return None;
            };
            let current = asset.monthly_net_rental();
            Some(YieldGapPoint {
                asset_id: asset.id.clone(),
                address: asset.address.clone(),
                city: asset.city.clone(),
                current_rent: current.round(),
                market_rent: (current * (1.0 + target.uplift)).round(),
            })
        })
        .collect()
}

/// Splits the annual net rental (in millions) into quarterly budget/projection pairs.
pub fn build_opex_series(assets: &[PropertyAsset], quarters: &[QuarterDrift]) -> Vec<OpexPoint> {
    let annual_net_m = assets.iter().map(|asset| asset.net_rental).sum::<i64>() as f64
        / CURRENCY_MILLION;
    let quarter_base = annual_net_m / 4.0;

    quarters
        .iter()
        .map(|drift| OpexPoint {
            quarter: drift.quarter.clone(),
            budget: round_to(quarter_base * drift.budget, 2),
            projection: round_to(quarter_base * drift.projection, 2),
        })
        .collect()
}
