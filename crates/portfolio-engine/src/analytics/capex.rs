use super::domain::PropertyAsset;
use super::normalizer::round_to;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapexConfig {
    /// Capital amount one unit of sensitivity refers to.
    pub reference_unit: f64,
}

impl Default for CapexConfig {
    fn default() -> Self {
        Self {
            reference_unit: 1_000_000.0,
        }
    }
}

/// Simulator inputs for one asset. All rates are in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CapexBaseline {
    pub return_rate: f64,
    pub return_sensitivity: f64,
    pub rent_uplift: f64,
    pub uplift_sensitivity: f64,
}

impl CapexBaseline {
    pub fn for_asset(asset: &PropertyAsset) -> Self {
        let half_vacancy = asset.vacancy_rate / 2.0;

        let return_sensitivity = half_vacancy + (100.0 - asset.mix.residential) / 40.0;
        let return_sensitivity = if return_sensitivity == 0.0 {
            0.9
        } else {
            return_sensitivity
        };

        let uplift_sensitivity = (if half_vacancy == 0.0 { 0.8 } else { half_vacancy }) + 0.6;

        Self {
            return_rate: round_to(asset.discount_rate + 4.5, 1),
            return_sensitivity: round_to(return_sensitivity, 1),
            rent_uplift: round_to(asset.net_yield_pct(), 1),
            uplift_sensitivity: round_to(uplift_sensitivity, 1),
        }
    }

    /// Linear projection for `investment`; negative or non-finite amounts count as zero.
    pub fn project(&self, investment: f64, config: &CapexConfig) -> CapexProjection {
        let investment = if investment.is_finite() {
            investment.max(0.0)
        } else {
            0.0
        };
        let ratio = investment / config.reference_unit;

        CapexProjection {
            investment,
            projected_return_rate: self.return_rate + self.return_sensitivity * ratio,
            projected_rent_uplift: self.rent_uplift + self.uplift_sensitivity * ratio,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CapexProjection {
    pub investment: f64,
    pub projected_return_rate: f64,
    pub projected_rent_uplift: f64,
}

pub fn simulate_capex(
    asset: &PropertyAsset,
    investment: f64,
    config: &CapexConfig,
) -> CapexProjection {
    CapexBaseline::for_asset(asset).project(investment, config)
}
