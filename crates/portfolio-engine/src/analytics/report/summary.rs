use super::super::aggregate::{aggregate, PortfolioAggregate};
use super::super::briefing::{build_brief, BriefCard};
use super::super::capex::CapexBaseline;
use super::super::domain::PropertyAsset;
use super::super::normalizer::round_to;
use super::super::projection::{build_opex_series, build_yield_gap, OpexPoint, YieldGapPoint};
use super::super::scoring::{score, ScoringConfig};
use super::pulse::{management_pulse, ManagementPulse};
use super::views::{BuildingTwinView, MetricUnit, StrategyMetric};
use crate::config::EngineConfig;
use serde::Serialize;

/// Everything the presentation layer renders, derived in one pass from the assets.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioDashboard {
    pub aggregate: PortfolioAggregate,
    pub metrics: Vec<StrategyMetric>,
    pub twins: Vec<BuildingTwinView>,
    pub yield_gap: Vec<YieldGapPoint>,
    pub opex: Vec<OpexPoint>,
    pub brief: Vec<BriefCard>,
    pub pulse: ManagementPulse,
}

impl PortfolioDashboard {
    pub fn build(assets: &[PropertyAsset], config: &EngineConfig) -> Self {
        let aggregate = aggregate(assets, config.discount_watch_threshold_pct);
        let metrics = strategy_metrics(&aggregate);
        let twins = assets
            .iter()
            .map(|asset| twin_view(asset, &config.scoring))
            .collect();

        Self {
            aggregate,
            metrics,
            twins,
            yield_gap: build_yield_gap(assets, &config.projection.yield_targets),
            opex: build_opex_series(assets, &config.projection.quarters),
            brief: build_brief(assets, &config.briefing),
            pulse: management_pulse(assets, &config.pulse),
        }
    }

    pub fn twin(&self, asset_id: &str) -> Option<&BuildingTwinView> {
        self.twins.iter().find(|twin| twin.id == asset_id)
    }

    /// Twins ordered from the weakest to the strongest overall health score.
    pub fn twins_by_health(&self) -> Vec<&BuildingTwinView> {
        let mut twins: Vec<&BuildingTwinView> = self.twins.iter().collect();
        twins.sort_by_key(|twin| twin.scores.overall);
        twins
    }
}

pub fn strategy_metrics(aggregate: &PortfolioAggregate) -> Vec<StrategyMetric> {
    vec![
        StrategyMetric {
            id: "leakage",
            label: "Revenue lost to vacancy".to_string(),
            unit: MetricUnit::Currency,
            value: aggregate.monthly_leakage.round(),
            detail: "Vacancy rate applied to each asset's net rental.",
        },
        StrategyMetric {
            id: "financial-vacancy",
            label: "Financial vacancy rate".to_string(),
            unit: MetricUnit::Percent,
            value: round_to(aggregate.weighted_vacancy_rate, 1),
            detail: "Average vacancy weighted by net rental.",
        },
        StrategyMetric {
            id: "discount-watch",
            label: format!(
                "Assets to review (discount > {:.1} %)",
                aggregate.discount_watch_threshold
            ),
            unit: MetricUnit::Count,
            value: aggregate.discount_watch_count as f64,
            detail: "Assets whose discount rate exceeds the watch threshold.",
        },
    ]
}

pub fn twin_view(asset: &PropertyAsset, scoring: &ScoringConfig) -> BuildingTwinView {
    BuildingTwinView {
        id: asset.id.clone(),
        name: asset.address.clone(),
        city: asset.city.clone(),
        scores: score(asset, scoring),
        vacancy_rate: round_to(asset.vacancy_rate, 1),
        capex: CapexBaseline::for_asset(asset),
        memo: format!(
            "{} m² lettable · last refit {} · residential {}%",
            asset.lettable_area,
            asset.last_refit_year(),
            asset.mix.residential
        ),
    }
}
