use super::super::capex::CapexBaseline;
use super::super::scoring::AssetScoreSet;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricUnit {
    Currency,
    Percent,
    Count,
}

impl MetricUnit {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Currency => "CHF",
            Self::Percent => "%",
            Self::Count => "assets",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyMetric {
    pub id: &'static str,
    pub label: String,
    pub unit: MetricUnit,
    pub value: f64,
    pub detail: &'static str,
}

/// Per-asset card of the digital-twin view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildingTwinView {
    pub id: String,
    pub name: String,
    pub city: String,
    pub scores: AssetScoreSet,
    pub vacancy_rate: f64,
    pub capex: CapexBaseline,
    pub memo: String,
}
