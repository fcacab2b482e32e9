mod aggregate;
pub mod briefing;
mod capex;
pub mod domain;
mod normalizer;
mod projection;
pub mod report;
mod scoring;

pub use aggregate::{aggregate, PortfolioAggregate, DEFAULT_DISCOUNT_WATCH_PCT};
pub use briefing::{build_brief, BriefCard, BriefingConfig, CardKind};
pub use capex::{simulate_capex, CapexBaseline, CapexConfig, CapexProjection};
pub use domain::{OccupancyMix, PropertyAsset, RawPropertyRecord};
pub use normalizer::{normalize, normalize_all};
pub use projection::{
    build_opex_series, build_yield_gap, OpexPoint, ProjectionConfig, QuarterDrift,
    YieldGapPoint, YieldGapTarget,
};
pub use report::PortfolioDashboard;
pub use scoring::{score, AssetScoreSet, ScoreBand, ScoreDimension, ScoringConfig};
