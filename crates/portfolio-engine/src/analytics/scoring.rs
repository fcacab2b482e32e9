use super::domain::PropertyAsset;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Inclusive bounds a sub-score is clamped into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBand {
    pub floor: f64,
    pub ceiling: f64,
}

impl ScoreBand {
    pub const fn new(floor: f64, ceiling: f64) -> Self {
        Self { floor, ceiling }
    }

    /// Clamps and rounds `value`; a non-finite value lands on the floor.
    pub fn bound(&self, value: f64) -> u8 {
        let value = if value.is_finite() { value } else { self.floor };
        value.clamp(self.floor, self.ceiling).round() as u8
    }
}

/// Rubric for the three health sub-scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub reference_year: i32,
    pub financial: ScoreBand,
    pub technical: ScoreBand,
    pub social: ScoreBand,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            reference_year: 2025,
            financial: ScoreBand::new(60.0, 96.0),
            technical: ScoreBand::new(58.0, 95.0),
            social: ScoreBand::new(55.0, 94.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreDimension {
    Financial,
    Technical,
    Social,
}

impl ScoreDimension {
    pub const fn ordered() -> [Self; 3] {
        [Self::Financial, Self::Technical, Self::Social]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Financial => "Financial",
            Self::Technical => "Technical",
            Self::Social => "Social",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssetScoreSet {
    pub financial: u8,
    pub technical: u8,
    pub social: u8,
    pub overall: u8,
}

impl AssetScoreSet {
    pub fn get(&self, dimension: ScoreDimension) -> u8 {
        match dimension {
            ScoreDimension::Financial => self.financial,
            ScoreDimension::Technical => self.technical,
            ScoreDimension::Social => self.social,
        }
    }
}

pub fn score(asset: &PropertyAsset, config: &ScoringConfig) -> AssetScoreSet {
    let financial = config.financial.bound(financial_base(asset));
    let technical = config
        .technical
        .bound(technical_base(asset, config.reference_year));
    let social = config.social.bound(social_base(asset));
    let overall = ((financial as f64 + technical as f64 + social as f64) / 3.0).round() as u8;

    debug!(asset = %asset.id, financial, technical, social, overall, "scored asset");

    AssetScoreSet {
        financial,
        technical,
        social,
        overall,
    }
}

fn financial_base(asset: &PropertyAsset) -> f64 {
    if asset.market_value <= 0 {
        warn!(asset = %asset.id, "market value is not positive; yield term dropped");
    }
    68.0 + asset.net_yield_pct() * 6.0 - asset.vacancy_rate * 1.4
}

fn technical_base(asset: &PropertyAsset, reference_year: i32) -> f64 {
    let age = (reference_year - asset.last_refit_year()) as f64;
    92.0 - age * 0.9
}

fn social_base(asset: &PropertyAsset) -> f64 {
    65.0 + asset.mix.residential * 0.2 - asset.vacancy_rate * 1.1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::domain::OccupancyMix;

    fn asset(market_value: i64, net_rental: i64, vacancy_rate: f64) -> PropertyAsset {
        PropertyAsset {
            id: "probe".to_string(),
            address: "Probe 1".to_string(),
            city: "Lausanne".to_string(),
            market_value,
            market_value_mchf: market_value as f64 / 1_000_000.0,
            gross_rental: net_rental,
            gross_rental_mchf: net_rental as f64 / 1_000_000.0,
            net_rental,
            net_rental_mchf: net_rental as f64 / 1_000_000.0,
            vacancy_rate,
            discount_rate: 2.6,
            site_area: 400.0,
            lettable_area: 1000.0,
            mix: OccupancyMix {
                residential: 80.0,
                retail: 10.0,
                other: 10.0,
            },
            construction_year: 1960,
            acquisition_year: None,
            renovation_year: Some(2015),
            defaulted: Vec::new(),
        }
    }

    #[test]
    fn scores_reference_asset() {
        let scores = score(&asset(19_400_000, 600_000, 0.0), &ScoringConfig::default());
        // yield 3.09 % -> 68 + 18.56
        assert_eq!(scores.financial, 87);
        // ten years since refit -> 92 - 9
        assert_eq!(scores.technical, 83);
        // 65 + 16
        assert_eq!(scores.social, 81);
        assert_eq!(scores.overall, 84);
    }

    #[test]
    fn extreme_inputs_stay_within_bands() {
        let config = ScoringConfig::default();
        let mut worst = asset(1, 0, 100.0);
        worst.renovation_year = None;
        worst.construction_year = 1800;
        worst.mix.residential = 0.0;
        let low = score(&worst, &config);
        assert_eq!(low.financial, 60);
        assert_eq!(low.technical, 58);
        assert_eq!(low.social, 55);

        let mut best = asset(1, 5_000_000, 0.0);
        best.renovation_year = Some(2030);
        best.mix.residential = 100.0;
        let high = score(&best, &config);
        assert_eq!(high.financial, 96);
        assert_eq!(high.technical, 95);
        assert_eq!(high.social, 85);
    }

    #[test]
    fn zero_market_value_falls_back_to_vacancy_only_term() {
        let scores = score(&asset(0, 600_000, 5.0), &ScoringConfig::default());
        // 68 - 7 = 61
        assert_eq!(scores.financial, 61);
    }

    #[test]
    fn non_finite_values_land_on_the_floor() {
        let band = ScoreBand::new(60.0, 96.0);
        assert_eq!(band.bound(f64::NAN), 60);
        assert_eq!(band.bound(f64::INFINITY), 60);
        assert_eq!(band.bound(75.4), 75);
    }

    #[test]
    fn dimensions_index_the_score_set() {
        let scores = score(&asset(19_400_000, 600_000, 0.0), &ScoringConfig::default());
        let values: Vec<u8> = ScoreDimension::ordered()
            .into_iter()
            .map(|dimension| scores.get(dimension))
            .collect();
        assert_eq!(values, vec![87, 83, 81]);
    }
}
