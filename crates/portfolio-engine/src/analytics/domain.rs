use serde::{Deserialize, Serialize};

/// Number of absolute currency units in one "million" input figure.
pub const CURRENCY_MILLION: f64 = 1_000_000.0;

/// Raw per-property figures as published by the property list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPropertyRecord {
    pub id: String,
    pub address: String,
    pub city: String,
    pub market_value_mchf: f64,
    pub gross_rental_mchf: f64,
    pub net_rental_mchf: f64,
    pub vacancy_rate_pct: f64,
    pub discount_rate_pct: f64,
    pub site_area: f64,
    pub lettable_area: f64,
    pub residential_share_pct: f64,
    #[serde(default)]
    pub retail_share_pct: Option<f64>,
    #[serde(default)]
    pub other_share_pct: Option<f64>,
    pub construction_year: i32,
    #[serde(default)]
    pub acquisition_year: Option<i32>,
    #[serde(default)]
    pub renovation_year: Option<i32>,
}

/// Occupancy split of the lettable area, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OccupancyMix {
    pub residential: f64,
    pub retail: f64,
    pub other: f64,
}

impl OccupancyMix {
    pub fn total(&self) -> f64 {
        self.residential + self.retail + self.other
    }
}

/// Optional raw fields that the normalizer resolves through the default table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionalField {
    RetailShare,
    OtherShare,
    AcquisitionYear,
    RenovationYear,
}

impl OptionalField {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::RetailShare,
            Self::OtherShare,
            Self::AcquisitionYear,
            Self::RenovationYear,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::RetailShare => "Retail share",
            Self::OtherShare => "Other share",
            Self::AcquisitionYear => "Acquisition year",
            Self::RenovationYear => "Renovation year",
        }
    }

    pub const fn default_rule(self) -> DefaultRule {
        match self {
            Self::RetailShare => DefaultRule::Zero,
            Self::OtherShare => DefaultRule::Remainder,
            Self::AcquisitionYear | Self::RenovationYear => DefaultRule::Unknown,
        }
    }
}

/// How an absent optional field is filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultRule {
    /// The share is taken as 0 %.
    Zero,
    /// `max(0, 100 - residential - retail)`.
    Remainder,
    /// The year is recorded as unknown, distinct from year zero.
    Unknown,
}

impl DefaultRule {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Zero => "Defaults to 0 %",
            Self::Remainder => "Defaults to the unallocated remainder",
            Self::Unknown => "Recorded as unknown",
        }
    }
}

/// Canonical asset with absolute currency amounts and a complete occupancy mix.
///
/// Built once by [`normalize`](super::normalize) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyAsset {
    pub id: String,
    pub address: String,
    pub city: String,
    pub market_value: i64,
    pub market_value_mchf: f64,
    pub gross_rental: i64,
    pub gross_rental_mchf: f64,
    pub net_rental: i64,
    pub net_rental_mchf: f64,
    pub vacancy_rate: f64,
    pub discount_rate: f64,
    pub site_area: f64,
    pub lettable_area: f64,
    pub mix: OccupancyMix,
    pub construction_year: i32,
    /// `None` means the acquisition year is unknown.
    pub acquisition_year: Option<i32>,
    /// `None` means the building has no recorded renovation.
    pub renovation_year: Option<i32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub defaulted: Vec<OptionalField>,
}

impl PropertyAsset {
    /// Monthly share of the annual net rental.
    pub fn monthly_net_rental(&self) -> f64 {
        self.net_rental as f64 / 12.0
    }

    /// Net yield in percent, 0 when the market value is not positive.
    pub fn net_yield_pct(&self) -> f64 {
        if self.market_value <= 0 {
            return 0.0;
        }
        self.net_rental as f64 / self.market_value as f64 * 100.0
    }

    /// Year of the last structural refit: renovation when known, construction otherwise.
    pub fn last_refit_year(&self) -> i32 {
        self.renovation_year.unwrap_or(self.construction_year)
    }

    pub fn was_defaulted(&self, field: OptionalField) -> bool {
        self.defaulted.contains(&field)
    }
}
