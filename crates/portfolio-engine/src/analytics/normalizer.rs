use super::domain::{
    DefaultRule, OccupancyMix, OptionalField, PropertyAsset, RawPropertyRecord, CURRENCY_MILLION,
};
use tracing::debug;

/// Converts a raw record into its canonical asset.
pub fn normalize(raw: &RawPropertyRecord) -> PropertyAsset {
    let mut defaulted = Vec::new();

    let retail = match raw.retail_share_pct {
        Some(share) => share,
        None => {
            defaulted.push(OptionalField::RetailShare);
            resolve_share(OptionalField::RetailShare, raw.residential_share_pct, 0.0)
        }
    };

    let other = match raw.other_share_pct {
        Some(share) => share,
        None => {
            defaulted.push(OptionalField::OtherShare);
            resolve_share(OptionalField::OtherShare, raw.residential_share_pct, retail)
        }
    };

    if raw.acquisition_year.is_none() {
        defaulted.push(OptionalField::AcquisitionYear);
    }
    if raw.renovation_year.is_none() {
        defaulted.push(OptionalField::RenovationYear);
    }

    if !defaulted.is_empty() {
        debug!(asset = %raw.id, ?defaulted, "resolved absent fields from default table");
    }

    PropertyAsset {
        id: raw.id.clone(),
        address: raw.address.clone(),
        city: raw.city.clone(),
        market_value: to_absolute(raw.market_value_mchf),
        market_value_mchf: raw.market_value_mchf,
        gross_rental: to_absolute(raw.gross_rental_mchf),
        gross_rental_mchf: raw.gross_rental_mchf,
        net_rental: to_absolute(raw.net_rental_mchf),
        net_rental_mchf: raw.net_rental_mchf,
        vacancy_rate: raw.vacancy_rate_pct,
        discount_rate: raw.discount_rate_pct,
        site_area: raw.site_area,
        lettable_area: raw.lettable_area,
        mix: OccupancyMix {
            residential: raw.residential_share_pct,
            retail,
            other: round_to(other, 1),
        },
        construction_year: raw.construction_year,
        acquisition_year: raw.acquisition_year,
        renovation_year: raw.renovation_year,
        defaulted,
    }
}

pub fn normalize_all(raw: &[RawPropertyRecord]) -> Vec<PropertyAsset> {
    raw.iter().map(normalize).collect()
}

fn resolve_share(field: OptionalField, residential: f64, retail: f64) -> f64 {
    match field.default_rule() {
        DefaultRule::Zero => 0.0,
        DefaultRule::Remainder => (100.0 - residential - retail).max(0.0),
        DefaultRule::Unknown => 0.0,
    }
}

fn to_absolute(millions: f64) -> i64 {
    (millions * CURRENCY_MILLION).round() as i64
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
