use portfolio_engine::analytics::{normalize_all, PropertyAsset};
use portfolio_engine::config::AppConfig;
use portfolio_engine::dataset::{reference_records, PropertyListImporter};
use portfolio_engine::error::AppError;
use portfolio_engine::telemetry;
use serde::Serialize;
use std::path::Path;
use tracing::info;

pub(crate) fn bootstrap() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(
        ?config.environment,
        reference_year = config.engine.scoring.reference_year,
        "configuration loaded"
    );
    Ok(config)
}

/// Normalizes the property list at `path`, or the reference portfolio when none is given.
pub(crate) fn load_assets(path: Option<&Path>) -> Result<Vec<PropertyAsset>, AppError> {
    let records = match path {
        Some(path) => {
            let records = PropertyListImporter::from_path(path)?;
            info!(path = %path.display(), count = records.len(), "loaded property list");
            records
        }
        None => reference_records(),
    };
    Ok(normalize_all(&records))
}

pub(crate) fn find_asset<'a>(
    assets: &'a [PropertyAsset],
    asset_id: &str,
) -> Result<&'a PropertyAsset, AppError> {
    assets
        .iter()
        .find(|asset| asset.id == asset_id)
        .ok_or_else(|| AppError::UnknownAsset(asset_id.to_string()))
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn format_chf(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (integer, decimals) = formatted.split_once('.').unwrap_or((&formatted, "00"));
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push('\'');
        }
        grouped.push(digit);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("CHF {sign}{grouped}.{decimals}")
}
