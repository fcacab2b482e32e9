use crate::infra::{find_asset, format_chf, load_assets, print_json};
use chrono::{Local, NaiveDate};
use clap::Args;
use portfolio_engine::analytics::report::views::MetricUnit;
use portfolio_engine::analytics::{
    score, AssetScoreSet, CapexBaseline, CapexProjection, PortfolioDashboard, ScoreDimension,
};
use portfolio_engine::config::AppConfig;
use portfolio_engine::error::AppError;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DashboardArgs {
    /// CSV property list to load instead of the reference portfolio
    #[arg(long)]
    pub(crate) properties: Option<PathBuf>,
    /// Emit JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Identifier of the asset to score
    pub(crate) asset_id: String,
    /// CSV property list to load instead of the reference portfolio
    #[arg(long)]
    pub(crate) properties: Option<PathBuf>,
    /// Emit JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CapexArgs {
    /// Identifier of the asset to simulate
    pub(crate) asset_id: String,
    /// Investment amount in CHF
    #[arg(long, default_value_t = 350_000.0)]
    pub(crate) investment: f64,
    /// CSV property list to load instead of the reference portfolio
    #[arg(long)]
    pub(crate) properties: Option<PathBuf>,
    /// Emit JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
struct DashboardResponse<'a> {
    generated_on: NaiveDate,
    reference_year: i32,
    #[serde(flatten)]
    dashboard: &'a PortfolioDashboard,
}

#[derive(Debug, Serialize)]
struct ScoreResponse<'a> {
    asset_id: &'a str,
    reference_year: i32,
    scores: AssetScoreSet,
}

#[derive(Debug, Serialize)]
struct CapexResponse<'a> {
    asset_id: &'a str,
    baseline: CapexBaseline,
    projection: CapexProjection,
}

pub(crate) fn run_dashboard(args: DashboardArgs, config: &AppConfig) -> Result<(), AppError> {
    let assets = load_assets(args.properties.as_deref())?;
    let dashboard = PortfolioDashboard::build(&assets, &config.engine);

    if args.json {
        return print_json(&DashboardResponse {
            generated_on: Local::now().date_naive(),
            reference_year: config.engine.scoring.reference_year,
            dashboard: &dashboard,
        });
    }

    let aggregate = &dashboard.aggregate;
    println!("Portfolio dashboard");
    println!(
        "  {} assets · market value {} · net rental {}",
        aggregate.asset_count,
        format_chf(aggregate.total_market_value as f64),
        format_chf(aggregate.total_net_rental as f64)
    );

    println!("\nStrategy metrics");
    for metric in &dashboard.metrics {
        let value = match metric.unit {
            MetricUnit::Currency => format_chf(metric.value),
            MetricUnit::Percent => format!("{:.1} %", metric.value),
            MetricUnit::Count => format!("{:.0} {}", metric.value, metric.unit.label()),
        };
        println!("  - {}: {}", metric.label, value);
    }

    println!("\nAsset health (weakest first)");
    for twin in dashboard.twins_by_health() {
        println!(
            "  - {:<30} {:>3} (fin {} · tech {} · social {})",
            twin.name,
            twin.scores.overall,
            twin.scores.financial,
            twin.scores.technical,
            twin.scores.social
        );
    }

    println!("\nYield gap (monthly)");
    for point in &dashboard.yield_gap {
        println!(
            "  - {}: {} -> {}",
            point.address,
            format_chf(point.current_rent),
            format_chf(point.market_rent)
        );
    }

    println!("\nOPEX landing (MCHF)");
    for point in &dashboard.opex {
        println!(
            "  - {}: budget {:.2} · projection {:.2}",
            point.quarter, point.budget, point.projection
        );
    }

    println!("\nDecisions");
    for card in &dashboard.brief {
        println!(
            "  - [{}] {} · annual impact {}",
            card.kind_label,
            card.title,
            format_chf(card.annualized_impact)
        );
    }

    let pulse = &dashboard.pulse;
    println!(
        "\nManagement pulse: {} escalation(s), compliance {} %, backlog {}{}",
        pulse.escalations,
        pulse.compliance,
        pulse.backlog,
        if pulse.sla_breached() {
            " · response time above SLA"
        } else {
            ""
        }
    );

    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs, config: &AppConfig) -> Result<(), AppError> {
    let assets = load_assets(args.properties.as_deref())?;
    let asset = find_asset(&assets, &args.asset_id)?;
    let scores = score(asset, &config.engine.scoring);

    if args.json {
        return print_json(&ScoreResponse {
            asset_id: &asset.id,
            reference_year: config.engine.scoring.reference_year,
            scores,
        });
    }

    println!("{} ({})", asset.address, asset.city);
    for dimension in ScoreDimension::ordered() {
        println!("  {:<10} {:>3}", dimension.label(), scores.get(dimension));
    }
    println!("  {:<10} {:>3}", "Overall", scores.overall);
    Ok(())
}

pub(crate) fn run_capex(args: CapexArgs, config: &AppConfig) -> Result<(), AppError> {
    let assets = load_assets(args.properties.as_deref())?;
    let asset = find_asset(&assets, &args.asset_id)?;
    let baseline = CapexBaseline::for_asset(asset);
    let projection = baseline.project(args.investment, &config.engine.capex);

    if args.json {
        return print_json(&CapexResponse {
            asset_id: &asset.id,
            baseline,
            projection,
        });
    }

    println!("{} ({})", asset.address, asset.city);
    println!("  Investment           {}", format_chf(projection.investment));
    println!(
        "  Projected return     {:.1} % (base {:.1} %)",
        projection.projected_return_rate, baseline.return_rate
    );
    println!(
        "  Modelled rent uplift {:.1} % (base {:.1} %)",
        projection.projected_rent_uplift, baseline.rent_uplift
    );
    Ok(())
}
