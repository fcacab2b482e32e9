use portfolio_engine::analytics::{
    aggregate, build_brief, build_opex_series, build_yield_gap, normalize, normalize_all, score,
    simulate_capex, BriefingConfig, CapexConfig, CardKind, PortfolioDashboard, PropertyAsset,
    ProjectionConfig, ScoringConfig, DEFAULT_DISCOUNT_WATCH_PCT,
};
use portfolio_engine::config::EngineConfig;
use portfolio_engine::dataset::reference_records;

fn reference_assets() -> Vec<PropertyAsset> {
    normalize_all(&reference_records())
}

fn find<'a>(assets: &'a [PropertyAsset], id: &str) -> &'a PropertyAsset {
    assets
        .iter()
        .find(|asset| asset.id == id)
        .unwrap_or_else(|| panic!("reference asset {id} present"))
}

#[test]
fn every_canonical_mix_sums_to_one_hundred() {
    for asset in reference_assets() {
        assert!(
            (asset.mix.total() - 100.0).abs() <= 0.1,
            "{} mix sums to {}",
            asset.id,
            asset.mix.total()
        );
    }
}

#[test]
fn millions_round_trip_within_rounding() {
    for raw in reference_records() {
        let asset = normalize(&raw);
        let back = asset.market_value as f64 / 1_000_000.0;
        assert!((back - raw.market_value_mchf).abs() <= 0.5 / 1_000_000.0);
        let back = asset.net_rental as f64 / 1_000_000.0;
        assert!((back - raw.net_rental_mchf).abs() <= 0.5 / 1_000_000.0);
        assert_eq!(asset.market_value_mchf, raw.market_value_mchf);
    }
}

#[test]
fn reference_portfolio_aggregate() {
    let assets = reference_assets();
    let result = aggregate(&assets, DEFAULT_DISCOUNT_WATCH_PCT);

    assert_eq!(result.asset_count, 11);
    assert_eq!(result.total_market_value, 195_500_000);
    assert_eq!(result.total_net_rental, 7_200_000);
    // grand-pré 19 800 + censuy 1 400 + tir-fédéral 2 000
    assert!((result.monthly_leakage - 23_200.0).abs() < 1e-6);
    assert!((result.weighted_vacancy_rate - 2_320_000.0 / 7_200_000.0).abs() < 1e-9);

    let expected_watch = reference_records()
        .iter()
        .filter(|raw| raw.discount_rate_pct > 2.7)
        .count();
    assert_eq!(expected_watch, 4);
    assert_eq!(result.discount_watch_count, expected_watch);
}

#[test]
fn aggregate_is_order_independent() {
    let assets = reference_assets();
    let mut reversed = assets.clone();
    reversed.reverse();
    let forward = aggregate(&assets, DEFAULT_DISCOUNT_WATCH_PCT);
    let backward = aggregate(&reversed, DEFAULT_DISCOUNT_WATCH_PCT);
    assert_eq!(forward.total_market_value, backward.total_market_value);
    assert_eq!(forward.discount_watch_count, backward.discount_watch_count);
    assert!((forward.monthly_leakage - backward.monthly_leakage).abs() < 1e-6);
    assert!((forward.weighted_vacancy_rate - backward.weighted_vacancy_rate).abs() < 1e-12);
}

#[test]
fn scores_stay_within_configured_bands() {
    let config = ScoringConfig::default();
    for asset in reference_assets() {
        let scores = score(&asset, &config);
        assert!((60..=96).contains(&scores.financial), "{}", asset.id);
        assert!((58..=95).contains(&scores.technical), "{}", asset.id);
        assert!((55..=94).contains(&scores.social), "{}", asset.id);
        let mean = (scores.financial as f64 + scores.technical as f64 + scores.social as f64) / 3.0;
        assert_eq!(scores.overall, mean.round() as u8);
    }
}

#[test]
fn mole_financial_score_reflects_yield() {
    let assets = reference_assets();
    let scores = score(find(&assets, "rue-du-mole-5"), &ScoringConfig::default());
    assert!(scores.financial <= 96);
    assert!(scores.financial > 68);
    assert_eq!(scores.financial, 87);
}

#[test]
fn technical_score_uses_renovation_when_known() {
    let assets = reference_assets();
    let config = ScoringConfig::default();
    // renovated 2022
    assert_eq!(score(find(&assets, "rue-des-asters-8"), &config).technical, 89);
    // built 1967, never renovated
    assert_eq!(score(find(&assets, "rue-de-la-servette-23"), &config).technical, 58);
}

#[test]
fn reference_yield_gap_series() {
    let assets = reference_assets();
    let points = build_yield_gap(&assets, &ProjectionConfig::default().yield_targets);
    let rows: Vec<(&str, f64, f64)> = points
        .iter()
        .map(|point| (point.asset_id.as_str(), point.current_rent, point.market_rent))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("rue-du-mole-5", 50_000.0, 53_000.0),
            ("rue-du-grand-pre-39", 50_000.0, 56_000.0),
            ("avenue-du-censuy-18-26", 116_667.0, 122_500.0),
            ("rue-de-couvaloup-24", 50_000.0, 57_500.0),
        ]
    );
}

#[test]
fn reference_opex_series() {
    let assets = reference_assets();
    let series = build_opex_series(&assets, &ProjectionConfig::default().quarters);
    let values: Vec<(f64, f64)> = series
        .iter()
        .map(|point| (point.budget, point.projection))
        .collect();
    let expected = [(1.76, 1.73), (1.8, 1.78), (1.82, 1.87), (1.85, 2.02)];
    for ((budget, projection), (expected_budget, expected_projection)) in
        values.iter().zip(expected.iter())
    {
        assert!((budget - expected_budget).abs() < 1e-9);
        assert!((projection - expected_projection).abs() < 1e-9);
    }
}

#[test]
fn capex_projection_for_mixed_use_asset() {
    let assets = reference_assets();
    let projection = simulate_capex(
        find(&assets, "rue-de-couvaloup-24"),
        350_000.0,
        &CapexConfig::default(),
    );
    // 7.6 + 1.3 * 0.35
    assert!((projection.projected_return_rate - 8.055).abs() < 1e-9);
    // 4.8 + 1.4 * 0.35
    assert!((projection.projected_rent_uplift - 5.29).abs() < 1e-9);
}

#[test]
fn capex_projection_never_decreases_with_investment() {
    let config = CapexConfig::default();
    for asset in reference_assets() {
        let mut previous = simulate_capex(&asset, 0.0, &config);
        for step in 1..=40 {
            let current = simulate_capex(&asset, step as f64 * 50_000.0, &config);
            assert!(current.projected_return_rate >= previous.projected_return_rate);
            assert!(current.projected_rent_uplift >= previous.projected_rent_uplift);
            previous = current;
        }
    }
}

#[test]
fn reference_brief_deck() {
    let assets = reference_assets();
    let deck = build_brief(&assets, &BriefingConfig::default());
    let summary: Vec<(CardKind, f64)> = deck
        .iter()
        .map(|card| (card.kind, card.annualized_impact))
        .collect();
    assert_eq!(
        summary,
        vec![
            (CardKind::Indexation, 27_000.0),
            (CardKind::Indexation, 84_000.0),
            (CardKind::Vacancy, 600_000.0),
            (CardKind::Maintenance, 18_400.0),
        ]
    );
}

#[test]
fn dashboard_snapshot_is_recomputed_from_assets() {
    let config = EngineConfig::default();
    let assets = reference_assets();
    let dashboard = PortfolioDashboard::build(&assets, &config);

    assert_eq!(dashboard.twins.len(), 11);
    assert_eq!(dashboard.yield_gap.len(), 4);
    assert_eq!(dashboard.opex.len(), 4);
    assert_eq!(dashboard.brief.len(), 4);
    assert_eq!(dashboard.pulse.escalations, 1);
    assert_eq!(dashboard.metrics[0].value, 23_200.0);
    assert_eq!(dashboard.metrics[1].value, 0.3);
    assert_eq!(dashboard.metrics[2].value, 4.0);

    let without_grand_pre: Vec<PropertyAsset> = assets
        .into_iter()
        .filter(|asset| asset.id != "rue-du-grand-pre-39")
        .collect();
    let refreshed = PortfolioDashboard::build(&without_grand_pre, &config);
    assert_eq!(refreshed.pulse.escalations, 0);
    assert!(refreshed.aggregate.monthly_leakage < dashboard.aggregate.monthly_leakage);
    assert_eq!(refreshed.yield_gap.len(), 3);

    let json = serde_json::to_value(&refreshed).expect("dashboard serializes");
    assert_eq!(json["twins"].as_array().map(Vec::len), Some(10));
}
