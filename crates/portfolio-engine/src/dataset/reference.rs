use crate::analytics::RawPropertyRecord;

/// Reference portfolio of eleven residential buildings (CHF, figures as of 30 June 2025).
pub fn reference_records() -> Vec<RawPropertyRecord> {
    vec![
        record(
            ("rue-du-mole-5", "Rue du Môle 5", "Genève"),
            [19.4, 0.6, 0.6, 0.0, 2.54],
            [277.0, 1518.0],
            [85.0, 0.0, 15.0],
            (1957, Some(2000), Some(2014)),
        ),
        record(
            ("rue-de-la-servette-23", "Rue de la Servette 23", "Genève"),
            [20.9, 0.8, 0.8, 0.0, 2.55],
            [421.0, 2149.0],
            [61.0, 16.0, 23.0],
            (1967, Some(1999), None),
        ),
        record(
            ("rue-du-grand-pre-39", "Rue du Grand-Pré 39", "Genève"),
            [16.8, 0.6, 0.6, 3.3, 2.51],
            [393.0, 2043.0],
            [87.0, 0.0, 13.0],
            (1962, Some(1997), None),
        ),
        record(
            ("rue-des-asters-8", "Rue des Asters 8", "Genève"),
            [9.1, 0.3, 0.3, 0.0, 2.61],
            [302.0, 1115.0],
            [83.0, 0.0, 17.0],
            (1910, Some(2002), Some(2022)),
        ),
        record(
            ("avenue-echallens-87-89", "Avenue d'Echallens 87/89", "Lausanne"),
            [6.1, 0.2, 0.2, 0.0, 2.85],
            [535.0, 822.0],
            [100.0, 0.0, 0.0],
            (1899, Some(2015), Some(2022)),
        ),
        record(
            ("chemin-montmeillan-19-21", "Chemin de Montmeillan 19/21", "Lausanne"),
            [13.6, 0.5, 0.5, 0.0, 2.65],
            [1158.0, 1661.0],
            [85.0, 0.0, 15.0],
            (1966, Some(2004), Some(2009)),
        ),
        record(
            ("avenue-du-censuy-18-26", "Avenue du Censuy 18-26", "Renens"),
            [36.9, 1.4, 1.4, 0.1, 2.65],
            [6321.0, 6014.0],
            [91.0, 6.0, 3.0],
            (1972, Some(2003), Some(2009)),
        ),
        record(
            ("avenue-tir-federal-79-81", "Avenue du Tir-Fédéral 79/81", "Chavannes-Renens"),
            [27.4, 1.0, 1.0, 0.2, 2.71],
            [2898.0, 3442.0],
            [100.0, 0.0, 0.0],
            (1962, Some(1997), Some(2007)),
        ),
        record(
            ("rue-de-couvaloup-24", "Rue de Couvaloup 24", "Morges"),
            [12.4, 0.6, 0.6, 0.0, 3.11],
            [612.0, 1869.0],
            [50.0, 20.0, 30.0],
            (1963, Some(2021), None),
        ),
        record(
            ("route-aloys-fauquez-122-124", "Route Aloys Fauquez 122/124", "Lausanne"),
            [25.7, 0.9, 0.9, 0.0, 2.75],
            [1447.0, 3472.0],
            [91.0, 4.0, 5.0],
            (1968, Some(2016), Some(2023)),
        ),
        record(
            ("avenue-victor-ruffy-33", "Avenue Victor-Ruffy 33", "Lausanne"),
            [7.2, 0.3, 0.3, 0.0, 2.65],
            [1097.0, 1120.0],
            [100.0, 0.0, 0.0],
            (1952, Some(2018), None),
        ),
    ]
}

/// `figures` = market value, gross rental, net rental (millions), vacancy, discount (%);
/// `areas` = site, lettable; `mix` = residential, retail, other (%).
fn record(
    (id, address, city): (&str, &str, &str),
    figures: [f64; 5],
    areas: [f64; 2],
    mix: [f64; 3],
    (construction_year, acquisition_year, renovation_year): (i32, Option<i32>, Option<i32>),
) -> RawPropertyRecord {
    let [market_value_mchf, gross_rental_mchf, net_rental_mchf, vacancy_rate_pct, discount_rate_pct] =
        figures;
    let [site_area, lettable_area] = areas;
    let [residential_share_pct, retail_share_pct, other_share_pct] = mix;

    RawPropertyRecord {
        id: id.to_string(),
        address: address.to_string(),
        city: city.to_string(),
        market_value_mchf,
        gross_rental_mchf,
        net_rental_mchf,
        vacancy_rate_pct,
        discount_rate_pct,
        site_area,
        lettable_area,
        residential_share_pct,
        retail_share_pct: Some(retail_share_pct),
        other_share_pct: Some(other_share_pct),
        construction_year,
        acquisition_year,
        renovation_year,
    }
}
