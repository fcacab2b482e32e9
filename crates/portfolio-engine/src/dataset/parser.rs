use crate::analytics::RawPropertyRecord;
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::str::FromStr;

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<RawPropertyRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<PropertyRow>() {
        records.push(row?.into_record());
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct PropertyRow {
    id: String,
    address: String,
    city: String,
    market_value_mchf: f64,
    gross_rental_mchf: f64,
    net_rental_mchf: f64,
    vacancy_rate_pct: f64,
    discount_rate_pct: f64,
    site_area: f64,
    lettable_area: f64,
    residential_share_pct: f64,
    #[serde(default, deserialize_with = "blank_as_none")]
    retail_share_pct: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    other_share_pct: Option<f64>,
    construction_year: i32,
    #[serde(default, deserialize_with = "blank_as_none")]
    acquisition_year: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    renovation_year: Option<i32>,
}

impl PropertyRow {
    fn into_record(self) -> RawPropertyRecord {
        RawPropertyRecord {
            id: self.id,
            address: self.address,
            city: self.city,
            market_value_mchf: self.market_value_mchf,
            gross_rental_mchf: self.gross_rental_mchf,
            net_rental_mchf: self.net_rental_mchf,
            vacancy_rate_pct: self.vacancy_rate_pct,
            discount_rate_pct: self.discount_rate_pct,
            site_area: self.site_area,
            lettable_area: self.lettable_area,
            residential_share_pct: self.residential_share_pct,
            retail_share_pct: self.retail_share_pct,
            other_share_pct: self.other_share_pct,
            construction_year: self.construction_year,
            acquisition_year: self.acquisition_year,
            renovation_year: self.renovation_year,
        }
    }
}

fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.filter(|value| !value.trim().is_empty())
        .map(|value| value.trim().parse::<T>().map_err(serde::de::Error::custom))
        .transpose()
}
