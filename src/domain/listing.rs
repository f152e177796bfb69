use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// One row of `apartment_details`, as written by the aggregation job.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRecord {
    pub id: i64,

    // Provenance (internal only)
    pub refid: Option<String>,
    pub association_code: Option<String>,
    pub source_name: Option<String>,
    pub group_name: Option<String>,
    pub agg_datetime: Option<NaiveDateTime>,
    pub machine_name: Option<String>,

    pub name: Option<String>,
    pub address: Option<String>,
    pub unit_number: Option<String>,
    pub available_date: Option<String>, // raw text as scraped
    pub available_date_formatted: Option<NaiveDate>,
    pub floorplan: Option<String>,
    pub min_rent: Option<String>,
    pub max_rent: Option<String>,
    pub sqft: Option<String>,
    pub bed: Option<String>,
    pub bath: Option<String>,
    pub state: Option<String>,
}

/// What clients see. Field names match the JSON the browser clients expect.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingView {
    pub id: i64,
    #[serde(rename = "apartmentName")]
    pub name: Option<String>,
    pub address: Option<String>,
    pub min_rent: Option<String>,
    pub max_rent: Option<String>,
    pub bed: Option<String>,
    pub bath: Option<String>,
    pub sqft: Option<String>,
    pub floorplan: Option<String>,
    pub available_date_formatted: Option<NaiveDate>,
    pub state: Option<String>,
}

impl From<ListingRecord> for ListingView {
    fn from(r: ListingRecord) -> Self {
        ListingView {
            id: r.id,
            name: r.name,
            address: r.address,
            min_rent: r.min_rent,
            max_rent: r.max_rent,
            bed: r.bed,
            bath: r.bath,
            sqft: r.sqft,
            floorplan: r.floorplan,
            available_date_formatted: r.available_date_formatted,
            state: r.state,
        }
    }
}
