use std::str::FromStr;
use thiserror::Error;

/// Every column of `apartment_details` can be sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Refid,
    AssociationCode,
    SourceName,
    GroupName,
    AggDatetime,
    MachineName,
    ApartmentName,
    Address,
    UnitNumber,
    AvailableDate,
    AvailableDateFormatted,
    Floorplan,
    MinRent,
    MaxRent,
    Sqft,
    Bed,
    Bath,
    State,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort field: {0}")]
pub struct UnknownSortField(pub String);

impl SortField {
    pub const ALL: [SortField; 19] = [
        SortField::Id,
        SortField::Refid,
        SortField::AssociationCode,
        SortField::SourceName,
        SortField::GroupName,
        SortField::AggDatetime,
        SortField::MachineName,
        SortField::ApartmentName,
        SortField::Address,
        SortField::UnitNumber,
        SortField::AvailableDate,
        SortField::AvailableDateFormatted,
        SortField::Floorplan,
        SortField::MinRent,
        SortField::MaxRent,
        SortField::Sqft,
        SortField::Bed,
        SortField::Bath,
        SortField::State,
    ];

    /// Column name in `apartment_details`. Only these strings ever reach SQL.
    pub fn column(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Refid => "refid",
            SortField::AssociationCode => "association_code",
            SortField::SourceName => "source_name",
            SortField::GroupName => "group_name",
            SortField::AggDatetime => "agg_datetime",
            SortField::MachineName => "machine_name",
            SortField::ApartmentName => "apt_result_apartment_name",
            SortField::Address => "apt_result_address",
            SortField::UnitNumber => "apt_result_unit_number",
            SortField::AvailableDate => "apt_result_available_date",
            SortField::AvailableDateFormatted => "apt_result_available_date_formatted",
            SortField::Floorplan => "apt_result_floorplan",
            SortField::MinRent => "apt_result_min_rent",
            SortField::MaxRent => "apt_result_max_rent",
            SortField::Sqft => "apt_result_sqft",
            SortField::Bed => "apt_result_bed",
            SortField::Bath => "apt_result_bath",
            SortField::State => "state",
        }
    }

    /// camelCase property name, as sent by the browser clients (`aggDatetime`).
    pub fn property(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Refid => "refid",
            SortField::AssociationCode => "associationCode",
            SortField::SourceName => "sourceName",
            SortField::GroupName => "groupName",
            SortField::AggDatetime => "aggDatetime",
            SortField::MachineName => "machineName",
            SortField::ApartmentName => "apartmentName",
            SortField::Address => "address",
            SortField::UnitNumber => "unitNumber",
            SortField::AvailableDate => "availableDate",
            SortField::AvailableDateFormatted => "availableDateFormatted",
            SortField::Floorplan => "floorplan",
            SortField::MinRent => "minRent",
            SortField::MaxRent => "maxRent",
            SortField::Sqft => "sqft",
            SortField::Bed => "bed",
            SortField::Bath => "bath",
            SortField::State => "state",
        }
    }
}

impl FromStr for SortField {
    type Err = UnknownSortField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|f| f.column() == s || f.property() == s)
            .ok_or_else(|| UnknownSortField(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// `"asc"` in any case is ascending; anything else, including nothing, is descending.
    pub fn from_param(order: Option<&str>) -> Self {
        match order {
            Some(o) if o.eq_ignore_ascii_case("asc") => SortDirection::Asc,
            _ => SortDirection::Desc,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for Sort {
    fn default() -> Self {
        Sort {
            field: SortField::AggDatetime,
            direction: SortDirection::Desc,
        }
    }
}

impl Sort {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Sort { field, direction }
    }

    /// ORDER BY body. `id` breaks ties so pages never overlap.
    pub fn order_by(&self) -> String {
        match self.field {
            SortField::Id => format!("id {}", self.direction.as_sql()),
            field => format!("{} {}, id ASC", field.column(), self.direction.as_sql()),
        }
    }
}
