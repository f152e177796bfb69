use crate::domain::sort::SortField;

/// Query parameters accepted as exact-match filters, and the column each one binds.
/// `beds` is the older client's spelling of `bed`.
pub const FILTER_PARAMS: [(&str, SortField); 4] = [
    ("bed", SortField::Bed),
    ("beds", SortField::Bed),
    ("bath", SortField::Bath),
    ("state", SortField::State),
];

/// `column = value`, compared as stored text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub field: SortField,
    pub value: String,
}

impl Filter {
    pub fn new(field: SortField, value: impl Into<String>) -> Self {
        Filter {
            field,
            value: value.into(),
        }
    }

    /// The query parameter this filter came from (`beds` reports as `bed`).
    pub fn param(&self) -> &'static str {
        FILTER_PARAMS
            .iter()
            .find(|(_, f)| *f == self.field)
            .map(|(name, _)| *name)
            .unwrap_or_else(|| self.field.column())
    }
}
