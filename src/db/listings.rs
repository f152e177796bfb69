// src/db/listings.rs
use crate::domain::{Filter, ListingRecord, Page, PageRequest};
use crate::errors::ServerError;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const SELECT_COLUMNS: &str = r#"
    id,                                     -- 0
    refid,                                  -- 1
    association_code,                       -- 2
    source_name,                            -- 3
    group_name,                             -- 4
    agg_datetime,                           -- 5
    machine_name,                           -- 6
    apt_result_apartment_name,              -- 7
    apt_result_address,                     -- 8
    apt_result_unit_number,                 -- 9
    apt_result_available_date,              -- 10
    apt_result_available_date_formatted,    -- 11
    apt_result_floorplan,                   -- 12
    apt_result_min_rent,                    -- 13
    apt_result_max_rent,                    -- 14
    apt_result_sqft,                        -- 15
    apt_result_bed,                         -- 16
    apt_result_bath,                        -- 17
    state                                   -- 18
"#;

// Literal containment on name OR address under Unicode lowercase (`fold_case` is
// registered per connection). `instr` keeps `%` and `_` literal.
fn search_predicate(n: usize) -> String {
    format!(
        "(instr(fold_case(apt_result_apartment_name), fold_case(?{n})) > 0 \
         OR instr(fold_case(apt_result_address), fold_case(?{n})) > 0)"
    )
}

fn listing_from_row(row: &Row<'_>) -> rusqlite::Result<ListingRecord> {
    Ok(ListingRecord {
        id: row.get(0)?,
        refid: row.get(1)?,
        association_code: row.get(2)?,
        source_name: row.get(3)?,
        group_name: row.get(4)?,
        agg_datetime: row.get(5)?,
        machine_name: row.get(6)?,
        name: row.get(7)?,
        address: row.get(8)?,
        unit_number: row.get(9)?,
        available_date: row.get(10)?,
        available_date_formatted: row.get(11)?,
        floorplan: row.get(12)?,
        min_rent: row.get(13)?,
        max_rent: row.get(14)?,
        sqft: row.get(15)?,
        bed: row.get(16)?,
        bath: row.get(17)?,
        state: row.get(18)?,
    })
}

/// Every listing matching `filters`, ordered and sliced per `request`.
pub fn list_all(
    conn: &Connection,
    filters: &[Filter],
    request: &PageRequest,
) -> Result<Page<ListingRecord>, ServerError> {
    fetch_page(conn, None, filters, request)
}

/// Listings whose name or address contains `term`, ignoring case.
///
/// `term` is matched as given; callers decide whether it is blank.
pub fn search(
    conn: &Connection,
    term: &str,
    filters: &[Filter],
    request: &PageRequest,
) -> Result<Page<ListingRecord>, ServerError> {
    fetch_page(conn, Some(term), filters, request)
}

/// WHERE clause (empty when unfiltered) and its bound values, numbered from ?1.
/// Column names come from the `SortField` catalogue; user text is only ever bound.
fn where_clause(term: Option<&str>, filters: &[Filter]) -> (String, Vec<Value>) {
    let mut clauses = Vec::new();
    let mut values = Vec::new();

    if let Some(term) = term {
        values.push(Value::Text(term.to_string()));
        clauses.push(search_predicate(values.len()));
    }
    for filter in filters {
        values.push(Value::Text(filter.value.clone()));
        clauses.push(format!("{} = ?{}", filter.field.column(), values.len()));
    }

    if clauses.is_empty() {
        (String::new(), values)
    } else {
        (format!("WHERE {}", clauses.join(" AND ")), values)
    }
}

fn fetch_page(
    conn: &Connection,
    term: Option<&str>,
    filters: &[Filter],
    request: &PageRequest,
) -> Result<Page<ListingRecord>, ServerError> {
    let (where_sql, mut values) = where_clause(term, filters);

    // Count and slice must see the same snapshot.
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let total: i64 = tx
        .query_row(
            &format!("SELECT COUNT(*) FROM apartment_details {where_sql}"),
            params_from_iter(values.iter()),
            |row| row.get(0),
        )
        .map_err(|e| ServerError::DbError(format!("failed to count listings: {e}")))?;

    let limit = values.len() + 1;
    let offset = values.len() + 2;
    values.push(Value::Integer(request.size()));
    values.push(Value::Integer(request.offset()));

    let sql = format!(
        "SELECT {SELECT_COLUMNS} FROM apartment_details {where_sql} ORDER BY {} LIMIT ?{limit} OFFSET ?{offset}",
        request.sort.order_by()
    );
    let items = {
        let mut stmt = tx
            .prepare(&sql)
            .map_err(|e| ServerError::DbError(e.to_string()))?;
        let rows = stmt
            .query_map(params_from_iter(values.iter()), listing_from_row)
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
        }
        out
    };

    tx.finish()
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    Ok(Page::new(items, total, request))
}

pub fn get_by_id(conn: &Connection, id: i64) -> Result<Option<ListingRecord>, ServerError> {
    conn.query_row(
        &format!("SELECT {SELECT_COLUMNS} FROM apartment_details WHERE id = ?1"),
        params![id],
        listing_from_row,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("failed to load listing {id}: {e}")))
}
