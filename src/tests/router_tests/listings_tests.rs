// src/tests/router_tests/listings_tests.rs
use crate::db::connection::Database;
use crate::router::{handle, serve};
use crate::tests::utils::{get, init_test_db, listing, read_json, seed};
use serde_json::Value;

fn content_ids(body: &Value) -> Vec<i64> {
    body["content"]
        .as_array()
        .expect("content should be an array")
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect()
}

fn seeded_db(count: i64) -> (tempfile::TempDir, Database) {
    let (dir, db) = init_test_db();
    let records: Vec<_> = (1..=count)
        .map(|id| listing(id, &format!("Building {id}"), &format!("{id} Main St")))
        .collect();
    seed(&db, &records);
    (dir, db)
}

#[test]
fn empty_store_returns_empty_page() {
    let (_dir, db) = init_test_db();

    let resp = handle(get("/api/apartments?page=0&size=12"), &db).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("Access-Control-Allow-Origin").unwrap(), "*");

    let body = read_json(resp);
    assert_eq!(body["content"], serde_json::json!([]));
    assert_eq!(body["totalElements"], 0);
    assert_eq!(body["totalPages"], 0);
    assert_eq!(body["empty"], true);
}

#[test]
fn default_listing_is_newest_first() {
    let (_dir, db) = seeded_db(3);

    let body = read_json(handle(get("/api/apartments"), &db).unwrap());

    assert_eq!(content_ids(&body), vec![3, 2, 1]);
    assert_eq!(body["size"], 12);
    assert_eq!(body["number"], 0);
}

#[test]
fn item_count_follows_page_arithmetic() {
    let (_dir, db) = seeded_db(7);

    for (page, size, expected) in [(0i64, 3i64, 3usize), (1, 3, 3), (2, 3, 1), (3, 3, 0), (0, 10, 7), (6, 1, 1)] {
        let uri = format!("/api/apartments?page={page}&size={size}&sortBy=id&order=asc");
        let body = read_json(handle(get(&uri), &db).unwrap());

        assert_eq!(content_ids(&body).len(), expected, "page={page} size={size}");
        assert_eq!(body["totalElements"], 7);
        assert_eq!(body["totalPages"], (7 + size - 1) / size);
    }
}

#[test]
fn negative_page_and_zero_size_are_clamped() {
    let (_dir, db) = seeded_db(3);

    let body = read_json(handle(get("/api/apartments?page=-2&size=0&sortBy=id&order=asc"), &db).unwrap());

    assert_eq!(content_ids(&body), vec![1]);
    assert_eq!(body["number"], 0);
    assert_eq!(body["size"], 1);
    assert_eq!(body["totalPages"], 3);
}

#[test]
fn unknown_sort_field_matches_default_sort() {
    let (_dir, db) = seeded_db(5);

    let fallback = read_json(handle(get("/api/apartments?sortBy=bogus&order=asc"), &db).unwrap());
    let explicit = read_json(handle(get("/api/apartments?sortBy=agg_datetime&order=desc"), &db).unwrap());

    assert_eq!(fallback, explicit);
    assert_eq!(content_ids(&fallback), vec![5, 4, 3, 2, 1]);
}

#[test]
fn sort_accepts_property_names() {
    let (_dir, db) = seeded_db(3);

    let body = read_json(handle(get("/api/apartments?sortBy=aggDatetime&order=ASC"), &db).unwrap());
    assert_eq!(content_ids(&body), vec![1, 2, 3]);
}

#[test]
fn search_matches_name_or_address() {
    let (_dir, db) = init_test_db();
    seed(
        &db,
        &[
            listing(1, "Maple Court", "1 Oak St"),
            listing(2, "Oak Grove", "2 Elm St"),
            listing(3, "Birch Flats", "3 Pine Ave"),
        ],
    );

    let body = read_json(handle(get("/api/apartments?q=oak"), &db).unwrap());

    assert_eq!(content_ids(&body), vec![2, 1]);
    assert_eq!(body["totalElements"], 2);
    for item in body["content"].as_array().unwrap() {
        let name = item["apartmentName"].as_str().unwrap_or("").to_lowercase();
        let address = item["address"].as_str().unwrap_or("").to_lowercase();
        assert!(name.contains("oak") || address.contains("oak"));
    }
}

#[test]
fn search_term_is_percent_decoded() {
    let (_dir, db) = init_test_db();
    seed(
        &db,
        &[
            listing(1, "Maple Court", "1 Oak St"),
            listing(2, "Maple Ridge", "2 Elm St"),
        ],
    );

    let body = read_json(handle(get("/api/apartments?q=maple%20COURT"), &db).unwrap());
    assert_eq!(content_ids(&body), vec![1]);

    let body = read_json(handle(get("/api/apartments?q=elm+st"), &db).unwrap());
    assert_eq!(content_ids(&body), vec![2]);
}

#[test]
fn blank_search_is_a_plain_listing() {
    let (_dir, db) = seeded_db(4);

    let blank = read_json(handle(get("/api/apartments?q=%20%20&size=2"), &db).unwrap());
    let absent = read_json(handle(get("/api/apartments?size=2"), &db).unwrap());

    assert_eq!(blank, absent);
    assert_eq!(blank["totalElements"], 4);
}

#[test]
fn listed_and_fetched_views_agree() {
    let (_dir, db) = seeded_db(2);

    let page = read_json(handle(get("/api/apartments"), &db).unwrap());
    for item in page["content"].as_array().unwrap() {
        let id = item["id"].as_i64().unwrap();
        let single = read_json(handle(get(&format!("/api/apartments/{id}")), &db).unwrap());
        assert_eq!(&single, item);
    }
}

#[test]
fn view_hides_provenance_fields() {
    let (_dir, db) = seeded_db(1);

    let body = read_json(handle(get("/api/apartments/1"), &db).unwrap());

    assert_eq!(body["apartmentName"], "Building 1");
    assert_eq!(body["minRent"], "$1001");
    assert_eq!(body["availableDateFormatted"], "2024-03-01");
    for hidden in ["refid", "sourceName", "groupName", "aggDatetime", "machineName"] {
        assert!(body.get(hidden).is_none(), "{hidden} should not be exposed");
    }
}

#[test]
fn missing_listing_is_404_naming_the_id() {
    let (_dir, db) = init_test_db();

    let resp = serve(get("/api/apartments/999"), &db);
    assert_eq!(resp.status(), 404);

    let body = read_json(resp);
    assert_eq!(body["status"], 404);
    assert_eq!(body["message"], "Apartment not found: 999");
    assert_eq!(body["path"], "/api/apartments/999");
}

#[test]
fn bad_parameters_are_400() {
    let (_dir, db) = init_test_db();

    assert_eq!(serve(get("/api/apartments/abc"), &db).status(), 400);
    assert_eq!(serve(get("/api/apartments?size=lots"), &db).status(), 400);
}

#[test]
fn storage_failure_is_a_generic_500() {
    // Opens fine but has no schema.
    let dir = tempfile::tempdir().unwrap();
    let db = Database::new(dir.path().join("empty.sqlite"));

    let resp = serve(get("/api/apartments"), &db);
    assert_eq!(resp.status(), 500);

    let body = read_json(resp);
    assert_eq!(body["message"], "Internal Server Error");
    assert!(body.get("content").is_none());
}

#[test]
fn health_reports_database_state() {
    let (_dir, db) = init_test_db();
    let resp = handle(get("/api/health"), &db).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(read_json(resp)["status"], "ok");

    let missing = Database::new("/nonexistent-dir/for/tests/db.sqlite");
    assert_eq!(serve(get("/api/health"), &missing).status(), 503);
}

#[test]
fn unknown_routes_and_methods() {
    let (_dir, db) = init_test_db();

    assert_eq!(serve(get("/api/nope"), &db).status(), 404);

    let post = http::Request::builder()
        .method(http::Method::POST)
        .uri("/api/apartments")
        .body(astra::Body::empty())
        .unwrap();
    assert_eq!(serve(post, &db).status(), 405);

    let preflight = http::Request::builder()
        .method(http::Method::OPTIONS)
        .uri("/api/apartments")
        .body(astra::Body::empty())
        .unwrap();
    let resp = serve(preflight, &db);
    assert_eq!(resp.status(), 204);
    assert_eq!(resp.headers().get("Access-Control-Allow-Origin").unwrap(), "*");
}

#[test]
fn huge_page_size_is_one_page() {
    let (_dir, db) = seeded_db(2);

    let resp = serve(get("/api/apartments?size=9223372036854775807"), &db);
    assert_eq!(resp.status(), 200);

    let body = read_json(resp);
    assert_eq!(content_ids(&body), vec![2, 1]);
    assert_eq!(body["totalPages"], 1);
    assert_eq!(body["last"], true);
}

#[test]
fn huge_page_index_is_empty() {
    let (_dir, db) = seeded_db(2);

    let resp = serve(get("/api/apartments?page=9223372036854775807&size=9223372036854775807"), &db);
    assert_eq!(resp.status(), 200);

    let body = read_json(resp);
    assert_eq!(body["content"], serde_json::json!([]));
    assert_eq!(body["totalElements"], 2);
    assert_eq!(body["number"], i64::MAX);
}

#[test]
fn search_ignores_non_ascii_case() {
    let (_dir, db) = init_test_db();
    seed(
        &db,
        &[
            listing(1, "Élan Lofts", "1 Rue St"),
            listing(2, "Elm Lofts", "2 Elm St"),
        ],
    );

    let body = read_json(handle(get("/api/apartments?q=%C3%A9lan"), &db).unwrap());
    assert_eq!(content_ids(&body), vec![1]);
    assert_eq!(body["totalElements"], 1);
}

#[test]
fn attribute_filters_narrow_the_listing() {
    let (_dir, db) = init_test_db();
    let mut one_bed = listing(1, "Maple Court", "1 Oak St");
    one_bed.bed = Some("1".into());
    let mut two_bed = listing(2, "Oak Grove", "2 Elm St");
    two_bed.bed = Some("2".into());
    two_bed.bath = Some("2".into());
    let mut elsewhere = listing(3, "Oak Ridge", "3 Elm St");
    elsewhere.bed = Some("2".into());
    elsewhere.state = Some("WI".into());
    seed(&db, &[one_bed, two_bed, elsewhere]);

    let body = read_json(handle(get("/api/apartments?bed=2"), &db).unwrap());
    assert_eq!(content_ids(&body), vec![3, 2]);
    assert_eq!(body["totalElements"], 2);

    let body = read_json(handle(get("/api/apartments?beds=2&bath=2"), &db).unwrap());
    assert_eq!(content_ids(&body), vec![2]);

    let body = read_json(handle(get("/api/apartments?bed=2&state=MN&q=oak"), &db).unwrap());
    assert_eq!(content_ids(&body), vec![2]);

    // Empty values are ignored, as if absent.
    let body = read_json(handle(get("/api/apartments?bed=&state="), &db).unwrap());
    assert_eq!(body["totalElements"], 3);
}
