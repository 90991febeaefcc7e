use crate::router::handle;
use crate::tests::utils::{body_json, get, make_db, plaza_json, post_json};
use astra::Body;
use http::Method;

fn post_seed(db: &crate::db::Database) -> serde_json::Value {
    let req = http::Request::builder()
        .method(Method::POST)
        .uri("/seed")
        .body(Body::empty())
        .unwrap();
    body_json(handle(req, db).unwrap())
}

#[test]
fn seed_populates_an_empty_store_with_four_listings() {
    let db = make_db("seed_empty");

    let body = post_seed(&db);
    assert_eq!(body["message"], "Seeded demo properties");
    assert_eq!(body["count"], 4);

    let listings = body_json(handle(get("/properties"), &db).unwrap());
    assert_eq!(listings.as_array().unwrap().len(), 4);

    // Exemplars are retrievable by their fixed slugs.
    let plaza = body_json(handle(get("/properties/isherwood-plaza"), &db).unwrap());
    assert_eq!(plaza["name"], "Isherwood Plaza");
    assert_eq!(plaza["price"], 12500000.0);

    let towers = body_json(handle(get("/properties/riverside-towers"), &db).unwrap());
    assert_eq!(towers["status"], "under development");
    assert_eq!(towers["development_type"], "high rise");
}

#[test]
fn second_seed_is_a_no_op() {
    let db = make_db("seed_twice");

    post_seed(&db);
    let body = post_seed(&db);

    assert_eq!(body["message"], "Collection already seeded");
    assert_eq!(body["count"], 4);

    let listings = body_json(handle(get("/properties"), &db).unwrap());
    assert_eq!(listings.as_array().unwrap().len(), 4);
}

#[test]
fn seed_skips_any_non_empty_store() {
    let db = make_db("seed_nonempty");

    handle(post_json("/properties", &plaza_json("pre-existing")), &db).unwrap();

    let body = post_seed(&db);
    assert_eq!(body["message"], "Collection already seeded");
    assert_eq!(body["count"], 1);

    let listings = body_json(handle(get("/properties"), &db).unwrap());
    assert_eq!(listings.as_array().unwrap().len(), 1);
}
