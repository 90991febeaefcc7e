use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_json, get, make_db, plaza_json, post_json};
use astra::Body;
use http::Method;

#[test]
fn health_check_reports_running() {
    let db = make_db("router_health");

    let resp = handle(get("/"), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_json(resp);
    assert_eq!(body["message"], "Isherwood Developments API running");
}

#[test]
fn create_returns_201_with_string_id() {
    let db = make_db("router_create");

    let resp = handle(post_json("/properties", &plaza_json("new-plaza")), &db).unwrap();
    assert_eq!(resp.status(), 201);

    let body = body_json(resp);
    assert!(body["id"].is_string());
    assert!(!body["id"].as_str().unwrap().is_empty());
}

#[test]
fn created_listing_is_retrievable_by_slug() {
    let db = make_db("router_get_by_slug");

    let created = body_json(handle(post_json("/properties", &plaza_json("my-plaza")), &db).unwrap());

    let resp = handle(get("/properties/my-plaza"), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_json(resp);
    assert_eq!(body["id"], created["id"]);
    assert_eq!(body["slug"], "my-plaza");
    assert_eq!(body["name"], "Test Plaza");
    assert_eq!(body["category"], "commercial");
    assert_eq!(body["commercial_type"], "plaza");
    assert_eq!(body["price"], 12500000.0);
    assert_eq!(body["highlights"].as_array().unwrap().len(), 2);
}

#[test]
fn duplicate_slug_returns_400_with_detail() {
    let db = make_db("router_duplicate");

    handle(post_json("/properties", &plaza_json("dupe")), &db).unwrap();

    let err = handle(post_json("/properties", &plaza_json("dupe")), &db).unwrap_err();
    let resp = error_to_response(err);

    assert_eq!(resp.status(), 400);
    assert_eq!(body_json(resp)["detail"], "Slug already exists");
}

#[test]
fn invalid_enum_value_returns_422() {
    let db = make_db("router_bad_enum");

    let mut payload = plaza_json("bad-enum");
    payload["category"] = "castle".into();

    let err = handle(post_json("/properties", &payload), &db).unwrap_err();
    assert_eq!(error_to_response(err).status(), 422);
}

#[test]
fn negative_price_returns_422() {
    let db = make_db("router_bad_price");

    let mut payload = plaza_json("bad-price");
    payload["price"] = (-100.0).into();

    let err = handle(post_json("/properties", &payload), &db).unwrap_err();
    let resp = error_to_response(err);

    assert_eq!(resp.status(), 422);
    assert_eq!(body_json(resp)["detail"], "price must be non-negative");
}

#[test]
fn list_applies_query_filters_and_limit() {
    let db = make_db("router_list");

    handle(post_json("/properties", &plaza_json("plaza-1")), &db).unwrap();
    handle(post_json("/properties", &plaza_json("plaza-2")), &db).unwrap();

    let mut land = plaza_json("land-1");
    land["category"] = "land".into();
    land.as_object_mut().unwrap().remove("commercial_type");
    handle(post_json("/properties", &land), &db).unwrap();

    let body = body_json(handle(get("/properties?category=commercial"), &db).unwrap());
    let listings = body.as_array().unwrap();
    assert_eq!(listings.len(), 2);
    assert!(listings.iter().all(|l| l["category"] == "commercial"));
    assert!(listings.iter().all(|l| l["id"].is_string()));

    let body = body_json(handle(get("/properties?limit=1"), &db).unwrap());
    assert_eq!(body.as_array().unwrap().len(), 1);

    // Unparseable limit falls back to the default instead of erroring.
    let body = body_json(handle(get("/properties?limit=banana"), &db).unwrap());
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[test]
fn list_decodes_percent_encoded_filter_values() {
    let db = make_db("router_encoded_filter");

    let mut payload = plaza_json("encoded-towers");
    payload["category"] = "development".into();
    payload["development_type"] = "high rise".into();
    payload["status"] = "under development".into();
    payload["city"] = "New Hamburg".into();
    payload.as_object_mut().unwrap().remove("commercial_type");
    handle(post_json("/properties", &payload), &db).unwrap();

    // %20 is the only legal URL encoding of the multi-word enum values.
    let body = body_json(handle(get("/properties?status=under%20development"), &db).unwrap());
    assert_eq!(body.as_array().unwrap().len(), 1);

    let body = body_json(handle(get("/properties?development_type=high%20rise"), &db).unwrap());
    assert_eq!(body.as_array().unwrap().len(), 1);

    let body = body_json(handle(get("/properties?city=New%20Hamburg"), &db).unwrap());
    assert_eq!(body.as_array().unwrap().len(), 1);

    // Form-style '+' encoding of a space is accepted too.
    let body = body_json(handle(get("/properties?city=New+Hamburg"), &db).unwrap());
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[test]
fn unknown_slug_returns_404_with_detail() {
    let db = make_db("router_missing_slug");

    let err = handle(get("/properties/no-such-slug"), &db).unwrap_err();
    let resp = error_to_response(err);

    assert_eq!(resp.status(), 404);
    assert_eq!(body_json(resp)["detail"], "Property not found");
}

#[test]
fn unknown_route_returns_404() {
    let db = make_db("router_unknown_route");

    let err = handle(get("/nope"), &db).unwrap_err();
    assert_eq!(error_to_response(err).status(), 404);
}

#[test]
fn responses_carry_cors_headers() {
    let db = make_db("router_cors");

    let resp = handle(get("/"), &db).unwrap();
    assert_eq!(
        resp.headers()
            .get("Access-Control-Allow-Origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[test]
fn options_preflight_returns_204() {
    let db = make_db("router_preflight");

    let req = http::Request::builder()
        .method(Method::OPTIONS)
        .uri("/properties")
        .body(Body::empty())
        .unwrap();
    let resp = handle(req, &db).unwrap();

    assert_eq!(resp.status(), 204);
    assert!(resp.headers().contains_key("Access-Control-Allow-Methods"));
}

#[test]
fn test_endpoint_reports_store_and_env_state() {
    let db = make_db("router_diagnostics");

    let resp = handle(get("/test"), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_json(resp);
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["connection_status"], "Connected");
    let tables: Vec<&str> = body["collections"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert!(tables.contains(&"listings"));
}
