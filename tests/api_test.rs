//! End-to-end tests against a live catalog server.

use serde_json::{json, Value};

mod common;

fn field<'a>(body: &'a Value, name: &str) -> Vec<&'a str> {
    body.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|c| c[name].as_str().unwrap())
        .collect()
}

const MODEL_ORDER: [&str; 5] = [
    "Legion 5",
    "Lenovo Thinkpad",
    "Macbook Pro",
    "Surface Pro 6",
    "Surface Pro 7",
];

#[tokio::test]
async fn test_list_sorted_by_model() {
    let server = common::start_server().await;
    let client = common::client();

    let (status, body) = common::get_json(&client, &server, "/computers/").await;
    assert_eq!(status, 200);
    assert_eq!(field(&body, "model"), MODEL_ORDER);

    server.stop().await;
}

#[tokio::test]
async fn test_filter_screen_size() {
    let server = common::start_server().await;
    let client = common::client();

    let (status, body) = common::get_json(&client, &server, "/computers/?screen_size=13in").await;
    assert_eq!(status, 200);
    assert_eq!(
        field(&body, "model"),
        vec!["Lenovo Thinkpad", "Surface Pro 6", "Surface Pro 7"]
    );
    assert_eq!(field(&body, "id"), vec!["1", "5", "4"]);
    assert!(field(&body, "screen_size").iter().all(|s| *s == "13in"));

    server.stop().await;
}

#[tokio::test]
async fn test_filter_without_matches() {
    let server = common::start_server().await;
    let client = common::client();

    let (status, body) = common::get_json(&client, &server, "/computers/?screen_size=99in").await;
    assert_eq!(status, 200);
    assert_eq!(body, json!([]));

    let (_, body) = common::get_json(&client, &server, "/computers/?screen_size=13").await;
    assert_eq!(body, json!([]), "partial values must not match");

    let (_, body) = common::get_json(&client, &server, "/computers/?price=999").await;
    assert_eq!(body, json!([]), "unknown fields match nothing");

    server.stop().await;
}

#[tokio::test]
async fn test_multiple_filters() {
    let server = common::start_server().await;
    let client = common::client();

    let (_, body) =
        common::get_json(&client, &server, "/computers/?screen_size=13in&disk_space=512GB").await;
    assert_eq!(field(&body, "id"), vec!["1", "5"]);

    let (_, body) = common::get_json(&client, &server, "/computers/?model=Legion%205").await;
    assert_eq!(field(&body, "id"), vec!["2"]);

    server.stop().await;
}

#[tokio::test]
async fn test_sorted_endpoint() {
    let server = common::start_server().await;
    let client = common::client();

    let (status, body) = common::get_json(&client, &server, "/computers/sorted/").await;
    assert_eq!(status, 200);
    assert_eq!(field(&body, "id"), vec!["1", "2", "3", "4", "5"]);

    let (status, body) = common::get_json(&client, &server, "/computers/sorted/?model").await;
    assert_eq!(status, 200);
    assert_eq!(field(&body, "model"), MODEL_ORDER);

    let (_, body) =
        common::get_json(&client, &server, "/computers/sorted/?screen_size=x&model").await;
    assert_eq!(
        field(&body, "screen_size"),
        vec!["13in", "13in", "13in", "15in", "17in"],
        "only the first parameter name selects the sort"
    );

    let (_, body) = common::get_json(&client, &server, "/computers/sorted/?price").await;
    assert_eq!(field(&body, "id"), vec!["1", "2", "3", "4", "5"]);

    server.stop().await;
}

#[tokio::test]
async fn test_unknown_path() {
    let server = common::start_server().await;
    let client = common::client();

    let (status, body) = common::get_json(&client, &server, "/nonexistent").await;
    assert_eq!(status, 404);
    assert_eq!(body, json!({ "result": "wrong path" }));

    server.stop().await;
}

#[tokio::test]
async fn test_record_shape() {
    let server = common::start_server().await;
    let client = common::client();

    let res = client.get(server.url("/computers/?id=1")).send().await.unwrap();
    assert_eq!(
        res.headers().get("content-type").unwrap(),
        "application/json"
    );
    assert!(res.headers().contains_key("x-request-id"));
    let text = res.text().await.unwrap();
    assert_eq!(
        text,
        r#"[{"id":"1","model":"Lenovo Thinkpad","disk_space":"512GB","screen_size":"13in"}]"#
    );

    server.stop().await;
}

#[tokio::test]
async fn test_requests_do_not_mutate_dataset() {
    let server = common::start_server().await;
    let client = common::client();

    let (_, baseline) = common::get_json(&client, &server, "/computers/").await;

    for path in [
        "/computers/?screen_size=13in",
        "/computers/sorted/?disk_space",
        "/computers/sorted/?id",
        "/computers/?model=Macbook%20Pro",
        "/computers/sorted/?screen_size",
    ] {
        let (status, _) = common::get_json(&client, &server, path).await;
        assert_eq!(status, 200, "{path}");
    }

    let (_, after) = common::get_json(&client, &server, "/computers/").await;
    assert_eq!(baseline, after);

    let (_, sorted) = common::get_json(&client, &server, "/computers/sorted/").await;
    assert_eq!(field(&sorted, "id"), vec!["1", "2", "3", "4", "5"]);

    server.stop().await;
}

#[tokio::test]
async fn test_repeated_requests_are_byte_identical() {
    let server = common::start_server().await;
    let client = common::client();

    let url = server.url("/computers/?screen_size=13in");
    let first = client.get(&url).send().await.unwrap().bytes().await.unwrap();
    for _ in 0..5 {
        let next = client.get(&url).send().await.unwrap().bytes().await.unwrap();
        assert_eq!(first, next);
    }

    server.stop().await;
}

#[tokio::test]
async fn test_missing_slash_redirects() {
    let server = common::start_server().await;
    let client = common::client();

    let res = client
        .get(server.url("/computers?screen_size=13in"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 308);
    assert_eq!(
        res.headers().get("location").unwrap(),
        "/computers/?screen_size=13in"
    );

    server.stop().await;
}
