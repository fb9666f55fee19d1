//! End-to-end loading behavior: skipped records, duplicates, empty sources.

use std::net::SocketAddr;

use oui_registry::ServiceConfig;
use reqwest::StatusCode;
use serde_json::Value;

mod common;

#[tokio::test]
async fn malformed_records_are_skipped_not_fatal() {
    let addr: SocketAddr = "127.0.0.1:38281".parse().unwrap();
    let (shutdown, _file) = common::start_service(addr, common::SAMPLE_REGISTRY, ServiceConfig::default()).await;

    // The bogus record never loaded
    let res = reqwest::get(format!("http://{}/oui/GGGGGG", addr)).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Records after it still did
    let res = reqwest::get(format!("http://{}/oui/286FB9", addr)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    shutdown.trigger();
}

#[tokio::test]
async fn duplicate_prefix_keeps_first_record_everywhere() {
    let addr: SocketAddr = "127.0.0.1:38282".parse().unwrap();
    let (shutdown, _file) = common::start_service(addr, common::SAMPLE_REGISTRY, ServiceConfig::default()).await;

    let res = reqwest::get(format!("http://{}/oui/ACDE48", addr)).await.unwrap();
    let entry: Value = res.json().await.unwrap();
    assert_eq!(entry["vendor_name"], "Private");

    let res = reqwest::get(format!("http://{}/oui", addr)).await.unwrap();
    let entries: Vec<Value> = res.json().await.unwrap();
    let private_entries: Vec<&Value> = entries.iter().filter(|e| e["oui"] == "ACDE48").collect();
    assert_eq!(private_entries.len(), 1);
    assert_eq!(private_entries[0]["vendor_name"], "Private");

    shutdown.trigger();
}

#[tokio::test]
async fn empty_source_serves_empty_list() {
    let addr: SocketAddr = "127.0.0.1:38283".parse().unwrap();
    let (shutdown, _file) = common::start_service(addr, "", ServiceConfig::default()).await;

    let res = reqwest::get(format!("http://{}/oui", addr)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let entries: Vec<Value> = res.json().await.unwrap();
    assert!(entries.is_empty());

    let res = reqwest::get(format!("http://{}/oui/ACDE48", addr)).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    shutdown.trigger();
}
