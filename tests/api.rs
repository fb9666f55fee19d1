//! Endpoint integration tests for the lookup service.

use std::net::SocketAddr;

use oui_registry::ServiceConfig;
use reqwest::StatusCode;
use serde_json::Value;

mod common;

#[tokio::test]
async fn health_probe_responds() {
    let addr: SocketAddr = "127.0.0.1:38181".parse().unwrap();
    let (shutdown, _file) = common::start_service(addr, common::SAMPLE_REGISTRY, ServiceConfig::default()).await;

    let res = reqwest::get(format!("http://{}/", addr)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "app is ok!");

    shutdown.trigger();
}

#[tokio::test]
async fn list_returns_valid_entries_in_source_order() {
    let addr: SocketAddr = "127.0.0.1:38182".parse().unwrap();
    let (shutdown, _file) = common::start_service(addr, common::SAMPLE_REGISTRY, ServiceConfig::default()).await;

    let res = reqwest::get(format!("http://{}/oui", addr)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let entries: Vec<Value> = res.json().await.unwrap();
    // Non-hex record and the duplicate are excluded
    assert_eq!(entries.len(), 3);
    let ouis: Vec<&str> = entries.iter().map(|e| e["oui"].as_str().unwrap()).collect();
    assert_eq!(ouis, ["ACDE48", "00A0C9", "286FB9"]);
    assert_eq!(entries[1]["vendor_name"], "Intel Corporation");
    assert_eq!(entries[1]["vendor_alternate_name"], "Intel Corporation - HF1-06");

    shutdown.trigger();
}

#[tokio::test]
async fn get_is_case_insensitive_and_exact() {
    let addr: SocketAddr = "127.0.0.1:38183".parse().unwrap();
    let (shutdown, _file) = common::start_service(addr, common::SAMPLE_REGISTRY, ServiceConfig::default()).await;

    for prefix in ["ACDE48", "acde48", "AC-DE-48"] {
        let res = reqwest::get(format!("http://{}/oui/{}", addr, prefix)).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK, "prefix {prefix} should match");
        let entry: Value = res.json().await.unwrap();
        assert_eq!(entry["oui"], "ACDE48");
        assert_eq!(entry["vendor_name"], "Private");
    }

    for prefix in ["FFFFFF", "ACDE", "ACDE4811"] {
        let res = reqwest::get(format!("http://{}/oui/{}", addr, prefix)).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "prefix {prefix} should not match");
    }

    shutdown.trigger();
}

#[tokio::test]
async fn resolve_accepts_common_address_forms() {
    let addr: SocketAddr = "127.0.0.1:38184".parse().unwrap();
    let (shutdown, _file) = common::start_service(addr, common::SAMPLE_REGISTRY, ServiceConfig::default()).await;

    for address in ["AC-DE-48-11-22-33", "ac:de:48:11:22:33", "ACDE48112233", "acde.4811.2233"] {
        let res = reqwest::get(format!("http://{}/mac/{}", addr, address)).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK, "address {address} should resolve");
        assert_eq!(res.text().await.unwrap(), "Private");
    }

    shutdown.trigger();
}

#[tokio::test]
async fn resolve_rejects_malformed_or_unknown_addresses() {
    let addr: SocketAddr = "127.0.0.1:38185".parse().unwrap();
    let (shutdown, _file) = common::start_service(addr, common::SAMPLE_REGISTRY, ServiceConfig::default()).await;

    // Too short, too long, unknown prefix, non-hex
    for address in ["AC-DE-48", "AC-DE-48-11-22-33-44", "FF-FF-FF-11-22-33", "zz-zz-zz-zz-zz-zz"] {
        let res = reqwest::get(format!("http://{}/mac/{}", addr, address)).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "address {address} should not resolve");
    }

    shutdown.trigger();
}

#[tokio::test]
async fn admin_status_requires_bearer_key() {
    let addr: SocketAddr = "127.0.0.1:38186".parse().unwrap();
    let mut config = ServiceConfig::default();
    config.admin.enabled = true;
    config.admin.api_key = "test-admin-key".into();
    let (shutdown, _file) = common::start_service(addr, common::SAMPLE_REGISTRY, config).await;

    let client = reqwest::Client::new();
    let url = format!("http://{}/admin/status", addr);

    let res = client.get(&url).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client.get(&url).bearer_auth("wrong-key").send().await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client.get(&url).bearer_auth("test-admin-key").send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let status: Value = res.json().await.unwrap();
    assert_eq!(status["status"], "operational");
    assert_eq!(status["oui_count"], 3);

    shutdown.trigger();
}

#[tokio::test]
async fn admin_routes_absent_when_disabled() {
    let addr: SocketAddr = "127.0.0.1:38187".parse().unwrap();
    let (shutdown, _file) = common::start_service(addr, common::SAMPLE_REGISTRY, ServiceConfig::default()).await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("http://{}/admin/status", addr))
        .bearer_auth("test-admin-key")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    shutdown.trigger();
}
