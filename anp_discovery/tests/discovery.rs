// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

use serde_json::json;

use anp_did::CreateDidOptions;
use anp_did::DidIdentity;
use anp_did::DidManager;
use anp_discovery::AgentListing;
use anp_discovery::DiscoveryManager;

async fn test_identity() -> DidIdentity {
  DidManager::new()
    .unwrap()
    .create(&CreateDidOptions {
      domain: "example.com".to_owned(),
      port: None,
      path: None,
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn test_discover_follows_pagination() {
  let mut server: mockito::ServerGuard = mockito::Server::new_async().await;
  let domain: String = server.host_with_port();

  let second_page_url: String = format!("{}/.well-known/agent-descriptions?page=2", server.url());

  let first: mockito::Mock = server
    .mock("GET", "/.well-known/agent-descriptions")
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body(
      json!({
        "@type": "CollectionPage",
        "url": format!("{}/.well-known/agent-descriptions", server.url()),
        "items": [
          {"name": "Agent One", "did": "did:wba:example.com:one", "url": "https://example.com/one/ad.json"},
          {"name": "Agent Two", "url": "https://example.com/two/ad.json"}
        ],
        "next": second_page_url
      })
      .to_string(),
    )
    .create_async()
    .await;

  let second: mockito::Mock = server
    .mock("GET", "/.well-known/agent-descriptions?page=2")
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body(
      json!({
        "@type": "CollectionPage",
        "url": second_page_url,
        "items": [
          // Already listed on page one; dropped by URL de-duplication.
          {"name": "Agent Two", "url": "https://example.com/two/ad.json"},
          {"name": "Agent Three", "url": "https://example.com/three/ad.json"}
        ]
      })
      .to_string(),
    )
    .create_async()
    .await;

  let manager: DiscoveryManager = DiscoveryManager::new().unwrap();
  let listings: Vec<AgentListing> = manager.discover(&domain, None).await.unwrap();

  assert_eq!(listings.len(), 3);
  assert_eq!(listings[0].name, "Agent One");
  assert_eq!(listings[0].did.as_deref(), Some("did:wba:example.com:one"));
  assert_eq!(listings[2].name, "Agent Three");

  first.assert_async().await;
  second.assert_async().await;
}

#[tokio::test]
async fn test_discover_rejects_malformed_page() {
  let mut server: mockito::ServerGuard = mockito::Server::new_async().await;

  let _mock: mockito::Mock = server
    .mock("GET", "/.well-known/agent-descriptions")
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body(json!({"@type": "SomethingElse", "url": "x", "items": []}).to_string())
    .create_async()
    .await;

  let manager: DiscoveryManager = DiscoveryManager::new().unwrap();
  assert!(manager.discover(&server.host_with_port(), None).await.is_err());
}

#[tokio::test]
async fn test_discover_rejects_relative_next() {
  let mut server: mockito::ServerGuard = mockito::Server::new_async().await;

  let _mock: mockito::Mock = server
    .mock("GET", "/.well-known/agent-descriptions")
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body(
      json!({
        "@type": "CollectionPage",
        "url": "x",
        "items": [],
        "next": "/page-2"
      })
      .to_string(),
    )
    .create_async()
    .await;

  let manager: DiscoveryManager = DiscoveryManager::new().unwrap();
  assert!(manager.discover(&server.host_with_port(), None).await.is_err());
}

#[tokio::test]
async fn test_discover_rejects_scheme_in_domain() {
  let manager: DiscoveryManager = DiscoveryManager::new().unwrap();

  assert!(manager.discover("https://example.com", None).await.is_err());
}

#[tokio::test]
async fn test_register_posts_description_url() {
  let mut server: mockito::ServerGuard = mockito::Server::new_async().await;
  let identity: DidIdentity = test_identity().await;

  let mock: mockito::Mock = server
    .mock("POST", "/register")
    .match_header("authorization", mockito::Matcher::Regex("^DIDWba ".to_owned()))
    .match_body(mockito::Matcher::Json(json!({
      "agentDescriptionUrl": "https://example.com/agent/ad.json"
    })))
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body("{\"status\": \"registered\"}")
    .create_async()
    .await;

  let manager: DiscoveryManager = DiscoveryManager::new().unwrap();
  manager
    .register(
      &format!("{}/register", server.url()),
      "https://example.com/agent/ad.json",
      &identity,
    )
    .await
    .unwrap();

  mock.assert_async().await;
}

#[tokio::test]
async fn test_search_accepts_item_object() {
  let mut server: mockito::ServerGuard = mockito::Server::new_async().await;

  let _mock: mockito::Mock = server
    .mock("POST", "/search")
    .match_body(mockito::Matcher::Json(json!({"query": "hotel"})))
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body(json!({"items": [{"name": "Hotel Agent", "url": "https://h.example/ad.json"}]}).to_string())
    .create_async()
    .await;

  let manager: DiscoveryManager = DiscoveryManager::new().unwrap();
  let listings: Vec<AgentListing> = manager
    .search(&format!("{}/search", server.url()), "hotel", None)
    .await
    .unwrap();

  assert_eq!(listings.len(), 1);
  assert_eq!(listings[0].name, "Hotel Agent");
}

#[tokio::test]
async fn test_search_accepts_bare_array() {
  let mut server: mockito::ServerGuard = mockito::Server::new_async().await;

  let _mock: mockito::Mock = server
    .mock("POST", "/search")
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body(json!([{"name": "Hotel Agent", "url": "https://h.example/ad.json"}]).to_string())
    .create_async()
    .await;

  let manager: DiscoveryManager = DiscoveryManager::new().unwrap();
  let listings: Vec<AgentListing> = manager
    .search(&format!("{}/search", server.url()), "hotel", None)
    .await
    .unwrap();

  assert_eq!(listings.len(), 1);
}
