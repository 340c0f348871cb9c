// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use anp_core::convert::ToJson;
use anp_description::AgentDescription;
use anp_description::DescriptionManager;
use anp_description::DescriptionMetadata;
use anp_description::Interface;
use anp_did::CreateDidOptions;
use anp_did::DidIdentity;
use anp_did::DidManager;

const CHALLENGE: &str = "challenge-123";
const DOMAIN: &str = "localhost:9000";

async fn test_setup() -> (DescriptionManager, DidIdentity, AgentDescription) {
  let did_manager: Arc<DidManager> = Arc::new(DidManager::new().unwrap());
  let identity: DidIdentity = did_manager
    .create(&CreateDidOptions {
      domain: DOMAIN.to_owned(),
      port: None,
      path: Some("alice".to_owned()),
    })
    .await
    .unwrap();

  let description: AgentDescription = AgentDescription::new(DescriptionMetadata {
    name: "Simple Agent".to_owned(),
    did: Some(identity.did().to_string()),
    ..DescriptionMetadata::default()
  })
  .unwrap()
  .with_interface(Interface {
    type_: "StructuredInterface".to_owned(),
    protocol: "JSON-RPC 2.0".to_owned(),
    version: "2.0".to_owned(),
    url: "http://localhost:9000/alice/rpc".to_owned(),
    description: Some("The JSON-RPC endpoint".to_owned()),
  })
  .unwrap();

  let manager: DescriptionManager = DescriptionManager::new(did_manager).unwrap();

  (manager, identity, description)
}

#[tokio::test]
async fn test_sign_and_verify() {
  let (manager, identity, description) = test_setup().await;

  let signed: AgentDescription = manager.sign(&description, &identity, CHALLENGE, DOMAIN).await.unwrap();

  // The input document is unsigned; the output carries the proof.
  assert!(description.proof.is_none());
  let proof = signed.proof.as_ref().unwrap();
  assert_eq!(proof.type_, "Ed25519Signature2020");
  assert_eq!(proof.proof_purpose, "authentication");
  assert_eq!(proof.challenge, CHALLENGE);
  assert_eq!(proof.domain, DOMAIN);

  let valid: bool = manager.verify(&signed, Some(identity.document())).await.unwrap();
  assert!(valid);
}

#[tokio::test]
async fn test_verify_with_domain_and_challenge() {
  let (manager, identity, description) = test_setup().await;
  let signed: AgentDescription = manager.sign(&description, &identity, CHALLENGE, DOMAIN).await.unwrap();
  let document = Some(identity.document());

  assert!(manager.verify_with_domain(&signed, DOMAIN, document).await.unwrap());
  assert!(!manager.verify_with_domain(&signed, "evil.example", document).await.unwrap());
  assert!(manager.verify_with_challenge(&signed, CHALLENGE, document).await.unwrap());
  assert!(!manager.verify_with_challenge(&signed, "challenge-999", document).await.unwrap());
}

#[tokio::test]
async fn test_mutation_invalidates_proof() {
  let (manager, identity, description) = test_setup().await;
  let signed: AgentDescription = manager.sign(&description, &identity, CHALLENGE, DOMAIN).await.unwrap();

  let mut tampered: AgentDescription = signed.clone();
  tampered.name = "Sinister Agent".to_owned();

  assert!(!manager.verify(&tampered, Some(identity.document())).await.unwrap());
}

#[tokio::test]
async fn test_verify_without_proof_is_false() {
  let (manager, identity, description) = test_setup().await;

  assert!(!manager.verify(&description, Some(identity.document())).await.unwrap());
}

#[tokio::test]
async fn test_sign_requires_did() {
  let (manager, identity, _) = test_setup().await;
  let description: AgentDescription = AgentDescription::new(DescriptionMetadata {
    name: "No DID".to_owned(),
    ..DescriptionMetadata::default()
  })
  .unwrap();

  assert!(manager.sign(&description, &identity, CHALLENGE, DOMAIN).await.is_err());
}

#[tokio::test]
async fn test_resigning_replaces_existing_proof() {
  let (manager, identity, description) = test_setup().await;

  let first: AgentDescription = manager.sign(&description, &identity, CHALLENGE, DOMAIN).await.unwrap();
  let second: AgentDescription = manager.sign(&first, &identity, "challenge-456", DOMAIN).await.unwrap();

  assert_eq!(second.proof.as_ref().unwrap().challenge, "challenge-456");
  assert!(manager.verify(&second, Some(identity.document())).await.unwrap());
}

#[tokio::test]
async fn test_fetch_validates_structure() {
  let (manager, identity, description) = test_setup().await;
  let signed: AgentDescription = manager.sign(&description, &identity, CHALLENGE, DOMAIN).await.unwrap();

  let mut server: mockito::ServerGuard = mockito::Server::new_async().await;
  let _mock: mockito::Mock = server
    .mock("GET", "/ad.json")
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body(signed.to_json().unwrap())
    .create_async()
    .await;

  let fetched: AgentDescription = manager.fetch(&format!("{}/ad.json", server.url())).await.unwrap();
  assert_eq!(fetched, signed);

  let _bad: mockito::Mock = server
    .mock("GET", "/bad.json")
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body("{\"type\": \"SomethingElse\"}")
    .create_async()
    .await;

  assert!(manager.fetch(&format!("{}/bad.json", server.url())).await.is_err());
}
