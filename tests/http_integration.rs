//! Integration tests for the catalog client using wiremock
//!
//! These tests run the real `CatalogClient` against mocked endpoints,
//! verifying the wire contract: collection reads, single-record reads
//! with not-found detection, creation defaults, and deletion.

use aventura::api::client::CatalogClient;
use aventura::api::model::{NewAdventure, DEFAULT_FULL_DESCRIPTION};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> CatalogClient {
    CatalogClient::new(&format!("{}/aventuras", server.uri())).expect("client should build")
}

mod collection_reads {
    use super::*;

    /// The full collection parses into typed records
    #[tokio::test]
    async fn fetch_all_returns_records() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/aventuras"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "nome": "Chapada dos Veadeiros", "destaque": true},
                {"id": 2, "nome": "Trilha do Ouro", "destaque": false}
            ])))
            .mount(&server)
            .await;

        let records = client_for(&server).fetch_all().await.expect("should fetch");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "1");
        assert_eq!(records[0].name, "Chapada dos Veadeiros");
        assert!(records[0].featured);
        assert!(!records[1].featured);
    }

    /// An empty collection is valid and yields no records
    #[tokio::test]
    async fn fetch_all_empty_collection() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/aventuras"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let records = client_for(&server).fetch_all().await.expect("should fetch");
        assert!(records.is_empty());
    }

    /// A non-success status on the list read is an error for the caller
    #[tokio::test]
    async fn fetch_all_server_error_is_err() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/aventuras"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = client_for(&server).fetch_all().await;
        assert!(result.is_err());
    }
}

mod single_reads {
    use super::*;

    /// A single record is fetched by its sub-path
    #[tokio::test]
    async fn fetch_one_returns_record() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/aventuras/3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 3,
                "nome": "Pico da Bandeira",
                "localizacao": "MG/ES",
                "atracoes": ["Nascer do sol"]
            })))
            .mount(&server)
            .await;

        let record = client_for(&server)
            .fetch_one("3")
            .await
            .expect("request should succeed")
            .expect("record should exist");

        assert_eq!(record.id, "3");
        assert_eq!(record.location, "MG/ES");
        assert_eq!(record.attractions.len(), 1);
    }

    /// Not-found is reported via `None`, not via an error
    #[tokio::test]
    async fn fetch_one_missing_record_is_none() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/aventuras/999"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .fetch_one("999")
            .await
            .expect("request should succeed");
        assert!(result.is_none());
    }
}

mod mutations {
    use super::*;

    /// Creation posts the wire shape with the client-assigned defaults
    #[tokio::test]
    async fn create_posts_defaults() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/aventuras"))
            .and(body_partial_json(json!({
                "nome": "Trilha do Ouro",
                "conteudo_completo": DEFAULT_FULL_DESCRIPTION,
                "imagem_principal": "https://img/card.jpg",
                "imagem_card": "https://img/card.jpg",
                "atracoes": [],
                "destaque": false
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "f3a9",
                "nome": "Trilha do Ouro"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let record = NewAdventure::from_form(
            "Trilha do Ouro",
            "Serra da Bocaina",
            "Moderada",
            "Travessia histórica",
            "https://img/card.jpg",
        );

        client_for(&server)
            .create(&record)
            .await
            .expect("creation should succeed");
    }

    /// A rejected creation surfaces as an error
    #[tokio::test]
    async fn create_failure_is_err() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/aventuras"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let record = NewAdventure::from_form("a", "b", "c", "d", "e");
        let result = client_for(&server).create(&record).await;
        assert!(result.is_err());
    }

    /// Deletion targets exactly the identified record
    #[tokio::test]
    async fn remove_deletes_by_id() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/aventuras/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server)
            .remove("7")
            .await
            .expect("deletion should succeed");
    }

    /// Deleting a missing record is an error
    #[tokio::test]
    async fn remove_missing_record_is_err() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/aventuras/999"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = client_for(&server).remove("999").await;
        assert!(result.is_err());
    }
}
