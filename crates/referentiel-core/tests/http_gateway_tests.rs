//! HTTP gateway tests against a mock backend

use referentiel_core::catalogue::{JobSkill, JobSkillDraft, JobSkills, Skill, SkillDraft, Skills};
use referentiel_core::gateway::{HttpGateway, RecordGateway};
use referentiel_core::Error;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn skills_gateway(server: &MockServer) -> HttpGateway<Skills> {
    HttpGateway::builder()
        .api_url(format!("{}/api", server.uri()))
        .timeout_secs(5)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_list_fetches_full_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/competences"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "nom": "Rust"},
            {"id": 2, "nom": "Go"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = skills_gateway(&server).await;
    let skills = gateway.list().await.unwrap();

    assert_eq!(skills, vec![Skill::new(1, "Rust"), Skill::new(2, "Go")]);
}

#[tokio::test]
async fn test_create_posts_draft() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/competences"))
        .and(body_json(json!({"nom": "Rust"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 10, "nom": "Rust"})))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = skills_gateway(&server).await;
    let created = gateway
        .create(&SkillDraft {
            nom: "Rust".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(created, Skill::new(10, "Rust"));
}

#[tokio::test]
async fn test_update_puts_to_item_url() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/competences-poste/4"))
        .and(body_json(json!({"nom": "SQL", "description": "Requêtes"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 4, "nom": "SQL", "description": "Requêtes"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway: HttpGateway<JobSkills> =
        HttpGateway::new(format!("{}/api", server.uri())).unwrap();
    let updated = gateway
        .update(
            4,
            &JobSkillDraft {
                nom: "SQL".to_string(),
                description: Some("Requêtes".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated, JobSkill::new(4, "SQL").with_description("Requêtes"));
}

#[tokio::test]
async fn test_delete_accepts_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/competences/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = skills_gateway(&server).await;
    gateway.delete(3).await.unwrap();
}

#[tokio::test]
async fn test_error_body_text_becomes_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/competences"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Cette compétence existe déjà"))
        .mount(&server)
        .await;

    let gateway = skills_gateway(&server).await;
    let err = gateway
        .create(&SkillDraft {
            nom: "Rust".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Api { status: 400, .. }));
    assert_eq!(err.server_message(), Some("Cette compétence existe déjà"));
}

#[tokio::test]
async fn test_error_json_message_field() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/competences/9"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": 404,
            "error": "Not Found",
            "message": "Compétence 9 introuvable"
        })))
        .mount(&server)
        .await;

    let gateway = skills_gateway(&server).await;
    let err = gateway.delete(9).await.unwrap_err();

    assert_eq!(err.server_message(), Some("Compétence 9 introuvable"));
}

#[tokio::test]
async fn test_error_without_body_has_no_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/competences"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let gateway = skills_gateway(&server).await;
    let err = gateway.list().await.unwrap_err();

    assert!(matches!(err, Error::Api { status: 500, message: None }));
    assert_eq!(err.server_message(), None);
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/competences"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let gateway = skills_gateway(&server).await;
    let err = gateway.list().await.unwrap_err();

    assert!(matches!(err, Error::InvalidResponse(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // Nothing listens on the tcpmux port locally.
    let gateway: HttpGateway<Skills> = HttpGateway::new("http://127.0.0.1:1/api").unwrap();
    let err = gateway.list().await.unwrap_err();

    assert!(matches!(err, Error::NetworkError(_)));
    assert_eq!(err.code(), "E100");
}
