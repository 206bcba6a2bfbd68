use bola::oracle::Oracle;
use bola::oracle::yesno::YesNoOracle;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn oracle_for(server: &MockServer) -> YesNoOracle {
    YesNoOracle::new(Some(format!("{}/api", server.uri())))
}

#[tokio::test]
async fn returns_payload_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "answer": "Yes",
            "forced": false,
            "image": "https://x/y.gif"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let answer = oracle_for(&server).resolve().await;
    assert_eq!(answer.answer, "Yes");
    assert_eq!(answer.image_url(), Some("https://x/y.gif"));
    assert!(answer.message.is_none());
    assert!(!answer.is_error());
}

#[tokio::test]
async fn keeps_remote_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "answer": "maybe",
            "image": "",
            "message": "ask again later"
        })))
        .mount(&server)
        .await;

    let answer = oracle_for(&server).resolve().await;
    assert_eq!(answer.answer, "maybe");
    assert!(answer.image_url().is_none());
    assert_eq!(answer.message.as_deref(), Some("ask again later"));
}

#[tokio::test]
async fn server_error_becomes_error_answer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let oracle = oracle_for(&server);
    assert!(oracle.fetch().await.is_err());

    let answer = oracle.resolve().await;
    assert_eq!(answer.answer, "error");
    assert_eq!(
        answer.message.as_deref(),
        Some("Ups... No pude consultar la bola mágica.")
    );
}

#[tokio::test]
async fn malformed_body_becomes_error_answer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
        .mount(&server)
        .await;

    assert!(oracle_for(&server).resolve().await.is_error());
}

#[tokio::test]
async fn missing_answer_field_becomes_error_answer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "image": "https://x/y.gif"
        })))
        .mount(&server)
        .await;

    assert!(oracle_for(&server).resolve().await.is_error());
}

#[tokio::test]
async fn unreachable_endpoint_becomes_error_answer() {
    let server = MockServer::start().await;
    let url = format!("{}/api", server.uri());
    drop(server);

    let answer = YesNoOracle::new(Some(url)).resolve().await;
    assert!(answer.is_error());
}
