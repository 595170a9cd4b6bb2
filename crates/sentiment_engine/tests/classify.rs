use std::net::TcpListener;
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sentiment_engine::{
    Classification, Classifier, ClassifySettings, EngineEvent, EngineHandle, FailureKind,
    ReqwestClassifier,
};

fn wire_body() -> serde_json::Value {
    json!({
        "Label": "Positive",
        "Negative Class": 0.1,
        "Negative Class Log": -2.3,
        "Positive Class": 0.9,
        "Positive Class Log": -0.1,
        "Prediction": "Positive",
        "Text": "great day"
    })
}

fn settings_for(server: &MockServer) -> ClassifySettings {
    ClassifySettings {
        base_url: server.uri(),
        ..ClassifySettings::default()
    }
}

#[tokio::test]
async fn classifier_posts_json_and_parses_the_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sentiment"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "text": "great day" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(wire_body()))
        .expect(1)
        .mount(&server)
        .await;

    let classifier = ReqwestClassifier::new(&settings_for(&server)).expect("classifier");

    let classification = classifier.classify("great day").await.expect("classify ok");
    assert_eq!(
        classification,
        Classification {
            label: "Positive".to_string(),
            negative: 0.1,
            negative_log: -2.3,
            positive: 0.9,
            positive_log: -0.1,
            prediction: "Positive".to_string(),
            text: "great day".to_string(),
        }
    );
}

#[tokio::test]
async fn classifier_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sentiment"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let classifier = ReqwestClassifier::new(&settings_for(&server)).expect("classifier");

    let err = classifier.classify("anything").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn classifier_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sentiment"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(wire_body()),
        )
        .mount(&server)
        .await;

    let settings = ClassifySettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let classifier = ReqwestClassifier::new(&settings).expect("classifier");

    let err = classifier.classify("slow").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn classifier_rejects_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sentiment"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "application/json"))
        .mount(&server)
        .await;

    let classifier = ReqwestClassifier::new(&settings_for(&server)).expect("classifier");

    let err = classifier.classify("garbled").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidBody);
}

#[tokio::test]
async fn classifier_reports_unreachable_hosts_as_network_errors() {
    // Bind and release a port, so nobody is listening on it.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("local addr").port()
    };
    let settings = ClassifySettings {
        base_url: format!("http://127.0.0.1:{port}"),
        ..ClassifySettings::default()
    };
    let classifier = ReqwestClassifier::new(&settings).expect("classifier");

    let err = classifier.classify("unreachable").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
}

#[test]
fn invalid_base_url_fails_at_construction() {
    let settings = ClassifySettings {
        base_url: "not a url".to_string(),
        ..ClassifySettings::default()
    };

    let err = ReqwestClassifier::new(&settings).unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidBaseUrl);

    let err = EngineHandle::new(&settings).err().expect("engine refuses");
    assert_eq!(err.kind, FailureKind::InvalidBaseUrl);
}

#[test]
fn engine_round_trips_a_classification() {
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/sentiment"))
            .respond_with(ResponseTemplate::new(200).set_body_json(wire_body()))
            .mount(&server)
            .await;
        server
    });

    let (engine, events) = EngineHandle::new(&settings_for(&server)).expect("engine");
    engine.classify(7, "great day");

    let event = events
        .recv_timeout(Duration::from_secs(5))
        .expect("completion event");
    let EngineEvent::Classified { request_id, result } = event;
    assert_eq!(request_id, 7);
    assert_eq!(result.expect("classify ok").prediction, "Positive");
}
