//! Tests for JenkinsClient::invoke().
//!
//! Verifies endpoint selection (build vs buildWithParameters), form
//! encoding, queue item location extraction, and credential forwarding.

use capstan_client::{ClientError, Credentials, JenkinsClient};
use capstan_core::{BuildParameters, JobPath};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn job(path: &str) -> JobPath {
    path.parse().unwrap()
}

#[tokio::test]
async fn invoke_without_params_posts_to_build() {
    let server = MockServer::start().await;
    let queue_url = format!("{}/queue/item/7/", server.uri());

    Mock::given(method("POST"))
        .and(path("/job/jobX/build"))
        .respond_with(ResponseTemplate::new(201).insert_header("Location", queue_url.as_str()))
        .expect(1)
        .mount(&server)
        .await;

    let client = JenkinsClient::new(server.uri(), None);
    let handle = client.invoke(&job("jobX"), None).await.unwrap();

    assert_eq!(handle.job().to_string(), "jobX");
    assert_eq!(
        handle.queue_url(),
        format!("{}/queue/item/7", server.uri()),
        "trailing slash of the announced location is normalized away"
    );
}

#[tokio::test]
async fn invoke_with_params_posts_encoded_form() {
    let server = MockServer::start().await;
    let queue_url = format!("{}/queue/item/12/", server.uri());

    Mock::given(method("POST"))
        .and(path("/job/teamA/job/jobX/buildWithParameters"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("branch=main&clean=true"))
        .respond_with(ResponseTemplate::new(201).insert_header("Location", queue_url.as_str()))
        .expect(1)
        .mount(&server)
        .await;

    let mut params = BuildParameters::new();
    params.insert("branch", "main");
    params.insert("clean", "true");

    let client = JenkinsClient::new(server.uri(), None);
    let handle = client
        .invoke(&job("teamA/jobX"), Some(&params))
        .await
        .unwrap();

    assert_eq!(handle.job().to_string(), "teamA/jobX");
}

#[tokio::test]
async fn invoke_with_empty_params_falls_back_to_plain_build() {
    let server = MockServer::start().await;
    let queue_url = format!("{}/queue/item/3/", server.uri());

    Mock::given(method("POST"))
        .and(path("/job/jobX/build"))
        .respond_with(ResponseTemplate::new(201).insert_header("Location", queue_url.as_str()))
        .expect(1)
        .mount(&server)
        .await;

    let client = JenkinsClient::new(server.uri(), None);
    let params = BuildParameters::new();
    client.invoke(&job("jobX"), Some(&params)).await.unwrap();
}

#[tokio::test]
async fn invoke_without_queue_location_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/job/jobX/build"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let client = JenkinsClient::new(server.uri(), None);
    let err = client.invoke(&job("jobX"), None).await.unwrap_err();

    assert!(matches!(err, ClientError::MissingQueueLocation));
}

#[tokio::test]
async fn invoke_surfaces_server_rejection() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/job/jobX/build"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&server)
        .await;

    let client = JenkinsClient::new(server.uri(), None);
    let err = client.invoke(&job("jobX"), None).await.unwrap_err();

    match err {
        ClientError::ApiError { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "forbidden");
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn invoke_forwards_basic_auth() {
    let server = MockServer::start().await;
    let queue_url = format!("{}/queue/item/1/", server.uri());

    Mock::given(method("POST"))
        .and(path("/job/jobX/build"))
        .and(header("authorization", "Basic YWxpY2U6c2VjcmV0"))
        .respond_with(ResponseTemplate::new(201).insert_header("Location", queue_url.as_str()))
        .expect(1)
        .mount(&server)
        .await;

    let credentials = Credentials {
        username: "alice".to_string(),
        password: Some("secret".to_string()),
    };
    let client = JenkinsClient::new(server.uri(), Some(credentials));
    client.invoke(&job("jobX"), None).await.unwrap();
}
