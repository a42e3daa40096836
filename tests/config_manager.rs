//! End-to-end behaviour of the config manager endpoint over TCP.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use camera_mock::client::{CameraClient, ClientError};
use reqwest::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, WWW_AUTHENTICATE};
use reqwest::StatusCode;

mod common;

use common::{endpoint, http_client, start_server, DIGEST_HEADER};

const GET_MOTION: &str = "action=getConfig&name=MotionDetect";

fn nonce_of(challenge: &str) -> String {
    challenge
        .split("nonce=\"")
        .nth(1)
        .and_then(|rest| rest.split('"').next())
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn unauthenticated_request_gets_a_fresh_challenge() {
    let (handle, _) = start_server().await;
    let client = http_client();

    let mut nonces = HashSet::new();
    for _ in 0..3 {
        let res = client.get(endpoint(&handle, GET_MOTION)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let challenge = res.headers()[WWW_AUTHENTICATE].to_str().unwrap().to_string();
        assert!(challenge.starts_with("Digest realm=\"Camera\""));
        assert!(challenge.contains("algorithm=MD5"));
        assert!(challenge.contains("qop=\"auth\""));

        let nonce = nonce_of(&challenge);
        assert_eq!(nonce.len(), 32);
        assert!(nonce.chars().all(|c| c.is_ascii_hexdigit()));
        nonces.insert(nonce);

        assert_eq!(res.headers()[CONTENT_TYPE], "text/plain");
        assert_eq!(res.text().await.unwrap(), "401 Unauthorized");
    }
    assert_eq!(nonces.len(), 3);

    handle.stop().await.unwrap();
}

#[tokio::test]
async fn incomplete_digest_header_is_challenged_again() {
    let (handle, _) = start_server().await;

    let res = http_client()
        .get(endpoint(&handle, GET_MOTION))
        .header(AUTHORIZATION, r#"Digest username="ipc", realm="Camera", nonce="abc""#)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert!(res.headers().contains_key(WWW_AUTHENTICATE));

    handle.stop().await.unwrap();
}

#[tokio::test]
async fn challenge_then_retry_returns_the_table() {
    let (handle, _) = start_server().await;
    let client = http_client();

    let res = client.get(endpoint(&handle, GET_MOTION)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .get(endpoint(&handle, GET_MOTION))
        .header(AUTHORIZATION, DIGEST_HEADER)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[CONTENT_TYPE], "text/plain");

    let declared: usize = res.headers()[CONTENT_LENGTH].to_str().unwrap().parse().unwrap();
    let body = res.text().await.unwrap();
    assert_eq!(declared, body.len());
    assert_eq!(
        body,
        "table.MotionDetect[0].Enable=false\n\
         table.MotionDetect[0].Sensitivity=3\n\
         table.MotionDetect[0].Threshold=15\n"
    );

    handle.stop().await.unwrap();
}

#[tokio::test]
async fn set_config_delays_and_is_visible_to_later_reads() {
    let (handle, motion) = start_server().await;
    let client = http_client();

    let started = Instant::now();
    let res = client
        .get(endpoint(&handle, "action=setConfig&MotionDetect[0].Enable=true"))
        .header(AUTHORIZATION, DIGEST_HEADER)
        .send()
        .await
        .unwrap();
    assert!(started.elapsed() >= Duration::from_millis(100));
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "OK");
    assert!(motion.get());

    let body = client
        .get(endpoint(&handle, GET_MOTION))
        .header(AUTHORIZATION, DIGEST_HEADER)
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("table.MotionDetect[0].Enable=true"));

    client
        .get(endpoint(&handle, "action=setConfig&MotionDetect[0].Enable=false"))
        .header(AUTHORIZATION, DIGEST_HEADER)
        .send()
        .await
        .unwrap();
    assert!(!motion.get());

    handle.stop().await.unwrap();
}

#[tokio::test]
async fn enable_values_are_case_insensitive_true_only() {
    let (handle, motion) = start_server().await;
    let client = http_client();

    for (value, expected) in [("TRUE", true), ("yes", false), ("True", true), ("1", false)] {
        let res = client
            .get(endpoint(
                &handle,
                &format!("action=setConfig&MotionDetect[0].Enable={value}"),
            ))
            .header(AUTHORIZATION, DIGEST_HEADER)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(motion.get(), expected, "Enable={value}");
    }

    handle.stop().await.unwrap();
}

#[tokio::test]
async fn first_enable_key_in_query_order_is_applied() {
    let (handle, motion) = start_server().await;
    let client = http_client();

    let res = client
        .get(endpoint(
            &handle,
            "action=setConfig&MotionDetect[].Enable=false&MotionDetect[0].Enable=true",
        ))
        .header(AUTHORIZATION, DIGEST_HEADER)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(!motion.get());

    let body = client
        .get(endpoint(&handle, GET_MOTION))
        .header(AUTHORIZATION, DIGEST_HEADER)
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.starts_with("table.MotionDetect[0].Enable=false\n"));

    handle.stop().await.unwrap();
}

#[tokio::test]
async fn non_ascii_digest_username_is_accepted() {
    let (handle, _) = start_server().await;

    let value = reqwest::header::HeaderValue::from_bytes(
        "Digest username=\"Jürgen\", realm=\"Camera\", nonce=\"abc\", uri=\"/\", response=\"x\""
            .as_bytes(),
    )
    .unwrap();
    let res = http_client()
        .get(endpoint(&handle, GET_MOTION))
        .header(AUTHORIZATION, value)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    handle.stop().await.unwrap();
}

#[tokio::test]
async fn rejects_bad_names_actions_and_paths() {
    let (handle, motion) = start_server().await;
    let client = http_client();

    let cases = [
        (endpoint(&handle, "action=getConfig&name=Something"), StatusCode::BAD_REQUEST),
        (endpoint(&handle, "action=snapshot"), StatusCode::BAD_REQUEST),
        (endpoint(&handle, "action=setConfig&MotionDetect[0].Enable="), StatusCode::BAD_REQUEST),
        (format!("http://{}/nonexistent", handle.local_addr()), StatusCode::NOT_FOUND),
    ];

    for (url, expected) in cases {
        let res = client
            .get(&url)
            .header(AUTHORIZATION, DIGEST_HEADER)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), expected, "{url}");
    }
    assert!(!motion.get());

    handle.stop().await.unwrap();
}

#[tokio::test]
async fn digest_client_round_trip() {
    let (handle, _) = start_server().await;
    let client = CameraClient::new(
        common::base_url(&handle),
        "ipc",
        "pass",
        Duration::from_secs(2),
    )
    .unwrap();

    assert!(!client.motion_status().await.unwrap());
    client.set_motion(true).await.unwrap();
    assert!(client.motion_status().await.unwrap());
    client.set_motion(false).await.unwrap();
    assert!(!client.motion_status().await.unwrap());

    handle.stop().await.unwrap();
}

#[tokio::test]
async fn stopped_server_refuses_connections() {
    let (handle, _) = start_server().await;
    let base = common::base_url(&handle);
    handle.stop().await.unwrap();

    let client = CameraClient::new(base, "ipc", "pass", Duration::from_secs(1)).unwrap();
    assert!(matches!(
        client.motion_status().await,
        Err(ClientError::Transport(_))
    ));
}
