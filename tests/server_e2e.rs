//! End-to-end tests over a real TCP listener.

use std::time::Duration;

use serde_json::Value;

use pathgate::routing::MatchPolicy;

mod common;

#[tokio::test]
async fn test_live_server_routes_and_gates() {
    let (addr, shutdown, handle) = common::spawn_server(MatchPolicy::LastRegistered).await;
    let client = reqwest::Client::new();
    let base = format!("http://{addr}");

    let res = client.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["content-type"], "application/json");
    assert!(res.headers().contains_key("x-request-id"));
    assert_eq!(res.text().await.unwrap(), pathgate::health::HEALTH_BODY);

    let res = client.get(format!("{base}/api/user/42")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["params"]["id"], "42");

    let res = client.post(format!("{base}/users/7")).send().await.unwrap();
    assert_eq!(res.status(), 404);
    assert_eq!(
        res.text().await.unwrap(),
        r#"{"error": "The method for this route doesnt exist"}"#
    );

    let res = client.get(format!("{base}/users/7/posts")).send().await.unwrap();
    assert_eq!(res.status(), 404);
    assert_eq!(res.text().await.unwrap(), r#"{"error": "Route not found"}"#);

    drop(client);
    shutdown.trigger();
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not stop")
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn test_live_server_concurrent_clients() {
    let (addr, shutdown, handle) = common::spawn_server(MatchPolicy::LastRegistered).await;
    let client = reqwest::Client::new();

    let concurrency = 16;
    let requests_per_task = 20;

    let mut tasks = Vec::with_capacity(concurrency);
    for worker in 0..concurrency {
        let client = client.clone();
        tasks.push(tokio::spawn(async move {
            for n in 0..requests_per_task {
                let id = format!("{worker}-{n}");
                let body: Value = client
                    .get(format!("http://{addr}/users/{id}"))
                    .send()
                    .await
                    .unwrap()
                    .json()
                    .await
                    .unwrap();
                assert_eq!(body["params"]["id"], id.as_str());
            }
        }));
    }

    for task in tasks {
        task.await.unwrap();
    }

    drop(client);
    shutdown.trigger();
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not stop")
        .unwrap()
        .unwrap();
}
