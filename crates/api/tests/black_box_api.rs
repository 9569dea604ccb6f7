use reqwest::StatusCode;
use serde_json::{Value, json};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, bound to an ephemeral port.
        let app = openchoreo_api::app::build_app();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn create_environment(client: &reqwest::Client, srv: &TestServer, name: &str) {
    let res = client
        .post(srv.url("/api/v1/namespaces/ns1/environments"))
        .json(&json!({
            "name": name,
            "spec": {"dataPlaneRef": "dp-default", "isProduction": false}
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn health_endpoint_responds() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(srv.url("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn component_create_then_get_round_trip() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/api/v1/namespaces/ns1/components"))
        .json(&json!({
            "name": "svc1",
            "spec": {
                "projectName": "proj1",
                "type": "service",
                "displayName": "Service One",
                "autoDeploy": true,
                "parameters": {"replicas": 2}
            }
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await.unwrap();

    // Server-assigned metadata is present on the response...
    assert!(created["uid"].is_string());
    assert!(created["creationTimestamp"].is_string());
    assert_eq!(created["namespace"], "ns1");
    // ...controller-owned status is not part of the wire schema.
    assert!(created.get("status").is_none());

    let res = client
        .get(srv.url("/api/v1/namespaces/ns1/components/svc1"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let got: Value = res.json().await.unwrap();
    assert_eq!(got["name"], "svc1");
    assert_eq!(got["spec"]["type"], "service");
    assert_eq!(got["spec"]["displayName"], "Service One");
    assert_eq!(got["spec"]["parameters"]["replicas"], 2);
}

#[tokio::test]
async fn duplicate_component_conflicts() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let body = json!({"name": "svc1", "spec": {"projectName": "p", "type": "service"}});
    let url = srv.url("/api/v1/namespaces/ns1/components");

    let res = client.post(&url).json(&body).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client.post(&url).json(&body).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let err: Value = res.json().await.unwrap();
    assert_eq!(err["error"], "already_exists");
}

#[tokio::test]
async fn unknown_resource_is_not_found() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(srv.url("/api/v1/namespaces/ns1/components/missing"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let err: Value = res.json().await.unwrap();
    assert_eq!(err["error"], "not_found");
    assert_eq!(err["message"], "Component not found");
}

#[tokio::test]
async fn missing_body_is_a_bad_request() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let res = client
        .post(srv.url("/api/v1/namespaces/ns1/components"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn component_requires_a_type() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let res = client
        .post(srv.url("/api/v1/namespaces/ns1/components"))
        .json(&json!({"name": "svc1", "spec": {"projectName": "p"}}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let err: Value = res.json().await.unwrap();
    assert_eq!(err["error"], "validation_error");
}

#[tokio::test]
async fn invalid_release_state_is_an_inbound_conversion_error() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let res = client
        .post(srv.url("/api/v1/namespaces/ns1/releasebindings"))
        .json(&json!({
            "name": "svc1-dev",
            "spec": {
                "componentName": "svc1",
                "environment": "dev",
                "releaseState": "HalfDeployed"
            }
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let err: Value = res.json().await.unwrap();
    assert_eq!(err["error"], "bad_request");
}

#[tokio::test]
async fn list_paginates_with_opaque_cursors() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for name in ["env-a", "env-b", "env-c", "env-d", "env-e"] {
        create_environment(&client, &srv, name).await;
    }

    let res = client
        .get(srv.url("/api/v1/namespaces/ns1/environments?limit=2"))
        .send()
        .await
        .unwrap();
    let page1: Value = res.json().await.unwrap();
    assert_eq!(page1["items"].as_array().unwrap().len(), 2);
    assert_eq!(page1["items"][0]["name"], "env-a");
    assert_eq!(page1["items"][1]["name"], "env-b");
    assert_eq!(page1["pagination"]["count"], 2);
    let cursor = page1["pagination"]["nextCursor"].as_str().unwrap();

    let res = client
        .get(srv.url(&format!(
            "/api/v1/namespaces/ns1/environments?limit=2&cursor={cursor}"
        )))
        .send()
        .await
        .unwrap();
    let page2: Value = res.json().await.unwrap();
    assert_eq!(page2["items"][0]["name"], "env-c");
    assert_eq!(page2["items"][1]["name"], "env-d");
    let cursor = page2["pagination"]["nextCursor"].as_str().unwrap();

    let res = client
        .get(srv.url(&format!(
            "/api/v1/namespaces/ns1/environments?limit=2&cursor={cursor}"
        )))
        .send()
        .await
        .unwrap();
    let page3: Value = res.json().await.unwrap();
    assert_eq!(page3["items"].as_array().unwrap().len(), 1);
    assert_eq!(page3["items"][0]["name"], "env-e");
    assert_eq!(page3["pagination"]["count"], 1);
    // End of list: no cursor in the descriptor.
    assert!(page3["pagination"].get("nextCursor").is_none());
}

#[tokio::test]
async fn out_of_range_limits_are_clamped_not_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for name in ["env-a", "env-b", "env-c"] {
        create_environment(&client, &srv, name).await;
    }

    // limit=0 is raised to 1.
    let res = client
        .get(srv.url("/api/v1/namespaces/ns1/environments?limit=0"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let page: Value = res.json().await.unwrap();
    assert_eq!(page["items"].as_array().unwrap().len(), 1);

    // An absurd limit is capped, and the request still succeeds.
    let res = client
        .get(srv.url("/api/v1/namespaces/ns1/environments?limit=100000"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let page: Value = res.json().await.unwrap();
    assert_eq!(page["items"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn namespaces_are_isolated() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    create_environment(&client, &srv, "dev").await;

    let res = client
        .get(srv.url("/api/v1/namespaces/ns2/environments"))
        .send()
        .await
        .unwrap();
    let page: Value = res.json().await.unwrap();
    assert!(page["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn organizations_are_cluster_scoped() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/api/v1/organizations"))
        .json(&json!({"name": "acme", "spec": {"displayName": "Acme Corp"}}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await.unwrap();
    // Cluster-scoped: no namespace on the wire object.
    assert!(created.get("namespace").is_none());

    let res = client
        .get(srv.url("/api/v1/organizations/acme"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .delete(srv.url("/api/v1/organizations/acme"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    create_environment(&client, &srv, "dev").await;

    let res = client
        .delete(srv.url("/api/v1/namespaces/ns1/environments/dev"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client
        .get(srv.url("/api/v1/namespaces/ns1/environments/dev"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn environment_update_replaces_spec_and_keeps_identity() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    create_environment(&client, &srv, "dev").await;

    let res = client
        .get(srv.url("/api/v1/namespaces/ns1/environments/dev"))
        .send()
        .await
        .unwrap();
    let before: Value = res.json().await.unwrap();

    // The body carries a different name; the path decides which resource
    // is replaced.
    let res = client
        .put(srv.url("/api/v1/namespaces/ns1/environments/dev"))
        .json(&json!({
            "name": "renamed",
            "spec": {"dataPlaneRef": "dp-east", "isProduction": true}
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await.unwrap();

    assert_eq!(updated["name"], "dev");
    assert_eq!(updated["spec"]["dataPlaneRef"], "dp-east");
    assert_eq!(updated["spec"]["isProduction"], true);
    // Server-managed metadata survives the replace.
    assert_eq!(updated["uid"], before["uid"]);
    assert_eq!(updated["creationTimestamp"], before["creationTimestamp"]);
    assert!(updated.get("status").is_none());

    let res = client
        .get(srv.url("/api/v1/namespaces/ns1/environments/dev"))
        .send()
        .await
        .unwrap();
    let got: Value = res.json().await.unwrap();
    assert_eq!(got["spec"]["dataPlaneRef"], "dp-east");
}

#[tokio::test]
async fn update_of_missing_resource_is_not_found() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .put(srv.url("/api/v1/namespaces/ns1/workloads/missing"))
        .json(&json!({
            "name": "missing",
            "spec": {"componentName": "svc1"}
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let err: Value = res.json().await.unwrap();
    assert_eq!(err["error"], "not_found");
    assert_eq!(err["message"], "Workload not found");
}

#[tokio::test]
async fn update_validates_required_fields() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    create_environment(&client, &srv, "dev").await;

    let res = client
        .put(srv.url("/api/v1/namespaces/ns1/environments/dev"))
        .json(&json!({"name": "dev", "spec": {"isProduction": false}}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let err: Value = res.json().await.unwrap();
    assert_eq!(err["error"], "validation_error");
}
