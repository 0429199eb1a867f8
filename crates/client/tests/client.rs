use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use camtel_api::{ApiConfig, EventClient, EventSource};
use camtel_client::{Client, Frontend};
use httpmock::Method::GET;
use httpmock::MockServer;

/// Frontend that makes one request through the injected source and exits.
struct OneShotFrontend;

#[async_trait]
impl Frontend for OneShotFrontend {
    async fn run(&mut self, source: Arc<dyn EventSource>) -> Result<()> {
        let persons = source.recent_persons(3).await?;
        anyhow::ensure!(persons.is_empty(), "expected no persons");
        Ok(())
    }
}

#[test]
fn build_requires_source_and_frontend() {
    let missing_source = Client::builder().frontend(OneShotFrontend).build();
    let err = missing_source.err().expect("source is required");
    assert!(err.to_string().contains(".source()"));

    let missing_frontend = Client::builder()
        .source(EventClient::new(&ApiConfig::default()))
        .build();
    let err = missing_frontend.err().expect("frontend is required");
    assert!(err.to_string().contains(".frontend()"));
}

#[tokio::test]
async fn frontend_reads_through_injected_source() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/persons/recent")
                .query_param("limit", "3");
            then.status(200).json_body(serde_json::json!([]));
        })
        .await;

    let client = Client::builder()
        .source(EventClient::new(&ApiConfig::new(server.base_url())))
        .frontend(OneShotFrontend)
        .build()
        .unwrap();

    client.run().await.unwrap();
    mock.assert_async().await;
}
