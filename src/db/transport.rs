// Transport to the remote query endpoint.
//
// One POST per statement, JSON in and JSON out. Failures never escape as
// errors: an unreachable server or a garbled body becomes an offline outcome
// with the same `error_message` shape the server uses for its own errors.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::db::{QueryOutcome, QueryRequest, QueryResult};
use crate::error::Result;

/// Anything that can run a SQL statement somewhere
#[async_trait]
pub trait QueryTransport: Send + Sync {
    /// Send one statement and report what came back
    ///
    /// Exactly one attempt; implementations must not retry.
    async fn send(&self, sql: &str) -> QueryOutcome;
}

/// Reqwest-backed transport for the database's HTTP front end
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
}

impl HttpTransport {
    /// Build a transport for one endpoint
    ///
    /// No request timeout is set; a hung server leaves the caller waiting.
    pub fn new(endpoint: Url) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, endpoint))
    }

    /// Use a preconfigured reqwest client
    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl QueryTransport for HttpTransport {
    async fn send(&self, sql: &str) -> QueryOutcome {
        let request = QueryRequest {
            sql: sql.to_string(),
        };

        let response = match self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(endpoint = %self.endpoint, error = %e, "Database connection failed");
                return QueryOutcome::offline();
            }
        };

        // Status codes are not inspected: the server answers 400 with a JSON
        // error body, which is an application error, not a transport one.
        let status = response.status();
        match response.json::<Value>().await {
            Ok(body) => {
                tracing::trace!(%status, %body, "query response");
                QueryOutcome::connected(QueryResult::from_json(body))
            }
            Err(e) => {
                tracing::error!(%status, error = %e, "Database connection failed");
                QueryOutcome::offline()
            }
        }
    }
}
