// Reqwest-backed client for the demo REST API
use crate::application::remote_data::RemoteDataSource;
use crate::domain::comment::Comment;
use crate::domain::errors::{RemoteFetchError, Resource};
use crate::domain::user::User;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// One unauthenticated GET per collection; no retries and no timeout.
#[derive(Debug, Clone)]
pub struct PlaceholderApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl PlaceholderApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self, resource: Resource) -> String {
        format!("{}/{}", self.base_url, resource.path())
    }

    async fn fetch_collection<T: DeserializeOwned>(
        &self,
        resource: Resource,
    ) -> Result<Vec<T>, RemoteFetchError> {
        let url = self.collection_url(resource);
        tracing::debug!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| RemoteFetchError::Transport {
                resource,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteFetchError::Status {
                resource,
                status: status.as_u16(),
            });
        }

        let items = response
            .json::<Vec<T>>()
            .await
            .map_err(|e| RemoteFetchError::Decode {
                resource,
                message: e.to_string(),
            })?;

        tracing::debug!("Fetched {} {}", items.len(), resource);
        Ok(items)
    }
}

#[async_trait]
impl RemoteDataSource for PlaceholderApiClient {
    async fn fetch_users(&self) -> Result<Vec<User>, RemoteFetchError> {
        self.fetch_collection(Resource::Users).await
    }

    async fn fetch_comments(&self) -> Result<Vec<Comment>, RemoteFetchError> {
        self.fetch_collection(Resource::Comments).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::{Router, routing::get};

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/")
    }

    #[test]
    fn test_collection_url_trims_trailing_slash() {
        let client = PlaceholderApiClient::new("https://jsonplaceholder.typicode.com/");
        assert_eq!(
            client.collection_url(Resource::Comments),
            "https://jsonplaceholder.typicode.com/comments"
        );
    }

    #[tokio::test]
    async fn test_fetches_comments() {
        let router = Router::new().route(
            "/comments",
            get(|| async {
                r#"[{"postId":1,"id":1,"name":"n","email":"e@x.io","body":"b"}]"#
            }),
        );
        let client = PlaceholderApiClient::new(&serve(router).await);

        let comments = client.fetch_comments().await.unwrap();
        assert_eq!(comments, vec![Comment::new(1, 1, "n", "e@x.io", "b")]);
    }

    #[tokio::test]
    async fn test_non_success_status_names_resource() {
        let router = Router::new().route(
            "/users",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
        );
        let client = PlaceholderApiClient::new(&serve(router).await);

        match client.fetch_users().await {
            Err(RemoteFetchError::Status { resource, status }) => {
                assert_eq!(resource, Resource::Users);
                assert_eq!(status, 503);
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let router = Router::new().route("/comments", get(|| async { "{\"oops\": true}" }));
        let client = PlaceholderApiClient::new(&serve(router).await);

        let err = client.fetch_comments().await.unwrap_err();
        assert!(matches!(err, RemoteFetchError::Decode { .. }));
        assert_eq!(err.resource(), Resource::Comments);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = PlaceholderApiClient::new(&format!("http://{addr}"));
        let err = client.fetch_users().await.unwrap_err();
        assert!(matches!(err, RemoteFetchError::Transport { .. }));
    }
}
