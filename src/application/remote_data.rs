// Port for the read-only remote API
use crate::domain::comment::Comment;
use crate::domain::errors::RemoteFetchError;
use crate::domain::user::User;
use async_trait::async_trait;

#[async_trait]
pub trait RemoteDataSource: Send + Sync {
    /// Fetch the full user list in one request
    async fn fetch_users(&self) -> Result<Vec<User>, RemoteFetchError>;

    /// Fetch the full comment list in one request
    async fn fetch_comments(&self) -> Result<Vec<Comment>, RemoteFetchError>;
}
