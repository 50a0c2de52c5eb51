// Profile service - Use case for showing the first user's profile
use crate::application::page::PageController;
use crate::application::remote_data::RemoteDataSource;
use crate::domain::errors::{EmptyResultError, PageError, Resource};
use crate::domain::user::User;
use std::sync::Arc;

#[derive(Clone)]
pub struct ProfileService {
    source: Arc<dyn RemoteDataSource>,
}

impl ProfileService {
    pub fn new(source: Arc<dyn RemoteDataSource>) -> Self {
        Self { source }
    }

    /// Start loading the profile. An empty user list is an error, not a
    /// ready page.
    pub fn mount(&self) -> PageController<User> {
        let source = self.source.clone();

        PageController::mount("profile", async move {
            let users = source.fetch_users().await?;
            let first = users.into_iter().next().ok_or(EmptyResultError {
                resource: Resource::Users,
            })?;
            Ok::<_, PageError>(first)
        })
    }
}
