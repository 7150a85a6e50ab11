use crate::config::BACKEND_TIMEOUT;
use crate::error::{Error, Result};
use crate::models::user::UserRecord;
use reqwest::{Client, StatusCode};

#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    users_url: String,
}

impl BackendClient {
    pub fn new(users_url: String) -> Result<Self> {
        let client = Client::builder().timeout(BACKEND_TIMEOUT).build()?;
        Ok(Self { client, users_url })
    }

    pub fn users_url(&self) -> &str {
        &self.users_url
    }

    /// Fails on transport errors, any status other than 200 and bodies that
    /// are not a JSON array of user objects.
    pub async fn fetch_users(&self) -> Result<Vec<UserRecord>> {
        let response = self.client.get(&self.users_url).send().await?;
        if response.status() != StatusCode::OK {
            return Err(Error::BackendStatus(response.status()));
        }
        let users = response.json::<Vec<UserRecord>>().await?;
        Ok(users)
    }
}
