use crate::{
    client::{segment, Client},
    error::{Error, Result},
    models::{
        AddUserEvent, CreateUserInput, ListUserOutput, PaginatorInput, UpdateUserAttributesInput,
        UserOutput,
    },
};
use reqwest::Method;

/// Operations on users, see <https://engage.so/docs/api/users>.
///
/// Obtained with [`Client::users`].
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    client: &'a Client,
}

impl<'a> Users<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Creates a new user. `input.id` must not be empty.
    pub async fn create(&self, input: &CreateUserInput) -> Result<UserOutput> {
        if input.id.is_empty() {
            return Err(Error::validation("id is required"));
        }

        let req = self.client.json_request(Method::POST, "/users", input)?;
        self.client.make_request(req).await
    }

    /// Fetches a user's profile.
    pub async fn get(&self, uid: &str) -> Result<UserOutput> {
        require_uid(uid)?;

        let req = self
            .client
            .new_request(Method::GET, &format!("/users/{}", segment(uid)), None)?;
        self.client.make_request(req).await
    }

    /// Returns one page of users. Follow `next_cursor`/`prev_cursor` from the
    /// output to move between pages.
    pub async fn list(&self, input: &PaginatorInput) -> Result<ListUserOutput> {
        input.validate()?;

        let req = self
            .client
            .new_request(Method::GET, &input.endpoint("/users"), None)?;
        self.client.make_request(req).await
    }

    /// Updates the attributes that are set in `input`.
    pub async fn update_attributes(
        &self,
        uid: &str,
        input: &UpdateUserAttributesInput,
    ) -> Result<UserOutput> {
        require_uid(uid)?;

        let req = self
            .client
            .json_request(Method::PUT, &format!("/users/{}", segment(uid)), input)?;
        self.client.make_request(req).await
    }

    /// Records an event for the user. Only success or failure is reported.
    pub async fn add_event(&self, uid: &str, event: &AddUserEvent) -> Result<()> {
        require_uid(uid)?;

        let req = self.client.json_request(
            Method::PUT,
            &format!("/users/{}/events", segment(uid)),
            event,
        )?;
        self.client.make_request_discarding(req).await
    }
}

fn require_uid(uid: &str) -> Result<()> {
    if uid.is_empty() {
        return Err(Error::validation("uid is required"));
    }
    Ok(())
}
