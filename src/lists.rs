use crate::{
    client::{segment, Client},
    error::{Error, Result},
    models::{
        AllListOutput, CreateUpdateListInput, ListOutput, PaginatorInput, SubscribeListInput,
        SubscribeListOutput,
    },
};
use reqwest::Method;

/// Operations on lists and their subscribers, see <https://engage.so/docs/api/lists>.
///
/// Obtained with [`Client::lists`].
#[derive(Debug, Clone, Copy)]
pub struct Lists<'a> {
    client: &'a Client,
}

impl<'a> Lists<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Creates a list. `input.title` is required.
    pub async fn create_list(&self, input: &CreateUpdateListInput) -> Result<ListOutput> {
        if input.title.is_none() {
            return Err(Error::validation("title is required"));
        }

        let req = self.client.json_request(Method::POST, "/lists", input)?;
        self.client.make_request(req).await
    }

    /// Returns one page of lists. Follow `next_cursor`/`prev_cursor` from the
    /// output to move between pages.
    pub async fn get_all_lists(&self, input: &PaginatorInput) -> Result<AllListOutput> {
        input.validate()?;

        let req = self
            .client
            .new_request(Method::GET, &input.endpoint("/lists"), None)?;
        self.client.make_request(req).await
    }

    /// Retrieves a list by its id.
    pub async fn get_list(&self, id: &str) -> Result<ListOutput> {
        require_id(id)?;

        let req = self
            .client
            .new_request(Method::GET, &format!("/lists/{}", segment(id)), None)?;
        self.client.make_request(req).await
    }

    /// Updates the properties set in `input`; unlike creation the title may be left out.
    pub async fn update_list(&self, id: &str, input: &CreateUpdateListInput) -> Result<ListOutput> {
        require_id(id)?;

        let req = self
            .client
            .json_request(Method::PUT, &format!("/lists/{}", segment(id)), input)?;
        self.client.make_request(req).await
    }

    /// Archives a list. Only success or failure is reported.
    pub async fn archive_list(&self, id: &str) -> Result<()> {
        require_id(id)?;

        let req = self
            .client
            .new_request(Method::DELETE, &format!("/lists/{}", segment(id)), None)?;
        self.client.make_request_discarding(req).await
    }

    /// Creates (or reuses) a user and subscribes it to the list. Either an
    /// email or a number must be given.
    pub async fn subscribe_list(
        &self,
        id: &str,
        input: &SubscribeListInput,
    ) -> Result<SubscribeListOutput> {
        if input.email.is_none() && input.number.is_none() {
            return Err(Error::validation("email or number is required"));
        }
        require_id(id)?;

        let req = self.client.json_request(
            Method::POST,
            &format!("/lists/{}/subscribers", segment(id)),
            input,
        )?;
        self.client.make_request(req).await
    }

    /// Removes the user `uid` from the list. Both ids must be non-empty.
    pub async fn unsubscribe_list(&self, id: &str, uid: &str) -> Result<()> {
        require_id(id)?;
        if uid.is_empty() {
            return Err(Error::validation("uid is required"));
        }

        let req = self.client.new_request(
            Method::DELETE,
            &format!("/lists/{}/subscribers/{}", segment(id), segment(uid)),
            None,
        )?;
        self.client.make_request_discarding(req).await
    }
}

fn require_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(Error::validation("id is required"));
    }
    Ok(())
}
