use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Free-form attributes attached to users, events and subscriptions.
pub type Meta = Map<String, Value>;

/// Decodes an explicit `null` as the type's default, the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// Users

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct UserOutput {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub uid: String,
    /// Informational only, the client never enforces it.
    #[serde(rename = "uid_updateable")]
    #[serde(deserialize_with = "null_as_default")]
    pub uid_updatable: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub devices: Vec<UserDevice>,
    #[serde(deserialize_with = "null_as_default")]
    pub lists: Vec<UserList>,
    #[serde(deserialize_with = "null_as_default")]
    pub segments: Vec<UserSegment>,
    #[serde(deserialize_with = "null_as_default")]
    pub meta: Meta,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct UserDevice {
    #[serde(deserialize_with = "null_as_default")]
    pub token: String,
    #[serde(deserialize_with = "null_as_default")]
    pub platform: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct UserList {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subscribed: bool,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct UserSegment {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub suppressed: bool,
}

/// A page of users. An empty cursor means there is no page in that direction.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ListUserOutput {
    #[serde(deserialize_with = "null_as_default")]
    pub data: Vec<UserOutput>,
    #[serde(deserialize_with = "null_as_default")]
    pub next_cursor: String,
    #[serde(deserialize_with = "null_as_default")]
    pub prev_cursor: String,
}

impl ListUserOutput {
    pub fn has_next(&self) -> bool {
        !self.next_cursor.is_empty()
    }

    pub fn has_prev(&self) -> bool {
        !self.prev_cursor.is_empty()
    }
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct CreateUserInput {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lists: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl CreateUserInput {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_first_name<S: Into<String>>(mut self, first_name: S) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn with_last_name<S: Into<String>>(mut self, last_name: S) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_number<S: Into<String>>(mut self, number: S) -> Self {
        self.number = Some(number.into());
        self
    }

    pub fn with_lists(mut self, lists: Vec<String>) -> Self {
        self.lists = Some(lists);
        self
    }

    pub fn with_device<T, P>(mut self, token: T, platform: P) -> Self
    where
        T: Into<String>,
        P: Into<String>,
    {
        self.device_token = Some(token.into());
        self.device_platform = Some(platform.into());
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = Some(meta);
        self
    }
}

/// A partial update: only the fields that are `Some` are sent, everything
/// else is left untouched on the server.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct UpdateUserAttributesInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lists: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl UpdateUserAttributesInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_first_name<S: Into<String>>(mut self, first_name: S) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn with_last_name<S: Into<String>>(mut self, last_name: S) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_number<S: Into<String>>(mut self, number: S) -> Self {
        self.number = Some(number.into());
        self
    }

    pub fn with_lists(mut self, lists: Vec<String>) -> Self {
        self.lists = Some(lists);
        self
    }

    pub fn with_device<T, P>(mut self, token: T, platform: P) -> Self
    where
        T: Into<String>,
        P: Into<String>,
    {
        self.device_token = Some(token.into());
        self.device_platform = Some(platform.into());
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = Some(meta);
        self
    }
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct AddUserEvent {
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Meta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl AddUserEvent {
    pub fn new<S: Into<String>>(event: S) -> Self {
        Self {
            event: event.into(),
            ..Default::default()
        }
    }

    pub fn with_value<V: Into<Value>>(mut self, value: V) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_properties(mut self, properties: Meta) -> Self {
        self.properties = Some(properties);
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

// Lists

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ListOutput {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subscriber_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub broadcast_count: u64,
    #[serde(rename = "double_optin")]
    #[serde(deserialize_with = "null_as_default")]
    pub double_opt_in: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub redirect_url: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// A page of lists. An empty cursor means there is no page in that direction.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct AllListOutput {
    #[serde(deserialize_with = "null_as_default")]
    pub data: Vec<ListOutput>,
    #[serde(deserialize_with = "null_as_default")]
    pub next_cursor: String,
    #[serde(deserialize_with = "null_as_default")]
    pub prev_cursor: String,
}

impl AllListOutput {
    pub fn has_next(&self) -> bool {
        !self.next_cursor.is_empty()
    }

    pub fn has_prev(&self) -> bool {
        !self.prev_cursor.is_empty()
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SubscribeListOutput {
    #[serde(deserialize_with = "null_as_default")]
    pub uid: String,
}

/// Used both to create a list (title required) and to update one (every
/// field optional).
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateUpdateListInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(rename = "double_optin", skip_serializing_if = "Option::is_none")]
    pub double_opt_in: Option<bool>,
}

impl CreateUpdateListInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_redirect_url<S: Into<String>>(mut self, redirect_url: S) -> Self {
        self.redirect_url = Some(redirect_url.into());
        self
    }

    pub fn with_double_opt_in(mut self, double_opt_in: bool) -> Self {
        self.double_opt_in = Some(double_opt_in);
        self
    }
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct SubscribeListInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl SubscribeListInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_first_name<S: Into<String>>(mut self, first_name: S) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn with_last_name<S: Into<String>>(mut self, last_name: S) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_number<S: Into<String>>(mut self, number: S) -> Self {
        self.number = Some(number.into());
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = Some(meta);
        self
    }
}

// Pagination

/// Cursor based pagination. `next_cursor` and `prev_cursor` can not be used
/// together.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaginatorInput {
    pub limit: Option<u32>,
    pub next_cursor: Option<String>,
    pub prev_cursor: Option<String>,
}

impl PaginatorInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_next_cursor<S: Into<String>>(mut self, cursor: S) -> Self {
        self.next_cursor = Some(cursor.into());
        self
    }

    pub fn with_prev_cursor<S: Into<String>>(mut self, cursor: S) -> Self {
        self.prev_cursor = Some(cursor.into());
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.next_cursor.is_some() && self.prev_cursor.is_some() {
            return Err(Error::validation(
                "cannot use next and prev cursor at the same time",
            ));
        }
        Ok(())
    }

    /// Appends the query string to `endpoint`, leaving it bare when no field is set.
    pub(crate) fn endpoint(&self, endpoint: &str) -> String {
        let query = self.to_query();
        if query.is_empty() {
            endpoint.to_string()
        } else {
            format!("{endpoint}?{query}")
        }
    }

    /// Encodes the set fields as a query string, without the leading `?`.
    /// Keys come out in a stable order: `limit`, then the cursor.
    pub(crate) fn to_query(&self) -> String {
        let mut params = vec![];
        if let Some(limit) = self.limit {
            params.push(format!("limit={limit}"));
        }
        match (&self.next_cursor, &self.prev_cursor) {
            (Some(next), None) => params.push(format!("next_cursor={}", urlencoding::encode(next))),
            (None, Some(prev)) => params.push(format!("prev_cursor={}", urlencoding::encode(prev))),
            _ => {}
        }
        params.join("&")
    }
}
