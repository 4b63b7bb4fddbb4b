#![allow(dead_code)]

use engage_so::{Client, Config, Credentials};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const PUBLIC_KEY: &str = "my_public_key";
pub const PRIVATE_KEY: &str = "my_private_key";

pub const USER_UID: &str = "123456789";
pub const LIST_ID: &str = "ASDEWSDEWQQASZXDSED";

pub async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let config = Config::new().with_credentials(Credentials::new(PUBLIC_KEY, PRIVATE_KEY));
    let client = Client::new(config).unwrap().with_base_url(server.uri());
    (server, client)
}

pub fn fake_user() -> Value {
    json!({
        "id": "5fc6477241fcec31a9548e98",
        "uid": USER_UID,
        "uid_updateable": false,
        "first_name": "Heroshe",
        "last_name": "Engineering",
        "number": "987456321",
        "email": "someone@heroshe.com",
        "devices": [
            { "token": "QWERTYUIOP", "platform": "ANDROID" },
            { "token": "ASDFGHJKL", "platform": "APPLE" }
        ],
        "lists": [
            { "id": "ALL_USERS", "subscribed": true },
            { "id": "MOBILE_USERS", "subscribed": false }
        ],
        "segments": [
            { "id": "ACTIVE_USERS", "suppressed": true },
            { "id": "CHURNED_USERS", "suppressed": true }
        ],
        "meta": {
            "property_a": "value_a",
            "property_b": "value_b"
        },
        "created_at": "2021-06-01T10:00:00Z"
    })
}

pub fn fake_list() -> Value {
    json!({
        "id": LIST_ID,
        "title": "Waiting List",
        "description": "Waiting List",
        "subscriber_count": 10,
        "broadcast_count": 10,
        "double_optin": true,
        "redirect_url": "https://test.com/landing",
        "created_at": "2021-06-01T10:00:00Z"
    })
}

/// `true` when the mock server never saw a request.
pub async fn no_requests(server: &MockServer) -> bool {
    server
        .received_requests()
        .await
        .map(|reqs| reqs.is_empty())
        .unwrap_or(true)
}
