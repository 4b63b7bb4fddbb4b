mod common;

use common::{fake_list, no_requests, setup, LIST_ID, USER_UID};
use engage_so::{CreateUpdateListInput, Error, PaginatorInput, SubscribeListInput};
use serde_json::json;
use wiremock::{
    matchers::{body_json, method, path, query_param},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn create_list_returns_the_new_list() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/lists"))
        .and(body_json(json!({
            "title": "Waiting List",
            "description": "Waiting List",
            "redirect_url": "https://test.com/landing",
            "double_optin": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(fake_list()))
        .expect(1)
        .mount(&server)
        .await;

    let input = CreateUpdateListInput::new()
        .with_title("Waiting List")
        .with_description("Waiting List")
        .with_redirect_url("https://test.com/landing")
        .with_double_opt_in(true);
    let list = client.lists().create_list(&input).await.unwrap();

    assert_eq!(list.title, "Waiting List");
    assert_eq!(list.redirect_url, "https://test.com/landing");
    assert_eq!(list.subscriber_count, 10);
    assert_eq!(list.broadcast_count, 10);
    assert!(list.double_opt_in);
}

#[tokio::test]
async fn create_list_requires_a_title() {
    let (server, client) = setup().await;

    let input = CreateUpdateListInput::new().with_description("no title");
    let err = client.lists().create_list(&input).await.unwrap_err();

    assert!(err.is_validation());
    assert!(no_requests(&server).await);
}

#[tokio::test]
async fn get_all_lists_returns_a_page() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/lists"))
        .and(query_param("prev_cursor", "xyz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [fake_list(), fake_list(), fake_list()],
            "next_cursor": "abc",
            "prev_cursor": ""
        })))
        .expect(1)
        .mount(&server)
        .await;

    let lists = client
        .lists()
        .get_all_lists(&PaginatorInput::new().with_prev_cursor("xyz"))
        .await
        .unwrap();

    assert_eq!(lists.data.len(), 3);
    assert!(lists.has_next());
    assert!(!lists.has_prev());
}

#[tokio::test]
async fn get_all_lists_rejects_both_cursors() {
    let (server, client) = setup().await;

    let input = PaginatorInput::new()
        .with_next_cursor("a")
        .with_prev_cursor("b");
    let err = client.lists().get_all_lists(&input).await.unwrap_err();

    assert!(err.is_validation());
    assert!(no_requests(&server).await);
}

#[tokio::test]
async fn get_list_by_id() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path(format!("/lists/{LIST_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(fake_list()))
        .mount(&server)
        .await;

    let list = client.lists().get_list(LIST_ID).await.unwrap();

    assert_eq!(list.id, LIST_ID);
    assert_eq!(list.title, "Waiting List");
    assert_eq!(list.subscriber_count, 10);
}

#[tokio::test]
async fn get_list_requires_an_id() {
    let (server, client) = setup().await;

    let err = client.lists().get_list("").await.unwrap_err();

    assert!(err.is_validation());
    assert!(no_requests(&server).await);
}

#[tokio::test]
async fn update_list_without_title() {
    let (server, client) = setup().await;
    let mut updated = fake_list();
    updated["description"] = json!("Closed");
    Mock::given(method("PUT"))
        .and(path(format!("/lists/{LIST_ID}")))
        .and(body_json(json!({ "description": "Closed" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated))
        .expect(1)
        .mount(&server)
        .await;

    let input = CreateUpdateListInput::new().with_description("Closed");
    let list = client.lists().update_list(LIST_ID, &input).await.unwrap();

    assert_eq!(list.description, "Closed");
    assert_eq!(list.title, "Waiting List");
}

#[tokio::test]
async fn archive_list_accepts_an_empty_body() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path(format!("/lists/{LIST_ID}")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.lists().archive_list(LIST_ID).await.unwrap();
}

#[tokio::test]
async fn archive_list_reports_missing_list() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/lists/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("List not found"))
        .mount(&server)
        .await;

    let err = client.lists().archive_list("missing").await.unwrap_err();

    assert!(matches!(err, Error::Api { code: 404, ref message } if message == "List not found"));
}

#[tokio::test]
async fn subscribe_list_returns_the_uid() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path(format!("/lists/{LIST_ID}/subscribers")))
        .and(body_json(json!({ "first_name": "Heroshe", "email": "someone@heroshe.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "uid": USER_UID })))
        .expect(1)
        .mount(&server)
        .await;

    let input = SubscribeListInput::new()
        .with_first_name("Heroshe")
        .with_email("someone@heroshe.com");
    let output = client.lists().subscribe_list(LIST_ID, &input).await.unwrap();

    assert_eq!(output.uid, USER_UID);
}

#[tokio::test]
async fn subscribe_list_needs_email_or_number() {
    let (server, client) = setup().await;

    let input = SubscribeListInput::new().with_first_name("Heroshe");
    let err = client
        .lists()
        .subscribe_list(LIST_ID, &input)
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert!(no_requests(&server).await);
}

#[tokio::test]
async fn unsubscribe_list_deletes_the_subscriber() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path(format!("/lists/{LIST_ID}/subscribers/{USER_UID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    client
        .lists()
        .unsubscribe_list(LIST_ID, USER_UID)
        .await
        .unwrap();
}

#[tokio::test]
async fn unsubscribe_list_validates_both_ids() {
    let (server, client) = setup().await;

    let err = client.lists().unsubscribe_list("", USER_UID).await.unwrap_err();
    assert!(err.is_validation());

    let err = client.lists().unsubscribe_list(LIST_ID, "").await.unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("uid"));

    assert!(no_requests(&server).await);
}

#[tokio::test]
async fn get_list_accepts_null_properties() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path(format!("/lists/{LIST_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": LIST_ID,
            "title": "Waiting List",
            "description": null,
            "subscriber_count": null,
            "double_optin": null,
            "redirect_url": null
        })))
        .mount(&server)
        .await;

    let list = client.lists().get_list(LIST_ID).await.unwrap();

    assert_eq!(list.title, "Waiting List");
    assert_eq!(list.description, "");
    assert_eq!(list.subscriber_count, 0);
    assert_eq!(list.broadcast_count, 0);
    assert!(!list.double_opt_in);
    assert!(list.created_at.is_none());
}

#[tokio::test]
async fn get_all_lists_accepts_null_data_and_cursors() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/lists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "next_cursor": null,
            "prev_cursor": null
        })))
        .mount(&server)
        .await;

    let lists = client
        .lists()
        .get_all_lists(&PaginatorInput::new())
        .await
        .unwrap();

    assert!(lists.data.is_empty());
    assert!(!lists.has_next());
    assert!(!lists.has_prev());
}
