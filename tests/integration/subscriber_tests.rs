// Integration tests for subscriber endpoints

use crate::common;
use chrono::{SecondsFormat, TimeZone};
use createsend_client::prelude::*;
use mockito::Matcher;
use serde_json::json;

const EMAIL: &str = "jane@example.com";

fn email_query() -> Matcher {
    Matcher::UrlEncoded("email".into(), EMAIL.into())
}

#[tokio::test]
async fn test_add_subscriber_omits_unset_fields() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/subscribers/l1.json")
        .match_body(Matcher::Json(json!({"EmailAddress": EMAIL})))
        .with_status(201)
        .with_body(format!("\"{EMAIL}\""))
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    client
        .add_subscriber("l1", &NewSubscriber::new(EMAIL))
        .await
        .expect("Failed to add subscriber");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_add_subscriber_with_all_fields() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/subscribers/l1.json")
        .match_body(Matcher::Json(json!({
            "EmailAddress": EMAIL,
            "Name": "Jane Doe",
            "CustomFields": [
                {"Key": "website", "Value": "https://jane.example.com"},
                {"Key": "age", "Value": 42}
            ],
            "Resubscribe": true,
            "RestartSubscriptionBasedAutoresponders": true,
            "ConsentToTrack": "Yes"
        })))
        .with_status(201)
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let subscriber = NewSubscriber::new(EMAIL)
        .with_name("Jane Doe")
        .with_custom_field("website", "https://jane.example.com")
        .with_custom_field("age", 42)
        .with_resubscribe(true)
        .with_restart_autoresponders(true)
        .with_consent_to_track(ConsentToTrack::Yes);

    client
        .add_subscriber("l1", &subscriber)
        .await
        .expect("Failed to add subscriber");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_subscriber() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/subscribers/l1.json")
        .match_query(email_query())
        .match_body(Matcher::Json(json!({
            "EmailAddress": "jane.doe@example.com",
            "Name": "Jane Doe"
        })))
        .with_status(200)
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let update = NewSubscriber::new("jane.doe@example.com")
        .with_name("Jane Doe");
    client
        .update_subscriber("l1", EMAIL, &update)
        .await
        .expect("Failed to update subscriber");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_resubscribe() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/subscribers/l1.json")
        .match_query(email_query())
        .match_body(Matcher::Json(json!({
            "EmailAddress": EMAIL,
            "Resubscribe": true
        })))
        .with_status(200)
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    client
        .resubscribe("l1", EMAIL)
        .await
        .expect("Failed to resubscribe");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_subscriber_translates_date() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/subscribers/l1.json")
        .match_query(email_query())
        .with_status(200)
        .with_body(
            json!({
                "EmailAddress": EMAIL,
                "Name": "Jane Doe",
                "Date": "2010-10-25 10:28:00",
                "ListJoinedDate": "2010-10-20 08:00:00",
                "State": "Active",
                "CustomFields": [{"Key": "[website]", "Value": "https://jane.example.com"}],
                "ReadsEmailWith": "Gmail",
                "ConsentToTrack": "Yes"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let subscriber = client
        .get_subscriber("l1", EMAIL)
        .await
        .expect("Failed to get subscriber");

    mock.assert_async().await;
    let expected = Utc.with_ymd_and_hms(2010, 10, 25, 10, 28, 0).unwrap();
    assert_eq!(subscriber.date, Some(expected));
    assert_eq!(
        subscriber.date_rfc3339().as_deref(),
        Some(expected.to_rfc3339_opts(SecondsFormat::Secs, true).as_str())
    );
    assert_eq!(
        subscriber.date_rfc3339().as_deref(),
        Some("2010-10-25T10:28:00Z")
    );
    assert!(subscriber.is_active());
    assert_eq!(subscriber.reads_email_with, "Gmail");
    assert_eq!(
        subscriber.custom_field("website"),
        Some(&json!("https://jane.example.com"))
    );
}

#[tokio::test]
async fn test_get_subscriber_accepts_lowercase_date_key() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/subscribers/l1.json")
        .match_query(email_query())
        .with_status(200)
        .with_body(
            r#"{"EmailAddress": "jane@example.com", "date": "2010-10-25 10:28:00"}"#,
        )
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let subscriber = client
        .get_subscriber("l1", EMAIL)
        .await
        .expect("Failed to get subscriber");

    assert_eq!(
        subscriber.date_rfc3339().as_deref(),
        Some("2010-10-25T10:28:00Z")
    );
}

#[tokio::test]
async fn test_get_subscriber_with_invalid_date_fails() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/subscribers/l1.json")
        .match_query(email_query())
        .with_status(200)
        .with_body(
            r#"{"EmailAddress": "jane@example.com", "Date": "last tuesday"}"#,
        )
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let result = client.get_subscriber("l1", EMAIL).await;

    assert!(matches!(result, Err(AppError::Json(_))));
}

#[tokio::test]
async fn test_unsubscribe_is_idempotent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/subscribers/l1/unsubscribe.json")
        .match_body(Matcher::Json(json!({"EmailAddress": EMAIL})))
        .with_status(200)
        .expect(2)
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    client
        .unsubscribe("l1", EMAIL)
        .await
        .expect("First unsubscribe failed");
    client
        .unsubscribe("l1", EMAIL)
        .await
        .expect("Second unsubscribe failed");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_subscriber_is_idempotent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/subscribers/l1.json")
        .match_query(email_query())
        .with_status(200)
        .expect(2)
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    for _ in 0..2 {
        client
            .delete_subscriber("l1", EMAIL)
            .await
            .expect("Delete failed");
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn test_import_subscribers() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/subscribers/l1/import.json")
        .match_body(Matcher::Json(json!({
            "Subscribers": [
                {"EmailAddress": "a@example.com", "Name": "A"},
                {"EmailAddress": "b@example.com"}
            ],
            "Resubscribe": true
        })))
        .with_status(201)
        .with_body(
            r#"{
                "FailureDetails": [{"EmailAddress": "b@example.com", "Code": 1, "Message": "Invalid Email Address"}],
                "TotalUniqueEmailsSubmitted": 2,
                "TotalExistingSubscribers": 0,
                "TotalNewSubscribers": 1,
                "DuplicateEmailsInSubmission": []
            }"#,
        )
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let import = ImportSubscribers::new(vec![
        NewSubscriber::new("a@example.com").with_name("A"),
        NewSubscriber::new("b@example.com"),
    ])
    .with_resubscribe(true);

    let result = client
        .import_subscribers("l1", &import)
        .await
        .expect("Failed to import subscribers");

    mock.assert_async().await;
    assert_eq!(result.total_new_subscribers, 1);
    assert!(!result.is_complete());
    assert_eq!(result.failure_details[0].message, "Invalid Email Address");
}
