use assert_json_diff::assert_json_eq;
use createsend_client::presentation::{ListForEmail, Subscriber};
use serde_json::json;

#[test]
fn test_subscriber_round_trips_date_as_rfc3339() {
    let subscriber: Subscriber = serde_json::from_value(json!({
        "EmailAddress": "jane@example.com",
        "Name": "Jane",
        "Date": "2010-10-25 10:28:00",
        "State": "Unsubscribed",
        "CustomFields": null
    }))
    .unwrap();

    assert!(subscriber.is_unsubscribed());
    assert!(!subscriber.is_active());
    assert!(subscriber.custom_fields.is_empty());

    assert_json_eq!(
        serde_json::to_value(&subscriber).unwrap(),
        json!({
            "EmailAddress": "jane@example.com",
            "Name": "Jane",
            "Date": "2010-10-25T10:28:00Z",
            "State": "Unsubscribed"
        })
    );
}

#[test]
fn test_subscriber_empty_date_is_none() {
    let subscriber: Subscriber = serde_json::from_value(json!({
        "EmailAddress": "jane@example.com",
        "Date": ""
    }))
    .unwrap();
    assert!(subscriber.date.is_none());

    let subscriber: Subscriber = serde_json::from_value(json!({
        "EmailAddress": "jane@example.com",
        "Date": null
    }))
    .unwrap();
    assert!(subscriber.date_rfc3339().is_none());
}

#[test]
fn test_subscriber_invalid_date_fails() {
    let result = serde_json::from_value::<Subscriber>(json!({"Date": "25/10/2010"}));
    let err = result.unwrap_err();
    assert!(err.to_string().contains("invalid date"));
}

#[test]
fn test_subscriber_custom_field_lookup() {
    let subscriber: Subscriber = serde_json::from_value(json!({
        "CustomFields": [
            {"Key": "[website]", "Value": "https://example.com"},
            {"Key": "age", "Value": 30}
        ]
    }))
    .unwrap();

    assert_eq!(
        subscriber.custom_field("website"),
        Some(&json!("https://example.com"))
    );
    assert_eq!(subscriber.custom_field("[age]"), Some(&json!(30)));
    assert_eq!(subscriber.custom_field("missing"), None);
}

#[test]
fn test_list_for_email_join_date() {
    let entry = ListForEmail {
        date_subscriber_added: "2012-08-20 22:32:00".to_string(),
        subscriber_state: "Active".to_string(),
        ..Default::default()
    };
    assert!(entry.is_subscribed());
    assert!(entry.date_subscriber_added().is_some());

    let entry = ListForEmail::default();
    assert!(entry.date_subscriber_added().is_none());
}
