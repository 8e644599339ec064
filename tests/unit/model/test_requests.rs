use assert_json_diff::assert_json_eq;
use chrono::NaiveDate;
use createsend_client::model::requests::{
    CampaignRecipientsOptions, ConsentToTrack, CreateCampaign, ImportSubscribers, NewSubscriber,
    OrderDirection, Rule, RuleGroup, ScheduleCampaign, SegmentCreate, SendDate,
};
use serde_json::json;

fn json_value<T: serde::Serialize>(v: &T) -> serde_json::Value {
    serde_json::to_value(v).unwrap()
}

#[test]
fn recipients_options_query_order() {
    let options = CampaignRecipientsOptions::new()
        .with_order_direction(OrderDirection::Asc)
        .with_order_field("list")
        .with_page_size(10)
        .with_page(3);

    let pairs = options.query_pairs();
    assert_eq!(
        pairs,
        vec![
            ("page", "3".to_string()),
            ("pagesize", "10".to_string()),
            ("orderfield", "list".to_string()),
            ("orderdirection", "asc".to_string()),
        ]
    );
}

#[test]
fn recipients_options_skip_unset_and_zero_values() {
    assert!(
        CampaignRecipientsOptions::default()
            .query_pairs()
            .is_empty()
    );

    let options = CampaignRecipientsOptions::new()
        .with_page(0)
        .with_page_size(0)
        .with_order_field("");
    assert!(options.query_pairs().is_empty());

    let options = CampaignRecipientsOptions::new()
        .with_order_direction(OrderDirection::Desc);
    assert_eq!(
        options.query_pairs(),
        vec![("orderdirection", "desc".to_string())]
    );
}

#[test]
fn create_campaign_defaults_reply_to_sender() {
    let campaign = CreateCampaign::new("Name", "Subject", "Acme", "news@acme.test");

    assert_eq!(campaign.reply_to, "news@acme.test");
    assert_json_eq!(
        json_value(&campaign),
        json!({
            "Name": "Name",
            "Subject": "Subject",
            "FromName": "Acme",
            "FromEmail": "news@acme.test",
            "ReplyTo": "news@acme.test",
            "ListIDs": [],
            "SegmentIDs": []
        })
    );
}

#[test]
fn send_date_wire_format() {
    let when = NaiveDate::from_ymd_opt(2026, 1, 5)
        .and_then(|d| d.and_hms_opt(7, 5, 59))
        .unwrap();

    assert_eq!(SendDate::At(when).to_string(), "2026-01-05 07:05");
    assert_eq!(SendDate::from(when), SendDate::At(when));
    assert_eq!(SendDate::Immediately.to_string(), "Immediately");

    let body = ScheduleCampaign {
        confirmation_email: "ops@acme.test".to_string(),
        send_date: SendDate::At(when),
    };
    assert_json_eq!(
        json_value(&body),
        json!({"ConfirmationEmail": "ops@acme.test", "SendDate": "2026-01-05 07:05"})
    );
}

#[test]
fn segment_without_rules_omits_rule_groups() {
    let segment = SegmentCreate::new("Everyone");
    assert_json_eq!(json_value(&segment), json!({"Title": "Everyone"}));

    let segment = segment.with_rule_group(RuleGroup::new(vec![Rule::new(
        "[Country]",
        "EQUALS Australia",
    )]));
    assert_json_eq!(
        json_value(&segment),
        json!({
            "Title": "Everyone",
            "RuleGroups": [{"Rules": [{"RuleType": "[Country]", "Clause": "EQUALS Australia"}]}]
        })
    );
}

#[test]
fn new_subscriber_serialization() {
    let subscriber = NewSubscriber::new("jane@example.com")
        .with_custom_field("interests", json!(["Rust", "Email"]))
        .with_consent_to_track(ConsentToTrack::Unchanged);

    assert_json_eq!(
        json_value(&subscriber),
        json!({
            "EmailAddress": "jane@example.com",
            "CustomFields": [{"Key": "interests", "Value": ["Rust", "Email"]}],
            "ConsentToTrack": "Unchanged"
        })
    );
}

#[test]
fn import_drops_per_subscriber_flags() {
    let import = ImportSubscribers::new([NewSubscriber::new("a@example.com")
        .with_name("A")
        .with_resubscribe(true)
        .with_restart_autoresponders(true)])
    .with_queue_autoresponders(false)
    .with_restart_autoresponders(true);

    assert_json_eq!(
        json_value(&import),
        json!({
            "Subscribers": [{"EmailAddress": "a@example.com", "Name": "A"}],
            "QueueSubscriptionBasedAutoResponders": false,
            "RestartSubscriptionBasedAutoresponders": true
        })
    );
}
