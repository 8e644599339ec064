use createsend_client::prelude::*;
use mockito::Matcher;
use std::io;
use std::sync::Mutex;
use tokio_test::block_on;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn offline_client() -> Client {
    let config = Config::with_api_key("key").base_url("http://127.0.0.1:1");
    Client::new(config).unwrap()
}

#[test]
fn test_client_keeps_configuration() {
    let client = offline_client();
    let config = client.http_client().config();

    assert_eq!(config.credentials.api_key, "key");
    assert_eq!(
        client.http_client().url("clients.json"),
        "http://127.0.0.1:1/clients.json"
    );
}

#[test]
fn test_client_is_shareable() {
    fn assert_send_sync<T: Send + Sync + Clone>() {}
    assert_send_sync::<Client>();

    let client = offline_client();
    let shared = Client::with_http_client(Arc::new(client.http_client().clone()));
    assert_eq!(
        shared.http_client().config().rest_api.base_url,
        "http://127.0.0.1:1"
    );
}

#[test]
fn test_blank_ids_fail_without_network() {
    let client = offline_client();

    let options = CampaignRecipientsOptions::default();
    let err = block_on(client.campaign_recipients(" ", &options))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid input: campaign_id must not be empty"
    );

    let err = block_on(client.unsubscribe("l1", "")).unwrap_err();
    assert_eq!(err.to_string(), "invalid input: email must not be empty");

    let err = block_on(client.add_subscriber("l1", &NewSubscriber::new("")))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid input: email_address must not be empty"
    );

    let err = block_on(client.create_campaign(
        "",
        &CreateCampaign::new("n", "s", "f", "f@example.com"),
    ))
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn test_lists_for_email_keeps_address_out_of_info_logs() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", Matcher::Any)
        .with_status(200)
        .with_body("[]")
        .create();

    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .with_writer(logs.clone())
        .finish();

    let config = Config::with_api_key("key").base_url(server.url());
    let client = Client::new(config).unwrap();
    let lists = tracing::subscriber::with_default(subscriber, || {
        block_on(client.lists_for_email("client1", "jane@example.com"))
    })
    .unwrap();

    assert!(lists.is_empty());
    let output = logs.contents();
    assert!(output.contains("client1"));
    assert!(!output.contains("jane"));
}
