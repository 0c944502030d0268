use once_cell::sync::Lazy;
use portfolio_backend::configuration::get_configuration;
use portfolio_backend::domain::contact::service::ContactPipeline;
use portfolio_backend::inbound::http::Application;
use portfolio_backend::outbound::notifier::email_client::EmailClient;
use portfolio_backend::outbound::telemetry::init_logger;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let c = get_configuration().expect("Failed to read configuration");
    let default_filter_level = c.general.log_level;
    let subscriber_name = "test";
    if std::env::var("TEST_LOG").is_ok() {
        init_logger(subscriber_name, &default_filter_level, std::io::stdout);
    } else {
        init_logger(subscriber_name, &default_filter_level, std::io::sink);
    }
});

pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
    pub operator_email: String,
}

impl TestApp {
    pub async fn post_contact(&self, body: serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(&format!("{}/api/contact", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_health(&self) -> reqwest::Response {
        reqwest::Client::new()
            .get(&format!("{}/api/health", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn email_requests(&self) -> Vec<wiremock::Request> {
        self.email_server.received_requests().await.unwrap()
    }
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);
    let email_server = MockServer::start().await;

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration");
        c.application.port = 0;
        c.email_client.base_url = email_server.uri();
        c
    };

    let operator_email = configuration.contact.operator_email.clone();
    let email_client = EmailClient::new(configuration.email_client, configuration.contact);
    let contact_service = ContactPipeline::new(email_client);

    let application = Application::build(contact_service, configuration.application)
        .await
        .expect("Failed to build application");
    let application_port = application.port();
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address: format!("http://localhost:{}", application_port),
        email_server,
        operator_email,
    }
}
