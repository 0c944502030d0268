use portfolio_backend::configuration::get_configuration;
use portfolio_backend::domain::contact::service::ContactPipeline;
use portfolio_backend::inbound::http::Application;
use portfolio_backend::outbound::notifier::email_client::EmailClient;
use portfolio_backend::outbound::telemetry::init_logger;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let configuration = get_configuration().expect("Failed to read configuration");
    init_logger(
        "portfolio-backend",
        &configuration.log_level(),
        std::io::stdout,
    );

    let email_client = EmailClient::new(configuration.email_client, configuration.contact);
    let contact_service = ContactPipeline::new(email_client);
    let application = Application::build(contact_service, configuration.application).await?;

    application.run_until_stopped().await?;
    Ok(())
}
