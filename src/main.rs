use clinic_portal::configuration;
use clinic_portal::error::BizErrorEnum;
use clinic_portal::startup::Application;
use clinic_portal::telemetry;

#[tokio::main]
async fn main() -> Result<(), BizErrorEnum> {
    let subscriber =
        telemetry::get_subscriber("clinic-portal".into(), "info".into(), std::io::stdout);
    telemetry::init_subscriber(subscriber)?;

    let config = configuration::get_configuration()?;
    let application = Application::build(config).await?;
    tracing::info!("Listening on port {}", application.port());
    application.run_until_stopped().await?;

    Ok(())
}
