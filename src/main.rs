use anyhow::Context;
use hello_world::configuration::get_configuration;
use hello_world::startup::Application;
use hello_world::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("hello-world".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = get_configuration().context("Failed to read configuration.")?;
    let app = Application::build(config).context("Failed to bind the listener.")?;
    app.run().await?;

    Ok(())
}
