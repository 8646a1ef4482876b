use env_logger::Env;
use tally::{configuration::get_configuration, services::run_aggregation};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let grand_total = run_aggregation(&configuration.webdriver, &configuration.scrape).await?;

    println!("\nGRAND TOTAL: {}", grand_total);

    Ok(())
}
