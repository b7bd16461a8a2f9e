use anyhow::Context;
use clap::Parser;
use hay_bicis::app::speech;
use hay_bicis::utils::{logger, validation::Validate};
use hay_bicis::{AvailabilityPipeline, CliConfig, GbfsClient, NominatimGeocoder};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting hay-bicis CLI");

    let config = match cli.skill_config().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    tracing::debug!("Skill config: {:?}", config);

    let geocoder = NominatimGeocoder::new(&config).context("building geocoder client")?;
    let feed = GbfsClient::new(&config).context("building GBFS client")?;
    let pipeline = AvailabilityPipeline::new(geocoder, feed, &config);

    let address = cli.address(&config);
    match pipeline.run(&address).await {
        Ok(availability) => {
            tracing::info!(
                "Nearest station {} is {:.0} m away",
                availability.station.station_id,
                availability.distance_km * 1000.0
            );
            println!("{}", speech::availability_sentence(&availability));
        }
        Err(e) => {
            tracing::error!("Lookup failed: {} (category: {:?})", e, e.category());
            // Same words the skill would say, then the operator hint.
            println!("{}", speech::error_message(&e));
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    }

    Ok(())
}
