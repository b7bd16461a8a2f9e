#[cfg(feature = "lambda")]
use hay_bicis::app::alexa::{RequestEnvelope, ResponseEnvelope};
#[cfg(feature = "lambda")]
use hay_bicis::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use hay_bicis::{
    AlexaDeviceAddressClient, AvailabilityPipeline, BikeSkill, GbfsClient, NominatimGeocoder,
    SkillConfig,
};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use std::sync::Arc;

#[cfg(feature = "lambda")]
type Skill = BikeSkill<NominatimGeocoder, GbfsClient, AlexaDeviceAddressClient>;

#[cfg(feature = "lambda")]
fn build_skill() -> Result<Skill, Error> {
    let config = SkillConfig::from_env()?;
    config.validate()?;
    tracing::info!("Lambda configuration loaded: {:?}", config);

    let pipeline = AvailabilityPipeline::new(
        NominatimGeocoder::new(&config)?,
        GbfsClient::new(&config)?,
        &config,
    );
    Ok(BikeSkill::new(
        pipeline,
        AlexaDeviceAddressClient::new(&config)?,
    ))
}

#[cfg(feature = "lambda")]
async fn function_handler(
    skill: &Skill,
    event: LambdaEvent<RequestEnvelope>,
) -> Result<ResponseEnvelope, Error> {
    tracing::info!(request_id = %event.context.request_id, "Handling Alexa request");
    Ok(skill.handle(&event.payload).await)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // Built once per cold start and shared by every invocation.
    let skill = Arc::new(build_skill()?);

    run(service_fn(move |event: LambdaEvent<RequestEnvelope>| {
        let skill = Arc::clone(&skill);
        async move { function_handler(&skill, event).await }
    }))
    .await
}
