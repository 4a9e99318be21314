#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use vet_finder_skill::core::{AddressProvider, PlacesLookup};
#[cfg(feature = "lambda")]
use vet_finder_skill::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use vet_finder_skill::{LambdaConfig, ResponseEnvelope, SkillEngine};

#[cfg(feature = "lambda")]
async fn function_handler<A: AddressProvider, P: PlacesLookup>(
    engine: &SkillEngine<A, P>,
    event: LambdaEvent<serde_json::Value>,
) -> Result<ResponseEnvelope, Error> {
    tracing::info!(
        aws_request_id = %event.context.request_id,
        "Received voice platform event"
    );

    // 技能層級的錯誤都已轉成語音回應，這裡不會回 Err
    let response = engine.handle_envelope(event.payload).await;

    tracing::info!("Voice response ready");
    Ok(response)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // 冷啟動時讀取一次設定，之後整個行程共用
    let config = LambdaConfig::from_env()?;
    config.validate()?;
    let engine = SkillEngine::from_config(&config)?;
    tracing::info!("Find Nearest Vet skill initialised");

    let engine = &engine;
    run(service_fn(move |event: LambdaEvent<serde_json::Value>| async move {
        function_handler(engine, event).await
    }))
    .await
}
