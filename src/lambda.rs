#[cfg(feature = "lambda")]
use breach_check::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use breach_check::{BreachCheckHandler, LambdaConfig, LookupResult, XposedClient};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use serde_json::Value;

#[cfg(feature = "lambda")]
type Handler = BreachCheckHandler<XposedClient<LambdaConfig>>;

#[cfg(feature = "lambda")]
async fn function_handler(handler: &Handler, event: LambdaEvent<Value>) -> Result<LookupResult, Error> {
    tracing::info!("Breach check invocation {}", event.context.request_id);

    handler.handle(&event.payload).await.map_err(|e| {
        tracing::error!(
            "❌ Breach check failed: {} (Kind: {:?})",
            e,
            e.kind()
        );
        // Wire form: "<code>: <message>".
        format!("{}: {}", e.kind().code(), e.user_friendly_message()).into()
    })
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env().map_err(|e| Box::new(e) as Error)?;
    config.validate().map_err(|e| Box::new(e) as Error)?;

    // One handler, and one connection pool, for every invocation.
    let handler = BreachCheckHandler::new(XposedClient::new(config));
    let handler = &handler;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(handler, event).await
    }))
    .await
}
