use std::io::{self, Write};

use gemini_models::settings::load_dotenv;
use gemini_models::{Client, ModelLister, Result, Settings};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    if let Err(err) = load_dotenv() {
        tracing::warn!(error = %err, "ignoring env file");
    }
    let settings = Settings::from_env();

    let stdout = io::stdout();
    let mut lister = ModelLister::new(stdout.lock());
    let result = lister
        .run(settings.api_key.as_deref(), |api_key: &str| -> Result<_> {
            Ok(Client::from_settings(&settings, api_key)?.models())
        })
        .await;
    match result {
        Ok(outcome) => tracing::debug!(?outcome, "done"),
        Err(err) => tracing::debug!(error = %err, "stdout closed"),
    }
    let _ = lister.into_inner().flush();
}
