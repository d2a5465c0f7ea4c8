//! Extract verifiable claims from a sentence.
//!
//! ```sh
//! OPENAI_API_KEY=sk-... cargo run --example extract_claims -- "The Eiffel Tower opened in 1889."
//! ```
//!
//! Set `LLM_PROVIDER=deepseek` (and `DEEPSEEK_API_KEY`) to route through
//! the prompt-coercion shim instead of native structured output.

use veristruct::prelude::*;
use veristruct::ProviderSettings;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "veristruct=debug".into()),
        )
        .init();

    let sentence = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "The Eiffel Tower opened in 1889 and is 330 metres tall.".to_string());

    let settings = match ProviderSettings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("configuration error: {err}");
            std::process::exit(1);
        }
    };
    let identifier = match settings.llm_provider.as_str() {
        "deepseek" => "deepseek:deepseek-chat",
        _ => "openai:gpt-4o-mini",
    };

    let backend = match structured_backend_for(identifier) {
        Ok(backend) => backend,
        Err(err) => {
            eprintln!("could not build {identifier}: {err}");
            std::process::exit(1);
        }
    };

    let result: Option<ExtractedClaims> = call_with_structured_output(
        &backend,
        vec![
            MessageLike::from((
                "system",
                "Extract the verifiable factual claims from the user's sentence.",
            )),
            MessageLike::from(("human", sentence.as_str())),
        ],
        &ModelSettings::new().temperature(0.0),
        "extract-claims-example",
    )
    .await
    .expect("message input is well-formed");

    match result {
        None => eprintln!("model call failed, see logs"),
        Some(extracted) if extracted.no_claims => println!("no verifiable claims"),
        Some(extracted) => {
            for claim in extracted.claims {
                println!("- {claim}");
            }
        }
    }
}
