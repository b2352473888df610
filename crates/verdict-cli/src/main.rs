//! `verdict` - evaluate learner submissions against task criteria.
//!
//! Reads an evaluation request (JSON or YAML) from a file or stdin, runs
//! the deterministic strategies with LLM escalation for unrecognized
//! criteria, and prints the validation result as JSON. Sample request
//! payloads live in `demos/` at the workspace root:
//!
//! ```text
//! verdict evaluate demos/contains_all.json
//! GEMINI_API_KEY=... verdict evaluate demos/essay.yaml
//! ```

use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use verdict_core::StrategyRegistry;
use verdict_runtime::{
    CompletionConfig, EvaluationPipeline, EvaluationRequest, GeminiProvider, LlmProvider,
    ProviderError,
};

#[derive(Parser)]
#[command(name = "verdict", version, about = "Answer evaluation for learning tasks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a request payload and print the validation result
    Evaluate {
        /// Path to a JSON or YAML request file, or '-' for stdin (JSON)
        request: String,

        /// Judge model to use for escalation
        #[arg(long)]
        model: Option<String>,

        /// Judge call timeout in seconds
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// Pretty-print the result JSON
        #[arg(long)]
        pretty: bool,
    },

    /// List the criteria tags with a built-in deterministic strategy
    Strategies,
}

/// Stand-in provider when no judge credential is configured. Deterministic
/// criteria still evaluate; escalation reports the missing configuration.
struct UnconfiguredProvider(String);

#[async_trait]
impl LlmProvider for UnconfiguredProvider {
    async fn complete(
        &self,
        _prompt: &str,
        _config: &CompletionConfig,
    ) -> Result<String, ProviderError> {
        Err(ProviderError::NotConfigured(self.0.clone()))
    }

    async fn health_check(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "unconfigured"
    }
}

fn read_request(source: &str) -> Result<EvaluationRequest> {
    let (content, is_yaml) = if source == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read request from stdin")?;
        (buffer, false)
    } else {
        let path = Path::new(source);
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file '{source}'"))?;
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );
        (content, is_yaml)
    };

    let request: EvaluationRequest = if is_yaml {
        serde_yaml::from_str(&content).context("Request is not valid YAML")?
    } else {
        serde_json::from_str(&content).context("Request is not valid JSON")?
    };
    request.validate().context("Request failed validation")?;
    Ok(request)
}

fn judge_provider() -> Arc<dyn LlmProvider> {
    match GeminiProvider::from_env() {
        Ok(provider) => Arc::new(provider),
        Err(error) => {
            tracing::warn!(
                %error,
                "Judge not configured; only deterministic criteria will evaluate"
            );
            Arc::new(UnconfiguredProvider(error.to_string()))
        }
    }
}

async fn run_evaluate(
    request_source: &str,
    model: Option<String>,
    timeout_secs: Option<u64>,
    pretty: bool,
) -> Result<()> {
    let request = read_request(request_source)?;

    let mut completion = CompletionConfig::default();
    if let Some(model) = model {
        completion.model = model;
    }
    if let Some(secs) = timeout_secs {
        completion.timeout = Duration::from_secs(secs);
    }

    let pipeline = EvaluationPipeline::builder()
        .provider(judge_provider())
        .completion(completion)
        .build()?;

    let result = pipeline
        .evaluate(&request)
        .await
        .context("Evaluation could not be completed")?;

    let output = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{output}");

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate {
            request,
            model,
            timeout_secs,
            pretty,
        } => run_evaluate(&request, model, timeout_secs, pretty).await,
        Commands::Strategies => {
            for tag in StrategyRegistry::with_builtins().tags() {
                println!("{tag}");
            }
            Ok(())
        }
    }
}
