use std::io::{self, Write};

use clap::Parser;

use layout_runner::{
    AnalysisError, AnalyzeInput, AnalyzeOptions, Credentials, DocumentIntelligenceClient,
    OutputContentFormat, init_tracing, render_layout,
};

/// Public sample document used when no inputs are given.
const SAMPLE_DOCUMENT_URL: &str = "https://raw.githubusercontent.com/Azure-Samples/cognitive-services-REST-api-samples/master/curl/form-recognizer/sample-layout.pdf";

/// Extract text, tables, and selection marks from documents with Azure
/// Document Intelligence.
#[derive(Parser, Debug)]
#[command(name = "layout-runner", version)]
struct Args {
    /// Document URLs or local file paths to analyze. Defaults to a public
    /// sample document when empty.
    inputs: Vec<String>,

    /// Document Intelligence endpoint URL
    #[arg(long, env = "DOCUMENTINTELLIGENCE_ENDPOINT")]
    endpoint: String,

    /// Document Intelligence API key
    #[arg(long, env = "DOCUMENTINTELLIGENCE_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Model to analyze with
    #[arg(long, default_value = "prebuilt-layout")]
    model_id: String,

    /// Extra analysis features to enable (e.g. ocrHighResolution,formulas)
    #[arg(long, value_delimiter = ',')]
    features: Vec<String>,

    /// Content format requested from the service: text or markdown
    #[arg(long, default_value = "text")]
    format: OutputContentFormat,

    /// Maximum number of analyze operations in flight at once
    #[arg(long, default_value_t = 4)]
    max_in_flight: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let credentials = Credentials::new(args.endpoint, args.api_key);
    let client = DocumentIntelligenceClient::new(credentials);

    let inputs: Vec<AnalyzeInput> = if args.inputs.is_empty() {
        vec![AnalyzeInput::Url(SAMPLE_DOCUMENT_URL.to_owned())]
    } else {
        args.inputs.iter().map(|arg| AnalyzeInput::from_arg(arg)).collect()
    };
    let labels: Vec<String> = inputs.iter().map(ToString::to_string).collect();

    let options = AnalyzeOptions {
        features: args.features,
        output_format: args.format,
    };
    let results = client
        .analyze_batch(&args.model_id, inputs, &options, args.max_in_flight)
        .await;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failures = 0usize;

    for (label, result) in labels.iter().zip(results) {
        match result {
            Ok(analysis) => {
                writeln!(out, "==== {label} ====")?;
                render_layout(&analysis, &mut out)?;
            }
            Err(err) => {
                failures += 1;
                match &err {
                    AnalysisError::InvalidImage(message) => {
                        eprintln!("{label}: received an invalid image error: {message}")
                    }
                    AnalysisError::InvalidRequest(message) => {
                        eprintln!("{label}: received an invalid request error: {message}")
                    }
                    _ => eprintln!("{label}: {err}"),
                }
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} documents failed to analyze", labels.len());
    }
    Ok(())
}
