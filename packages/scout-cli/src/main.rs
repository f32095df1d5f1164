// Command-line front end for the enrichment pipeline

mod config;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use enrichment::{
    batch::{run_batch, BatchConfig, FailureMode},
    export,
    providers::{GroqExtractionProvider, SerpSearchProvider},
    template::{generate_queries, wrap_placeholder},
    SheetSource, Table,
};

/// Enrich a table of entities: one web search plus one LLM extraction per
/// row, exported as CSV.
#[derive(Debug, Parser)]
#[command(name = "scout", version, about, group(
    clap::ArgGroup::new("input").required(true).args(["csv", "spreadsheet_id"]),
))]
struct Args {
    /// CSV file to load (first line is the header)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Google Sheets spreadsheet ID to fetch instead of a CSV file
    #[arg(long, requires = "range")]
    spreadsheet_id: Option<String>,

    /// A1-style range to fetch, e.g. "Sheet1!A1:D10"
    #[arg(long, requires = "spreadsheet_id")]
    range: Option<String>,

    /// Query template containing the wrapped placeholder,
    /// e.g. "Get me the email address of {company}"
    #[arg(long)]
    template: String,

    /// Placeholder token to substitute, without braces
    #[arg(long, default_value = "entity")]
    placeholder: String,

    /// Column whose values replace the placeholder
    #[arg(long)]
    column: String,

    /// Where to write the exported CSV
    #[arg(long, default_value = "extracted_information.csv")]
    output: PathBuf,

    /// Print the generated queries and exit without calling any provider
    #[arg(long)]
    dry_run: bool,

    /// Record "Error in processing" for failed rows instead of degrading
    /// silently
    #[arg(long)]
    strict: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,enrichment=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // Load .env before anything reads the environment
    let _ = dotenvy::dotenv();

    let table = load_table(&args).await?;
    let values = table.column(&args.column)?;

    let placeholder = wrap_placeholder(&args.placeholder);
    let queries = generate_queries(&args.template, &placeholder, &values);
    tracing::info!(rows = table.len(), queries = queries.len(), "Generated queries");

    if args.dry_run {
        for query in &queries {
            println!("{query}");
        }
        return Ok(());
    }

    let config = Config::from_env().context("Failed to load configuration")?;

    let search = SerpSearchProvider::new(config.serp_api_key);
    let mut extract = GroqExtractionProvider::new(config.groq_api_key);
    if let Some(model) = config.groq_model {
        extract = extract.with_model(model);
    }

    let failure_mode = if args.strict {
        FailureMode::RecordError
    } else {
        FailureMode::TreatAsEmpty
    };
    let batch_config =
        BatchConfig::new(args.template.as_str()).with_failure_mode(failure_mode);

    let results = run_batch(&queries, &search, &extract, &batch_config).await;

    let bytes = export::to_csv(&results)?;
    std::fs::write(&args.output, bytes)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    tracing::info!(
        rows = results.len(),
        output = %args.output.display(),
        "Export complete"
    );

    Ok(())
}

async fn load_table(args: &Args) -> Result<Table> {
    if let Some(path) = &args.csv {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let table = Table::from_csv(&bytes)?;
        tracing::info!(path = %path.display(), rows = table.len(), "Loaded CSV");
        Ok(table)
    } else if let (Some(spreadsheet_id), Some(range)) = (&args.spreadsheet_id, &args.range) {
        let api_key = std::env::var("GOOGLE_SHEETS_API_KEY")
            .context("GOOGLE_SHEETS_API_KEY must be set for sheet input")?;
        let source = SheetSource::new(api_key);
        let table = source.fetch(spreadsheet_id, range).await?;
        tracing::info!(
            spreadsheet_id = %spreadsheet_id,
            range = %range,
            rows = table.len(),
            "Fetched sheet range"
        );
        Ok(table)
    } else {
        // clap's input group guarantees one of the two branches above
        bail!("provide either --csv or --spreadsheet-id with --range");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn csv_and_sheet_input_are_mutually_exclusive() {
        let result = Args::try_parse_from([
            "scout",
            "--csv",
            "companies.csv",
            "--spreadsheet-id",
            "abc123",
            "--range",
            "Sheet1!A1:B2",
            "--template",
            "Find HQ of {company}",
            "--column",
            "company",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn range_requires_spreadsheet_id() {
        let result = Args::try_parse_from([
            "scout",
            "--csv",
            "companies.csv",
            "--range",
            "Sheet1!A1:B2",
            "--template",
            "t",
            "--column",
            "c",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn placeholder_defaults_to_entity() {
        let args = Args::try_parse_from([
            "scout",
            "--csv",
            "companies.csv",
            "--template",
            "Find HQ of {entity}",
            "--column",
            "company",
        ])
        .unwrap();
        assert_eq!(args.placeholder, "entity");
        assert_eq!(args.output, PathBuf::from("extracted_information.csv"));
        assert!(!args.strict);
    }
}
