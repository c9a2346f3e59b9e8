use clap::{Args, Parser, Subcommand};
use excel_remap::api::{run_api_server, server::DEFAULT_MAX_BODY_BYTES, ApiConfig};
use excel_remap::cli::{self, ModelArgs};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "excel-remap")]
#[command(about = "Remap spreadsheet columns to a standard header layout")]
#[command(long_about = "Excel Remap - standardize spreadsheet columns with Azure OpenAI

Reads the header row of a workbook, asks a model deployment to map each
header onto a list of standard headers, then writes a workbook containing
exactly the standard columns in the requested order.

COMMANDS:
  headers  - Print the header row of a workbook
  remap    - Remap a workbook onto standard columns
  serve    - Run the HTTP API server

MODEL CONNECTION (remap):
  AZURE_OPENAI_KEY, AZURE_OPENAI_ENDPOINT, AZURE_OPENAI_API_VERSION and
  AZURE_OPENAI_DEPLOYMENT_NAME are read from the environment or a .env file.

EXAMPLES:
  excel-remap headers questionnaire.xlsx
  excel-remap remap in.xlsx out.xlsx -c \"Number,Section,Question,Response\"
  excel-remap remap in.xlsx out.xlsx -c \"Number,Notes\" --mapping mapping.json
  excel-remap serve --port 3000")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct ModelFlags {
    /// Azure OpenAI API key
    #[arg(long, env = "AZURE_OPENAI_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Azure OpenAI resource endpoint or host
    #[arg(long, env = "AZURE_OPENAI_ENDPOINT")]
    endpoint: Option<String>,

    /// Azure OpenAI API version
    #[arg(long, env = "AZURE_OPENAI_API_VERSION")]
    api_version: Option<String>,

    /// Model deployment name
    #[arg(long, env = "AZURE_OPENAI_DEPLOYMENT_NAME")]
    deployment: Option<String>,
}

impl From<ModelFlags> for ModelArgs {
    fn from(flags: ModelFlags) -> Self {
        ModelArgs {
            api_key: flags.api_key,
            endpoint: flags.endpoint,
            api_version: flags.api_version,
            deployment: flags.deployment,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the header row of a workbook
    Headers {
        /// Path to workbook (.xlsx, .xlsm, .xlsb, .xls, .ods)
        file: PathBuf,
    },

    #[command(long_about = "Remap a workbook onto standard columns.

The first worksheet is read with its first row as headers. Columns are
renamed per the mapping, then exactly the standard columns are written in
the given order. Unmapped source columns are dropped. The command fails if
a standard column is absent after renaming.

Spaces are removed from the column list before splitting on commas.

Use --mapping to supply a saved JSON mapping instead of calling the model:
  { \"Question Number\": \"Number\", \"Answer\": \"Response\" }")]
    /// Remap a workbook onto standard columns
    Remap {
        /// Source workbook
        input: PathBuf,

        /// Output workbook path (.xlsx)
        output: PathBuf,

        /// Comma separated standard headers, in output order
        #[arg(short, long)]
        columns: String,

        /// JSON file with a fixed source → standard mapping
        #[arg(short, long)]
        mapping: Option<PathBuf>,

        #[command(flatten)]
        model: ModelFlags,

        /// Show verbose remap steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run the HTTP API server
    Serve {
        /// Host address to bind to
        #[arg(short = 'H', long, default_value = "127.0.0.1", env = "REMAP_HOST")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value = "8080", env = "REMAP_PORT")]
        port: u16,

        /// Maximum request body size in bytes
        #[arg(long, default_value_t = DEFAULT_MAX_BODY_BYTES, env = "REMAP_MAX_BODY_BYTES")]
        max_body_bytes: usize,

        /// Timeout for each model call in seconds (unset = no timeout)
        #[arg(long, env = "REMAP_MODEL_TIMEOUT_SECS")]
        model_timeout_secs: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Headers { file } => cli::headers(file)?,

        Commands::Remap {
            input,
            output,
            columns,
            mapping,
            model,
            verbose,
        } => cli::remap(input, output, columns, mapping, model.into(), verbose).await?,

        Commands::Serve {
            host,
            port,
            max_body_bytes,
            model_timeout_secs,
        } => {
            run_api_server(ApiConfig {
                host,
                port,
                max_body_bytes,
                model_timeout: model_timeout_secs.map(Duration::from_secs),
            })
            .await?
        }
    }

    Ok(())
}
