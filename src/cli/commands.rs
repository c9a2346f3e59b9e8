use crate::error::{RemapError, RemapResult};
use crate::excel::read_headers;
use crate::mapping::{AzureConnector, MappingProvider, ModelConnector, StaticMapping};
use crate::remap::{parse_standard_columns, remap_workbook};
use crate::types::ModelConnection;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

/// Model credentials as read from flags or the environment
#[derive(Debug, Clone, Default)]
pub struct ModelArgs {
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
    pub api_version: Option<String>,
    pub deployment: Option<String>,
}

impl ModelArgs {
    /// All four values, or a validation error naming the missing ones
    pub fn connection(&self) -> RemapResult<ModelConnection> {
        let fields = [
            ("AZURE_OPENAI_KEY", &self.api_key),
            ("AZURE_OPENAI_ENDPOINT", &self.endpoint),
            ("AZURE_OPENAI_API_VERSION", &self.api_version),
            ("AZURE_OPENAI_DEPLOYMENT_NAME", &self.deployment),
        ];
        let missing: Vec<&str> = fields
            .iter()
            .filter(|(_, v)| v.as_deref().map_or(true, str::is_empty))
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(RemapError::Validation(format!(
                "Model connection incomplete, set {} (or pass --mapping)",
                missing.join(", ")
            )));
        }

        Ok(ModelConnection::new(
            self.api_key.clone().unwrap_or_default(),
            self.endpoint.clone().unwrap_or_default(),
            self.api_version.clone().unwrap_or_default(),
            self.deployment.clone().unwrap_or_default(),
        ))
    }
}

/// Execute the headers command
pub fn headers(input: PathBuf) -> RemapResult<()> {
    let data = fs::read(&input)?;
    let headers = read_headers(&data)?;

    println!("{}", "📋 Excel Remap - Headers".bold().green());
    println!("   File: {}\n", input.display());

    if headers.is_empty() {
        println!("{}", "   (no header row found)".yellow());
        return Ok(());
    }

    for (idx, name) in headers.iter().enumerate() {
        println!("   {:>3}. {}", idx + 1, name);
    }
    println!();

    Ok(())
}

/// Execute the remap command
pub async fn remap(
    input: PathBuf,
    output: PathBuf,
    columns: String,
    mapping: Option<PathBuf>,
    model: ModelArgs,
    verbose: bool,
) -> RemapResult<()> {
    println!("{}", "🔀 Excel Remap".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}\n", output.display());

    let standard_columns = parse_standard_columns(&columns);
    if standard_columns.iter().all(|c| c.is_empty()) {
        return Err(RemapError::Validation(
            "Provide a comma separated list of standard headers".to_string(),
        ));
    }

    let provider: Box<dyn MappingProvider> = match &mapping {
        Some(path) => {
            if verbose {
                println!("{}", format!("📖 Loading mapping from {}", path.display()).cyan());
            }
            Box::new(StaticMapping::from_json(&fs::read_to_string(path)?)?)
        }
        None => {
            let connection = model.connection()?;
            if verbose {
                println!(
                    "{}",
                    format!(
                        "🤖 Requesting mapping from deployment '{}' at {}",
                        connection.deployment,
                        connection.base_url()
                    )
                    .cyan()
                );
            }
            AzureConnector::new(None)?.connect(connection)
        }
    };

    let workbook = fs::read(&input)?;
    let outcome = remap_workbook(&workbook, &standard_columns, provider.as_ref()).await?;

    if verbose {
        println!("   Source headers:   {}", outcome.excel_columns.join(", "));
        println!("   Standard headers: {}\n", outcome.standard_columns.join(", "));
    }

    println!("{}", "   Mapping:".bold());
    for (source, target) in &outcome.mapping {
        match target.as_str() {
            Some(name) => println!("     {} → {}", source, name),
            None => println!("     {} → {}", source, target.to_string().dimmed()),
        }
    }
    println!();

    fs::write(&output, &outcome.excel_file)?;

    println!("{}", "✅ Remap Complete!".bold().green());
    println!("   Excel file: {}\n", output.display());

    Ok(())
}
