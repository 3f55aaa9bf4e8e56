use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use server::decoder::{ConfigDecoder, Selector, encode_config};
use server::theme::PartialThemeConfig;
use server::{BrandingSession, ConfigResolver, RequestContext, SessionOutcome};
use std::path::PathBuf;
use whitelabel::config::{self, ConfigLoadResult};
use whitelabel::{AppError, DocumentRoot, StyleApplier, logger, presets, tenants};

#[derive(Parser)]
#[command(name = "whitelabel", version, about = "Resolve and inspect white-label branding")]
struct Cli {
    /// Configuration file, instead of the platform and working-directory defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a request context and print the result
    Resolve {
        /// Query string, e.g. "appType=red&hideSidebar=true"
        #[arg(long, default_value = "")]
        query: String,
        /// Run the tenant-selection flow against the configured directory
        #[arg(long)]
        tenant_flow: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Encode a (partial) configuration JSON file into a selector value
    Encode { file: PathBuf },
    /// Decode a selector value
    Decode { raw: String },
    /// List preset names
    Presets,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Css,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let app_config = match config::load_config(cli.config.as_deref()) {
        ConfigLoadResult::Success(config) => config,
        ConfigLoadResult::LoadError(e) | ConfigLoadResult::DeserializeError(e) => bail!(e),
    };
    logger::setup_logger(app_config.logging())?;

    let catalog = presets::init_catalog(app_config.presets().directory().as_deref())?;

    match cli.command {
        Command::Resolve {
            query,
            tenant_flow,
            format,
        } => {
            let context = RequestContext::from_query(&query);
            let resolver = ConfigResolver::new(catalog);

            let resolved = if tenant_flow {
                let directory = tenants::directory_from_config(app_config.tenants())?;
                let session = BrandingSession::new(resolver, directory);
                match session.select_tenant(&context).await? {
                    SessionOutcome::Ready(resolved) => resolved,
                    SessionOutcome::ChooseTenant(choices) => {
                        eprintln!("{} active tenants, pass tenantId to choose one:", choices.len());
                        println!("{}", serde_json::to_string_pretty(&choices)?);
                        return Ok(());
                    }
                    SessionOutcome::Superseded => bail!("tenant lookup was superseded"),
                }
            } else {
                std::sync::Arc::new(resolver.resolve(&context))
            };

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&*resolved)?),
                OutputFormat::Css => {
                    let mut root = DocumentRoot::new();
                    let applied = StyleApplier::apply(&mut root, &resolved.config);
                    println!("{}", applied.surface().render_css());
                }
            }
        }
        Command::Encode { file } => {
            let json = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let partial: PartialThemeConfig = serde_json::from_str(&json)
                .with_context(|| format!("{} is not a configuration object", file.display()))?;
            println!("{}", encode_config(&partial)?);
        }
        Command::Decode { raw } => match ConfigDecoder::new(&catalog).interpret(&raw) {
            Ok(Selector::Preset(name)) => println!("preset: {name}"),
            Ok(Selector::Custom(partial)) => {
                println!("{}", serde_json::to_string_pretty(&partial)?)
            }
            Err(e) => {
                log::warn!("Decode failed [{}]: {e}", e.kind());
                return Err(AppError::from(e).into());
            }
        },
        Command::Presets => {
            for name in catalog.names() {
                println!("{name}");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_resolve_arguments() {
        let cli = Cli::parse_from(["whitelabel", "resolve", "--query", "appType=red", "--format", "css"]);
        assert!(matches!(
            cli.command,
            Command::Resolve { ref query, tenant_flow: false, format: OutputFormat::Css } if query == "appType=red"
        ));
    }
}
