use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use sv_app::{AppError, AppResult, ValidationEngine, ValidationReport};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sv-cli")]
#[command(about = "SimValidate - Validate simulation model input files", long_about = None)]
struct Cli {
    /// Path(s) to simulation model directories
    #[arg(required_unless_present = "print_config")]
    model_paths: Vec<PathBuf>,

    /// Path to validation configuration file (JSON or YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file for the validation report (JSON)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(AppError::Config(e)) => {
            tracing::error!("{e}");
            ExitCode::from(2)
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::from(1)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Returns whether every model validated cleanly.
fn run(cli: &Cli) -> AppResult<bool> {
    let engine = ValidationEngine::from_config_path(cli.config.as_deref())?;

    if cli.print_config {
        println!("{}", engine.config().to_json_pretty()?);
        return Ok(true);
    }

    for path in &cli.model_paths {
        if !path.exists() {
            return Err(AppError::ModelNotFound(path.clone()));
        }
    }

    let reports = if cli.model_paths.len() == 1 {
        vec![engine.validate(&cli.model_paths[0])]
    } else {
        engine.validate_many(&cli.model_paths)
    };

    if let Some(output) = &cli.output {
        save_reports(output, &reports)?;
        tracing::info!("Detailed report saved to: {}", output.display());
    }

    for report in &reports {
        println!();
        print!("{}", report.render_text_summary());
    }

    Ok(reports.iter().all(ValidationReport::is_valid))
}

fn save_reports(output: &Path, reports: &[ValidationReport]) -> AppResult<()> {
    match reports {
        [single] => sv_report::save_document(output, &single.to_document())?,
        many => {
            let documents: Vec<_> = many.iter().map(ValidationReport::to_document).collect();
            sv_report::save_documents(output, &documents)?
        }
    }
    Ok(())
}
