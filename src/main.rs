//! ATS scorer: rule-based resume scoring from the command line

use ats_scorer::cli::{self, Cli, Commands, ConfigAction};
use ats_scorer::config::Config;
use ats_scorer::error::{AtsScorerError, Result};
use ats_scorer::input::InputManager;
use ats_scorer::output::{resolve_save_path, save_report_to_file, ReportGenerator, ReportMetadata, ScoreReport};
use ats_scorer::scoring::AtsScorer;
use ats_scorer::tips::generate_enhancement_tips;
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_or_create(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: PathBuf) -> Result<()> {
    match command {
        Commands::Score {
            resume,
            job,
            output,
            save,
            detailed,
            no_tips,
        } => {
            cli::validate_file_extension(&resume, &["json"]).map_err(AtsScorerError::InvalidInput)?;
            if let Some(job) = &job {
                cli::validate_file_extension(job, &["txt", "md", "markdown", "pdf"])
                    .map_err(AtsScorerError::InvalidInput)?;
            }
            let format = match output {
                Some(output) => cli::parse_output_format(&output).map_err(AtsScorerError::InvalidInput)?,
                None => config.output.format,
            };

            let mut input_manager = InputManager::new();
            let resume_data = input_manager.load_resume(&resume).await?;
            let job_description = match &job {
                Some(path) => Some(input_manager.extract_text(path).await?),
                None => None,
            };

            info!("Scoring {}", resume.display());
            let scorer = AtsScorer::with_weights(config.scoring.weights());
            let explanation = scorer.explain(&resume_data, job_description.as_deref());

            let mut tips = if no_tips {
                Vec::new()
            } else {
                generate_enhancement_tips(&resume_data)
            };
            if let Some(limit) = config.tip_limit() {
                tips.truncate(limit);
            }

            let metadata = ReportMetadata::new(
                resume.display().to_string(),
                job.as_ref().map(|p| p.display().to_string()),
                *scorer.weights(),
            );
            let detailed = detailed || config.output.detailed;
            let report = ScoreReport::new(explanation, tips, detailed, metadata);

            match save {
                Some(target) => {
                    let path = resolve_save_path(&target, &format, &resume);
                    let generator = ReportGenerator::with_options(false, detailed, true, true, true);
                    let content = generator.generate_report(&report, &format)?;
                    save_report_to_file(&content, &path)?;
                    println!("Report saved to {}", path.display());
                }
                None => {
                    let generator = ReportGenerator::from_config(&config.output, detailed);
                    println!("{}", generator.generate_report(&report, &format)?);
                }
            }
        }

        Commands::Tips { resume } => {
            cli::validate_file_extension(&resume, &["json"]).map_err(AtsScorerError::InvalidInput)?;
            let mut input_manager = InputManager::new();
            let resume_data = input_manager.load_resume(&resume).await?;
            let tips = generate_enhancement_tips(&resume_data);
            info!("Generated {} enhancement tips", tips.len());

            let generator = ReportGenerator::from_config(&config.output, false);
            print!("{}", generator.console().format_tips(&tips));
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| AtsScorerError::Configuration(format!("Failed to serialize config: {}", e)))?;
                println!("# {}\n{}", config_path.display(), content);
            }

            Some(ConfigAction::Reset) => {
                Config::default().save_to(&config_path)?;
                println!("Configuration reset to defaults at {}", config_path.display());
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}
