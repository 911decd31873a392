//! CLI entrypoint for acpilight
//!
//! This is the `xbacklight` binary that wires together all layers using
//! dependency injection.

use acpilight_application::{
    AdjustBrightnessInput, AdjustBrightnessUseCase, ControllerRegistry, GetBrightnessUseCase,
    ListControllersUseCase,
};
use acpilight_infrastructure::{ConfigLoader, FileConfig, Severity, SysfsControllerRegistry};
use acpilight_presentation::{Action, Cli, ConsoleFormatter, FadeReporter};
use anyhow::{Result, anyhow, bail};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse_legacy();

    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::format_error(&format!("{e:#}")));
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging based on verbosity level; `RUST_LOG` wins when set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let Some(action) = cli.action() else {
        bail!("one of -list, -get, -getf, -set, -inc, -dec or PERCENT is required");
    };

    if action == Action::ShowConfig {
        for line in ConfigLoader::config_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
        return Ok(());
    }

    let config = load_config(&cli)?;
    ConsoleFormatter::set_color(config.output.color);

    if let Some(name) = &cli.display {
        debug!("Ignoring -display {}", name);
    }

    // === Dependency Injection ===
    let registry: Arc<dyn ControllerRegistry> = Arc::new(SysfsControllerRegistry::new(
        config.controllers.roots.clone(),
    ));
    let controller = cli
        .ctrl
        .clone()
        .or_else(|| config.default_controller().map(str::to_string));

    match action {
        Action::ShowConfig => {}
        Action::List => {
            let controllers = ListControllersUseCase::new(registry).execute()?;
            if !controllers.is_empty() {
                println!("{}", ConsoleFormatter::format_controllers(&controllers));
            }
        }
        Action::Get => {
            let reading = GetBrightnessUseCase::new(registry).execute(controller.as_deref())?;
            println!("{}", ConsoleFormatter::format_brightness(&reading));
        }
        Action::GetFractional => {
            let reading = GetBrightnessUseCase::new(registry).execute(controller.as_deref())?;
            println!("{}", ConsoleFormatter::format_fractional(&reading));
        }
        Action::Adjust(adjustment) => {
            let mut input =
                AdjustBrightnessInput::new(adjustment).with_fade(cli.fade_params(config.fade));
            if let Some(name) = controller {
                input = input.with_controller(name);
            }

            let use_case = AdjustBrightnessUseCase::new(registry);
            let output = if cli.verbose > 0 {
                use_case.execute_with_progress(input, &FadeReporter).await?
            } else {
                use_case.execute(input).await?
            };
            info!(
                "{}: {} applied ({:.2}% -> {:.2}%, {} writes)",
                output.controller, adjustment, output.from, output.target, output.writes
            );
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let mut fatal = None;
    for issue in config.validate() {
        match issue.severity {
            Severity::Warning => {
                eprintln!("{}", ConsoleFormatter::format_warning(&issue.message));
            }
            Severity::Error => {
                fatal.get_or_insert(issue.message);
            }
        }
    }
    if let Some(message) = fatal {
        bail!("Invalid configuration: {}", message);
    }

    Ok(config)
}
