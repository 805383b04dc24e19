use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use apib_core::config::{self, ApibConfig, CONFIG_FILE_NAME};
use apib_core::diagnostics::{Diagnostics, Severity};
use apib_core::ir::ApiModel;
use apib_core::parse::{self, document::ApiDocument};
use apib_core::transform;
use apib_core::{CodeGenerator, GeneratedFile};
use apib_spring_mvc::{SpringConfig, SpringMvcGenerator};

#[derive(Parser)]
#[command(
    name = "apib",
    about = "API Blueprint to Spring MVC code generator",
    version
)]
struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate controllers, services and models from a parsed blueprint
    Generate {
        /// Path to the parser output (JSON or YAML)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Directory to write Java sources into
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail when any item had to be skipped
        #[arg(long)]
        strict: bool,
    },

    /// Check that a parsed blueprint transforms cleanly
    Validate {
        /// Path to the parser output
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Print the intermediate model of a parsed blueprint
    Inspect {
        /// Path to the parser output
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new apib configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            strict,
        } => cmd_generate(&cli.config, input, output, strict),

        Commands::Validate { input } => cmd_validate(&cli.config, input),

        Commands::Inspect { input, format } => cmd_inspect(&cli.config, input, format),

        Commands::Init { force } => cmd_init(&cli.config, force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "apib", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Load the project config, falling back to defaults when the file is absent.
fn load_config(path: &Path) -> Result<ApibConfig> {
    let cfg = config::load_config(path)?;
    if cfg.is_none() {
        log::debug!("no config at {}, using defaults", path.display());
    }
    Ok(cfg.unwrap_or_default())
}

fn load_document(path: &Path) -> Result<ApiDocument> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    let document = match ext {
        "yaml" | "yml" => parse::from_yaml(&content)?,
        _ => parse::from_json(&content)?,
    };
    Ok(document)
}

fn build_model(path: &Path, cfg: &ApibConfig) -> Result<(ApiModel, Diagnostics)> {
    let document = load_document(path)?;
    let mut diagnostics = Diagnostics::new();
    let model =
        transform::transform_with_diagnostics(&document, &cfg.transform_options(), &mut diagnostics)?;
    Ok((model, diagnostics))
}

/// Write generated files to disk under the given base directory.
fn write_files(base: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = base.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("  wrote {}", path.display());
    }
    Ok(())
}

fn diagnostic_counts(diagnostics: &Diagnostics) -> (usize, usize) {
    diagnostics
        .entries()
        .iter()
        .fold((0, 0), |(warnings, errors), d| match d.severity {
            Severity::Warning => (warnings + 1, errors),
            Severity::Error => (warnings, errors + 1),
        })
}

fn cmd_generate(
    config_path: &Path,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    strict: bool,
) -> Result<()> {
    let cfg = load_config(config_path)?;
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let output_dir = output.unwrap_or_else(|| PathBuf::from(&cfg.output));

    let (model, diagnostics) = build_model(&input, &cfg)?;
    let (warnings, errors) = diagnostic_counts(&diagnostics);
    if strict && errors > 0 {
        anyhow::bail!("{errors} item(s) skipped while reading {}", input.display());
    }

    let spring = SpringConfig {
        package: cfg.package.clone(),
        extra_imports: cfg.extra_imports.clone(),
        source_file_name: input.display().to_string(),
    };
    let files = SpringMvcGenerator.generate(&model, &spring)?;

    eprintln!("Generating Spring MVC sources → {}", output_dir.display());
    fs::create_dir_all(&output_dir).with_context(|| {
        format!("failed to create output directory {}", output_dir.display())
    })?;
    write_files(&output_dir, &files)?;

    eprintln!(
        "Generated {} files in {} ({warnings} warnings, {errors} errors)",
        files.len(),
        output_dir.display()
    );
    Ok(())
}

fn cmd_validate(config_path: &Path, input: Option<PathBuf>) -> Result<()> {
    let cfg = load_config(config_path)?;
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let (model, diagnostics) = build_model(&input, &cfg)?;

    let actions: usize = model
        .groups
        .iter()
        .flat_map(|g| &g.resources)
        .map(|r| r.actions.len())
        .sum();
    let (warnings, errors) = diagnostic_counts(&diagnostics);

    eprintln!("Blueprint: {}", model.name);
    eprintln!("  Controllers: {}", model.groups.len());
    eprintln!("  Actions: {actions}");
    eprintln!("  Models: {}", model.models.len());
    eprintln!("  Warnings: {warnings}");
    eprintln!("  Errors: {errors}");

    if errors > 0 {
        anyhow::bail!("validation failed: {errors} item(s) would be skipped");
    }
    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_inspect(config_path: &Path, input: Option<PathBuf>, format: InspectFormat) -> Result<()> {
    let cfg = load_config(config_path)?;
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let (model, diagnostics) = build_model(&input, &cfg)?;

    let summary = serde_json::json!({
        "model": model,
        "diagnostics": diagnostics.entries(),
    });

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&summary)?;
            print!("{yaml}");
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            println!("{json}");
        }
    }

    Ok(())
}

fn cmd_init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(config_path, config::default_config_content())
        .with_context(|| format!("failed to write {}", config_path.display()))?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
