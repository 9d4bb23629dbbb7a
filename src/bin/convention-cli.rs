use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use route_conventions::config::{load_config, ConventionConfig};
use route_conventions::registry::{TypeId, TypeIntrospector, TypeShape};
use route_conventions::{CaseConvention, CaseStyle};

#[derive(Parser)]
#[command(name = "convention-cli")]
#[command(about = "Offline route/identifier case rewriting", long_about = None)]
struct Cli {
    /// Case style to apply (overrides the config file).
    #[arg(short, long)]
    style: Option<CaseStyle>,

    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit JSON instead of plain text.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite a single identifier
    Ident { name: String },
    /// Rewrite the static segments of a route template
    Template { route: String },
    /// Rewrite the parameter names of a route template
    Params { route: String },
}

/// The CLI has no host types to describe.
struct NoTypes;

impl TypeIntrospector for NoTypes {
    fn shape(&self, _ty: &TypeId) -> Option<TypeShape> {
        None
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ConventionConfig::default(),
    };
    if let Some(style) = cli.style {
        config.style = style;
    }

    route_conventions::observability::logging::init(&config.observability);

    let convention = CaseConvention::new(config, Arc::new(NoTypes));

    let (input, output) = match &cli.command {
        Commands::Ident { name } => (name.clone(), convention.convert(name)),
        Commands::Template { route } => (route.clone(), convention.transform_template(route)),
        Commands::Params { route } => (route.clone(), convention.transform_parameters(route)),
    };

    if cli.json {
        let report = serde_json::json!({
            "style": convention.config().style.to_string(),
            "input": input,
            "output": output,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", output);
    }

    Ok(())
}
