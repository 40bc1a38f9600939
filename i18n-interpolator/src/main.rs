use clap::{Arg, Command};
use i18n_interpolator::{Interpolator, load_catalog_from_dir};
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("i18n-interpolator")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve ${i18n(...)} markers in a JSON document")
        .arg(
            Arg::new("input")
                .help("JSON or JSON5 document to interpolate ('-' reads stdin)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("messages")
                .long("messages")
                .short('m')
                .help("Directory of <language>.json message files")
                .required(true),
        )
        .arg(
            Arg::new("language")
                .long("language")
                .short('l')
                .help("Language to translate into (default: default)")
                .default_value("default"),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .short('p')
                .help("Pretty-print the output")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log catalog loading and unresolved placeholders")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let input = matches
        .get_one::<String>("input")
        .ok_or("missing input argument")?;
    let messages_dir = matches
        .get_one::<String>("messages")
        .ok_or("missing --messages argument")?;
    let language = matches
        .get_one::<String>("language")
        .map(String::as_str)
        .unwrap_or("default");
    let pretty = matches.get_flag("pretty");
    let verbose = matches.get_flag("verbose");

    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let catalog = load_catalog_from_dir(Path::new(messages_dir))?;
    info!("Loaded languages: {}", catalog.languages().join(", "));

    let source = if input == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(input).map_err(|e| format!("Failed to read '{}': {}", input, e))?
    };
    let document: Value = json5::from_str(&source)
        .map_err(|e| format!("Failed to parse '{}': {}", input, e))?;

    let interpolator = Interpolator::new(catalog).for_language(language);
    if interpolator.language() != language {
        info!(
            "Language '{}' not found, using '{}'",
            language,
            interpolator.language()
        );
    }

    let result = interpolator.interpolate(&document)?;
    let output = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", output);

    Ok(())
}
