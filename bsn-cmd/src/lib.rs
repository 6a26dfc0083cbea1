//! Command implementations for the Basin Sentinels CLI.
//!
//! Offline subcommands read the embedded seed; the AI subcommands call the
//! narrative service and print its answer (or the fallback text).

use std::path::PathBuf;

use bsn_core::view::Module;
use clap::Subcommand;

pub mod ask;
pub mod listing;

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// List monitoring nodes with their displayed score and risk
    Nodes {
        /// Show the 5-year average instead of the live score
        #[arg(long)]
        historical: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List crowd zones
    Zones {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Classify a quality score into a risk level
    Classify {
        #[arg(allow_negative_numbers = true)]
        score: f64,
    },

    /// Show the map markers a refresh would draw
    Markers {
        /// Which module's map to draw
        #[arg(short, long, value_parser = parse_module, default_value = "water")]
        module: Module,

        /// Entity to draw as selected
        #[arg(short, long)]
        select: Option<String>,

        #[arg(long)]
        historical: bool,
    },

    /// Ask the AI for a forecast (node) or crowd insight (zone)
    Describe {
        /// Node id (e.g. 6) or zone id (e.g. cz1)
        id: String,
    },

    /// Run the visual water-quality diagnostic on a photo
    AnalyzeImage {
        path: PathBuf,

        /// MIME type; guessed from the extension when omitted
        #[arg(long)]
        mime: Option<String>,
    },

    /// Scan recent basin news with web-grounded search
    Intel,

    /// Geographic profile of a named place in Nashik
    Location { name: String },
}

fn parse_module(raw: &str) -> Result<Module, String> {
    match raw.to_ascii_lowercase().as_str() {
        "water" => Ok(Module::Water),
        "crowd" => Ok(Module::Crowd),
        other => Err(format!("unknown module {other:?} (expected water or crowd)")),
    }
}

pub async fn run(command: Command, api_key: Option<String>) -> anyhow::Result<()> {
    match command {
        Command::Nodes { historical, json } => listing::run_nodes(historical, json),
        Command::Zones { json } => listing::run_zones(json),
        Command::Classify { score } => {
            println!("{}", listing::classify_line(score));
            Ok(())
        }
        Command::Markers {
            module,
            select,
            historical,
        } => listing::run_markers(module, select, historical),
        Command::Describe { id } => ask::run_describe(&id, api_key).await,
        Command::AnalyzeImage { path, mime } => ask::run_analyze_image(&path, mime, api_key).await,
        Command::Intel => ask::run_intel(api_key).await,
        Command::Location { name } => ask::run_location(&name, api_key).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    fn parse(args: &[&str]) -> Result<Command, clap::Error> {
        TestCli::try_parse_from(std::iter::once("bsn-cli").chain(args.iter().copied()))
            .map(|cli| cli.command)
    }

    #[test]
    fn parses_listing_commands() {
        assert_eq!(
            parse(&["nodes", "--historical"]).unwrap(),
            Command::Nodes { historical: true, json: false }
        );
        assert_eq!(parse(&["classify", "-5"]).unwrap(), Command::Classify { score: -5.0 });
        assert_eq!(
            parse(&["markers", "-m", "crowd", "--select", "cz2"]).unwrap(),
            Command::Markers {
                module: Module::Crowd,
                select: Some("cz2".into()),
                historical: false,
            }
        );
    }

    #[test]
    fn parses_ai_commands() {
        assert_eq!(
            parse(&["analyze-image", "ghat.jpg"]).unwrap(),
            Command::AnalyzeImage { path: "ghat.jpg".into(), mime: None }
        );
        assert_eq!(
            parse(&["location", "Tapovan"]).unwrap(),
            Command::Location { name: "Tapovan".into() }
        );
        assert_eq!(parse(&["intel"]).unwrap(), Command::Intel);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse(&["classify", "high"]).is_err());
        assert!(parse(&["markers", "-m", "air"]).is_err());
        assert!(parse(&["describe"]).is_err());
    }
}
