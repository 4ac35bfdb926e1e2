use anyhow::Result;
use clap::Parser;
use log::info;
use rdf_exhibit::util::{parse_format, read_file, read_url};
use rdf_exhibit::Converter;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "rdf2exhibit")]
#[command(about = "Convert an RDF graph into Exhibit JSON")]
#[command(arg_required_else_help = true)]
struct Cli {
    /// File path or http(s) URL of the RDF source
    source: String,
    /// Input format: turtle, ttl, n3, xml, rdfxml, ntriples or nt.
    /// When omitted, inferred from the file extension or the response
    /// Content-Type, defaulting to Turtle.
    #[clap(long, short)]
    format: Option<String>,
    /// Verbose mode - sets the RUST_LOG level to info, defaults to warning level
    #[clap(long, short, action, default_value = "false")]
    verbose: bool,
    /// Debug mode - sets the RUST_LOG level to debug, defaults to warning level
    #[clap(long, action, default_value = "false")]
    debug: bool,
}

fn main() -> Result<()> {
    let cmd = Cli::parse();

    let log_level = if cmd.verbose { "info" } else { "warn" };
    let log_level = if cmd.debug { "debug" } else { log_level };
    std::env::set_var("RUST_LOG", log_level);
    env_logger::init();

    let format = match &cmd.format {
        Some(name) => Some(
            parse_format(name)
                .ok_or_else(|| anyhow::anyhow!("Unknown format: {}", name))?,
        ),
        None => None,
    };

    let graph = if cmd.source.starts_with("http://") || cmd.source.starts_with("https://") {
        read_url(&cmd.source, format)?
    } else {
        read_file(&PathBuf::from(&cmd.source), format)?
    };
    info!("Loaded {} triples from {}", graph.len(), cmd.source);

    let exhibit = Converter::new().convert(&graph)?;
    println!("{}", serde_json::to_string_pretty(&exhibit)?);
    Ok(())
}
