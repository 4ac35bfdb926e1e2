//! Graph loading helpers shared by the CLI and the test suite.

use anyhow::Result;
use log::debug;
use oxigraph::io::{RdfFormat, RdfParser};
use oxigraph::model::{Graph, Triple};
use reqwest::header::CONTENT_TYPE;
use std::io::BufReader;
use std::path::Path;

/// Map a format identifier, as passed on the command line, to an RdfFormat.
pub fn parse_format(name: &str) -> Option<RdfFormat> {
    match name {
        "turtle" | "ttl" | "n3" => Some(RdfFormat::Turtle),
        "xml" | "rdfxml" | "rdf-xml" => Some(RdfFormat::RdfXml),
        "nt" | "ntriples" | "n-triples" => Some(RdfFormat::NTriples),
        _ => None,
    }
}

fn format_for_extension(path: &Path) -> Option<RdfFormat> {
    let ext = path.extension().and_then(|ext| ext.to_str());
    ext.and_then(|ext| match ext {
        "ttl" => Some(RdfFormat::Turtle),
        "xml" => Some(RdfFormat::RdfXml),
        "n3" => Some(RdfFormat::Turtle),
        "nt" => Some(RdfFormat::NTriples),
        _ => None,
    })
}

/// Parse a graph from an in-memory string.
pub fn read_str(content: &str, format: RdfFormat) -> Result<Graph> {
    let parser = RdfParser::from_format(format).for_reader(content.as_bytes());
    let mut graph = Graph::new();
    for quad in parser {
        let quad = quad?;
        let triple = Triple::new(quad.subject, quad.predicate, quad.object);
        graph.insert(&triple);
    }
    Ok(graph)
}

/// Read a graph from a file. When no format is given it is inferred from
/// the file extension, defaulting to Turtle.
pub fn read_file(file: &Path, format: Option<RdfFormat>) -> Result<Graph> {
    debug!("Reading file: {}", file.display());
    let format = format
        .or_else(|| format_for_extension(file))
        .unwrap_or(RdfFormat::Turtle);
    let content = BufReader::new(std::fs::File::open(file)?);
    let parser = RdfParser::from_format(format).for_reader(content);
    let mut graph = Graph::new();
    for quad in parser {
        let quad = quad?;
        let triple = Triple::new(quad.subject, quad.predicate, quad.object);
        graph.insert(&triple);
    }
    Ok(graph)
}

/// Fetch and parse a graph from a URL. An explicit format wins; otherwise
/// the response Content-Type decides, falling back to Turtle.
pub fn read_url(url: &str, format: Option<RdfFormat>) -> Result<Graph> {
    debug!("Reading url: {}", url);

    let client = reqwest::blocking::Client::new();
    let resp = client
        .get(url)
        .header(CONTENT_TYPE, "application/x-turtle")
        .send()?;
    if !resp.status().is_success() {
        return Err(anyhow::anyhow!("Failed to fetch RDF from {}", url));
    }

    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|ct| ct.to_str().ok())
        .and_then(|ct| match ct.split(';').next().unwrap_or(ct).trim() {
            "text/turtle" | "application/x-turtle" => Some(RdfFormat::Turtle),
            "application/rdf+xml" => Some(RdfFormat::RdfXml),
            "application/n-triples" | "text/rdf+n3" => Some(RdfFormat::NTriples),
            other => {
                debug!("Unknown content type: {}", other);
                None
            }
        });
    let format = format.or(content_type).unwrap_or(RdfFormat::Turtle);

    let content = BufReader::new(std::io::Cursor::new(resp.bytes()?));
    let parser = RdfParser::from_format(format).for_reader(content);
    let mut graph = Graph::new();
    for quad in parser {
        let quad = quad?;
        let triple = Triple::new(quad.subject, quad.predicate, quad.object);
        graph.insert(&triple);
    }
    Ok(graph)
}
