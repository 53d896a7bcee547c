use crate::cli::{Args, Command};
use anyhow::{bail, Context};
use clap::Parser;
use oxrdfio::{RdfFormat, RdfSerializer};
use sparesults::{QueryResultsFormat, QueryResultsSerializer};
use std::io::{stdout, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;
use vgraph_engine::{evaluate_sparql, CancellationFlag, QueryResults, VirtualGraph};
use vgraph_web::wire::{decode_pattern, encode_triple, JsonTriple};
use vgraph_web::ServerConfig;

mod cli;
mod library;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Args::parse();
    let graph = library::graph()?;
    info!(
        classes = graph.schema().classes().len(),
        attributes = graph.schema().attributes().len(),
        "demo library loaded"
    );
    match matches.command {
        Command::Serve { bind, cors } => {
            let config = ServerConfig {
                cors,
                ..ServerConfig::new(graph, bind)
            };
            vgraph_web::serve(config).await
        }
        Command::Query { pattern } => query(&graph, &pattern),
        Command::Sparql { query, format } => sparql(&graph, &query, format.as_deref()),
    }
}

fn query(graph: &VirtualGraph, pattern: &str) -> anyhow::Result<()> {
    let pattern: JsonTriple =
        serde_json::from_str(pattern).context("The pattern is not a valid JSON triple pattern")?;
    let triples = match decode_pattern(graph, &pattern)? {
        Some(pattern) => graph.resolve(&pattern),
        None => Vec::new(),
    };
    let triples = triples
        .iter()
        .map(|triple| encode_triple(graph.schema(), triple))
        .collect::<Vec<_>>();

    let mut stdout = stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &triples)?;
    writeln!(stdout)?;
    Ok(())
}

fn sparql(graph: &VirtualGraph, query: &str, format: Option<&str>) -> anyhow::Result<()> {
    let results = evaluate_sparql(graph, query, &CancellationFlag::new())?;
    let mut stdout = stdout().lock();
    match results {
        QueryResults::Solutions(solutions) => {
            let format = results_format_from_name(format.unwrap_or("tsv"))?;
            let mut serializer = QueryResultsSerializer::from_format(format)
                .serialize_solutions_to_writer(&mut stdout, solutions.variables().to_vec())?;
            for solution in solutions {
                serializer.serialize(&solution?)?;
            }
            serializer.finish()?;
        }
        QueryResults::Boolean(value) => {
            let format = results_format_from_name(format.unwrap_or("tsv"))?;
            QueryResultsSerializer::from_format(format)
                .serialize_boolean_to_writer(&mut stdout, value)?;
        }
        QueryResults::Graph(triples) => {
            let format = rdf_format_from_name(format.unwrap_or("nt"))?;
            let mut serializer = RdfSerializer::from_format(format).for_writer(&mut stdout);
            for triple in triples {
                serializer.serialize_triple(triple?.as_ref())?;
            }
            serializer.finish()?;
        }
    }
    Ok(())
}

fn rdf_format_from_name(name: &str) -> anyhow::Result<RdfFormat> {
    if let Some(t) = RdfFormat::from_extension(name) {
        return Ok(t);
    }
    if let Some(t) = RdfFormat::from_media_type(name) {
        return Ok(t);
    }
    bail!("The graph format '{name}' is unknown")
}

fn results_format_from_name(name: &str) -> anyhow::Result<QueryResultsFormat> {
    if let Some(t) = QueryResultsFormat::from_extension(name) {
        return Ok(t);
    }
    if let Some(t) = QueryResultsFormat::from_media_type(name) {
        return Ok(t);
    }
    bail!("The results format '{name}' is unknown")
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_cmd::Command;
    use predicates::prelude::*;

    fn cli_command() -> Command {
        let mut command = Command::new(env!("CARGO"));
        command
            .arg("run")
            .arg("--bin")
            .arg("vgraph")
            .arg("--quiet");
        command.arg("--");
        command
    }

    #[test]
    fn cli_help() {
        cli_command()
            .assert()
            .failure()
            .stdout("")
            .stderr(predicate::str::contains("vgraph"));
    }

    #[test]
    fn cli_query() {
        cli_command()
            .arg("query")
            .arg("--pattern")
            .arg(format!(
                r#"{{"subject": {{"type": "URI", "uri": "{}good-omens"}}, "predicate": {{"type": "URI", "uri": "{}"}}, "object": {{"type": "UNBOUND"}}}}"#,
                library::iri::BOOKS,
                library::iri::WRITTEN_BY
            ))
            .assert()
            .success()
            .stdout(predicate::str::contains(format!("{}pratchett", library::iri::AUTHORS)))
            .stdout(predicate::str::contains(format!("{}gaiman", library::iri::AUTHORS)));
    }

    #[test]
    fn cli_query_malformed() {
        cli_command()
            .arg("query")
            .arg("--pattern")
            .arg(r#"{"subject": {"type": "UNBOUND"}}"#)
            .assert()
            .failure();
    }

    #[test]
    fn cli_sparql() {
        cli_command()
            .arg("sparql")
            .arg(format!(
                "SELECT ?title WHERE {{ ?book a <{}> ; <{}> ?title }} ORDER BY ?title",
                library::iri::EBOOK,
                library::iri::TITLE
            ))
            .assert()
            .success()
            .stdout("?title\n\"Good Omens\"\n\"The Dispossessed\"\n");
    }

    #[test]
    fn cli_sparql_unknown_format() {
        cli_command()
            .arg("sparql")
            .arg("ASK {}")
            .arg("--format")
            .arg("docx")
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown"));
    }

    #[test]
    fn demo_library_resolves_e_books_as_books() {
        let graph = library::graph().unwrap();
        let book = graph.lookup(library::iri::BOOK).unwrap();
        let count = graph
            .resolve(&vgraph_model::TriplePattern::new(
                vgraph_model::Node::Unbound,
                vgraph_model::Vocabulary::RdfType,
                book,
            ))
            .len();
        assert_eq!(count, 4);
    }

    #[test]
    fn clap_debug() {
        use clap::CommandFactory;

        Args::command().debug_assert()
    }
}
