use clap::{Parser, Subcommand, ValueHint};

#[derive(Parser)]
#[command(about, version, name = "vgraph")]
/// vgraph command line tool and HTTP server
///
/// Every command runs against a small in-memory library of authors, books and e-books.
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the vgraph HTTP server
    Serve {
        /// Host and port to listen to
        #[arg(short, long, default_value = "localhost:7878", value_hint = ValueHint::Hostname)]
        bind: String,
        /// Allows cross-origin requests
        #[arg(long)]
        cors: bool,
    },
    /// Resolve a JSON triple pattern and print the matching triples as JSON
    Query {
        /// The pattern, e.g. '{"subject": {"type": "UNBOUND"}, "predicate": {"type": "UNBOUND"}, "object": {"type": "UNBOUND"}}'
        #[arg(short, long)]
        pattern: String,
    },
    /// Evaluate a SPARQL query and print its results
    Sparql {
        /// The SPARQL query
        query: String,
        /// The output format
        ///
        /// It can be an extension like "tsv" or a MIME type like "application/sparql-results+json".
        /// Solutions default to TSV and graphs to N-Triples.
        #[arg(long)]
        format: Option<String>,
    },
}
