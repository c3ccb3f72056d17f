//! Command-line options.
//! `mst <EDGES_FILE> -n {nodes}` plus report/DOT output paths.

use anyhow::Result;
use clap::{Arg, Command};

fn make_options_parser() -> clap::Command {
    let parser = Command::new("mst")
        .no_binary_name(true)
        .about("Kruskal minimum spanning tree with a step-by-step trace")
        .version("v0.1.0")
        .arg(
            Arg::new("input")
                .value_name("EDGES_FILE")
                .help("File with one edge per line: weight,node1,node2")
                .required(true),
        )
        .arg(
            Arg::new("nodes")
                .short('n')
                .long("nodes")
                .value_name("COUNT")
                .help("Number of nodes; ids run from 0 to COUNT-1")
                .value_parser(clap::value_parser!(usize))
                .required(true),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Path to file where the JSON run report will be stored")
                .default_value("mst_report.json"),
        )
        .arg(
            Arg::new("dot")
                .long("dot")
                .value_name("FILE")
                .help("Write a DOT rendering of the final step"),
        )
        .arg(
            Arg::new("dot-dir")
                .long("dot-dir")
                .value_name("DIR")
                .help("Write one DOT rendering per trace step into DIR"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .default_value("mst.toml"),
        );
    parser
}

#[derive(Debug, Default)]
pub struct Options {
    pub input: String,
    pub n_nodes: usize,
    pub output: String,
    pub dot: Option<String>,
    pub dot_dir: Option<String>,
    pub config: String,
}

impl Options {
    pub fn parse_from_str(s: &str) -> Result<Self> {
        let flags = shellwords::split(s)?;
        Self::parse_from_args(&flags)
    }

    pub fn parse_from_args(flags: &[String]) -> Result<Self> {
        let app = make_options_parser();
        let matches = app.try_get_matches_from(flags.iter())?;

        let input = matches.get_one::<String>("input").unwrap().to_string();
        let n_nodes = *matches.get_one::<usize>("nodes").unwrap();
        let output = matches.get_one::<String>("output").unwrap().to_string();
        let dot = matches.get_one::<String>("dot").map(String::to_string);
        let dot_dir = matches.get_one::<String>("dot-dir").map(String::to_string);
        let config = matches.get_one::<String>("config").unwrap().to_string();

        Ok(Options {
            input,
            n_nodes,
            output,
            dot,
            dot_dir,
            config,
        })
    }
}
