use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};

use mst_steps::config::MstConfig;
use mst_steps::mst::compute_mst;
use mst_steps::options::Options;
use mst_steps::parse::parse_edge_list;
use mst_steps::report::MstReport;
use mst_steps::viz;

fn main() -> Result<()> {
    if std::env::var("MST_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("MST_LOG")
            .write_style("MST_LOG_STYLE");
        env_logger::init_from_env(e);
    } else {
        env_logger::init();
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = Options::parse_from_args(&args)?;
    debug!("options: {:?}", options);

    let config = MstConfig::load_from_file(&options.config)?;

    let input = fs::read_to_string(&options.input)
        .with_context(|| format!("Failed to read edge list: {}", options.input))?;
    let edges = parse_edge_list(&input, options.n_nodes, &config)?;
    info!(
        "parsed {} edges over {} nodes from {}",
        edges.len(),
        options.n_nodes,
        options.input
    );

    let run = compute_mst(options.n_nodes, &edges);
    for entry in &run.trace {
        debug!("{entry}");
    }

    if let Some(path) = &options.dot {
        let last = run.trace.last().expect("trace always has an initial entry");
        viz::write_dot(path, &viz::step_dot(options.n_nodes, &edges, last))
            .with_context(|| format!("Failed to write DOT file: {path}"))?;
        info!("final step rendering written to {path}");
    }

    if let Some(dir) = &options.dot_dir {
        for (index, entry) in run.trace.iter().enumerate() {
            let path = Path::new(dir).join(format!("step_{index:03}.dot"));
            viz::write_dot(&path, &viz::step_dot(options.n_nodes, &edges, entry))
                .with_context(|| format!("Failed to write DOT file: {}", path.display()))?;
        }
        info!("{} step renderings written to {dir}", run.trace.len());
    }

    let report = MstReport::new(run, edges.len());
    report
        .save_to_file(&options.output)
        .with_context(|| format!("Failed to write report: {}", options.output))?;
    info!("report written to {}", options.output);

    println!("{report}");
    Ok(())
}
