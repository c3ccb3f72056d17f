use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::mst::{MstEdge, MstRun, StepEntry};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serializable report of one run, trace included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MstReport {
    pub n_nodes: usize,
    /// Number of edges in the input list, accepted or not.
    pub input_edges: usize,
    pub mst_edges: Vec<MstEdge>,
    pub total_weight: i64,
    /// False when the input graph was disconnected and the edges form only
    /// a partial forest.
    pub spanning: bool,
    pub trace: Vec<StepEntry>,
}

impl MstReport {
    pub fn new(run: MstRun, input_edges: usize) -> Self {
        let spanning = run.is_spanning();
        MstReport {
            n_nodes: run.n_nodes,
            input_edges,
            mst_edges: run.mst_edges,
            total_weight: run.total_weight,
            spanning,
            trace: run.trace,
        }
    }

    pub fn to_json_string(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Saves the report as pretty-printed JSON.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ReportError> {
        let mut file = File::create(path)?;
        let content = self.to_json_string()?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

impl fmt::Display for MstReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.spanning {
            writeln!(f, "Minimum spanning tree ({} nodes):", self.n_nodes)?;
        } else {
            writeln!(
                f,
                "Graph is disconnected; partial forest ({} nodes):",
                self.n_nodes
            )?;
        }
        for edge in &self.mst_edges {
            writeln!(f, "  Edge: ({}, {}), Weight: {}", edge.u, edge.v, edge.weight)?;
        }
        write!(
            f,
            "Total weight: {} ({} steps recorded)",
            self.total_weight,
            self.trace.len()
        )
    }
}
