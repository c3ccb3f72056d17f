//! Edge-list text parsing, the validation boundary in front of the engine.
//!
//! One edge per line as `weight,node1,node2` (delimiter configurable), with
//! blank lines and comment lines skipped. Every node id is checked against
//! the declared node count here; [`crate::mst::compute_mst`] itself does no
//! bounds validation and is entitled to panic if this layer is bypassed.

use std::num::ParseIntError;

use log::debug;
use thiserror::Error;

use crate::config::MstConfig;
use crate::mst::Edge;

#[derive(Debug, Error)]
pub enum EdgeListError {
    #[error("line {line}: expected weight{delimiter}node1{delimiter}node2, got '{content}'")]
    Malformed {
        line: usize,
        delimiter: String,
        content: String,
    },
    #[error("line {line}: {field} '{value}' is not an integer")]
    Number {
        line: usize,
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("line {line}: node {node} out of range, nodes must be below {n_nodes}")]
    NodeOutOfRange {
        line: usize,
        node: usize,
        n_nodes: usize,
    },
}

/// Parses an edge list for a graph on `0..n_nodes`.
///
/// Line numbers in errors are 1-based. An empty input is not an error; it
/// parses to an empty edge list.
pub fn parse_edge_list(
    input: &str,
    n_nodes: usize,
    config: &MstConfig,
) -> Result<Vec<Edge>, EdgeListError> {
    let mut edges = Vec::new();

    for (index, raw_line) in input.lines().enumerate() {
        let line = index + 1;
        let text = raw_line.trim();
        if text.is_empty() || text.starts_with(&config.comment) {
            continue;
        }

        let fields: Vec<&str> = text.split(config.delimiter.as_str()).collect();
        let &[weight, u, v] = fields.as_slice() else {
            return Err(EdgeListError::Malformed {
                line,
                delimiter: config.delimiter.clone(),
                content: text.to_string(),
            });
        };

        let weight = parse_number::<i64>(weight, line, "weight")?;
        let u = parse_number::<usize>(u, line, "node1")?;
        let v = parse_number::<usize>(v, line, "node2")?;

        for node in [u, v] {
            if node >= n_nodes {
                return Err(EdgeListError::NodeOutOfRange {
                    line,
                    node,
                    n_nodes,
                });
            }
        }

        edges.push(Edge::new(weight, u, v));
    }

    debug!("parsed {} edges over {} nodes", edges.len(), n_nodes);
    Ok(edges)
}

fn parse_number<T: std::str::FromStr<Err = ParseIntError>>(
    field: &str,
    line: usize,
    name: &'static str,
) -> Result<T, EdgeListError> {
    field.trim().parse().map_err(|source| EdgeListError::Number {
        line,
        field: name,
        value: field.trim().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_lines_and_skips_blanks_and_comments() {
        let input = "# demo graph\n10, 0, 1\n\n  15 ,0,2  \n12,1,3\n";
        let edges = parse_edge_list(input, 4, &MstConfig::default()).unwrap();
        assert_eq!(
            edges,
            vec![Edge::new(10, 0, 1), Edge::new(15, 0, 2), Edge::new(12, 1, 3)]
        );
    }

    #[test]
    fn empty_input_is_an_empty_edge_list() {
        let edges = parse_edge_list("", 3, &MstConfig::default()).unwrap();
        assert!(edges.is_empty());
    }

    #[test]
    fn negative_weights_are_accepted() {
        let edges = parse_edge_list("-4,0,1", 2, &MstConfig::default()).unwrap();
        assert_eq!(edges, vec![Edge::new(-4, 0, 1)]);
    }

    #[test]
    fn custom_delimiter() {
        let config = MstConfig {
            delimiter: ";".to_string(),
            ..MstConfig::default()
        };
        let edges = parse_edge_list("3;1;2", 3, &config).unwrap();
        assert_eq!(edges, vec![Edge::new(3, 1, 2)]);
    }

    #[test]
    fn wrong_field_count_is_rejected_with_line_number() {
        let err = parse_edge_list("1,0,1\n2,3\n", 4, &MstConfig::default()).unwrap_err();
        match err {
            EdgeListError::Malformed { line, content, .. } => {
                assert_eq!(line, 2);
                assert_eq!(content, "2,3");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_numeric_field_is_rejected() {
        let err = parse_edge_list("1,zero,1", 4, &MstConfig::default()).unwrap_err();
        match err {
            EdgeListError::Number { line, field, value, .. } => {
                assert_eq!(line, 1);
                assert_eq!(field, "node1");
                assert_eq!(value, "zero");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn out_of_range_node_is_rejected() {
        let err = parse_edge_list("1,0,5", 4, &MstConfig::default()).unwrap_err();
        match err {
            EdgeListError::NodeOutOfRange { line, node, n_nodes } => {
                assert_eq!((line, node, n_nodes), (1, 5, 4));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
