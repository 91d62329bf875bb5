use crate::error::ConnError;
use crate::graph::{Graph, VertexId};
use crate::util::io::get_buf_reader;
use crate::util::timer::ConnTimer;
use csv::Reader;
use log::{debug, info};
use std::fs::File;
use std::io::BufReader;

const DEFAULT_SEPARATOR: u8 = b',';
pub const DEFAULT_HAS_HEADERS: bool = false;
/// Largest vertex count the loader infers from the edge records on its own. A larger graph must
/// be given an explicit `vertex_count`.
pub const MAX_INFERRED_VERTEX_COUNT: usize = 1 << 26;

#[derive(Debug, Clone, new)]
pub struct EdgeListOptions {
    has_headers: bool,
    separator: Option<u8>,
    comment_char: Option<u8>,
    /// Inferred as the largest vertex id plus one when absent.
    vertex_count: Option<usize>,
}

impl Default for EdgeListOptions {
    fn default() -> Self {
        Self::new(DEFAULT_HAS_HEADERS, None, None, None)
    }
}

#[derive(Debug, Deserialize)]
struct EdgeRecord(VertexId, VertexId);

/// Builds a `Graph` from a delimited file holding one `src,dst` vertex pair per line.
///
/// Records with an empty vertex field are skipped. Without an explicit `vertex_count` the graph
/// gets one vertex per id up to the largest id seen, so a single large id costs memory for every
/// id below it. Inferred counts above `MAX_INFERRED_VERTEX_COUNT` are rejected as construction
/// errors before anything is allocated.
pub fn load_edge_list(file_path: &str, options: &EdgeListOptions) -> Result<Graph, ConnError> {
    info!("Loading edges from file '{}'", file_path);
    let timer = ConnTimer::now();
    let mut reader = get_csv_reader(file_path, options)?;

    let mut edges = Vec::new();
    let mut empty_count = 0;
    for (index, record) in reader.records().enumerate() {
        let record = record
            .map_err(|e| ConnError::GraphParse(file_path.to_owned(), index, e.to_string()))?;
        if record.iter().any(str::is_empty) {
            debug!("Empty vertex id at record '{}' in file '{}'. Ignoring", index, file_path);
            empty_count += 1;
            continue;
        }
        let EdgeRecord(src, dst) = record
            .deserialize(None)
            .map_err(|e| ConnError::GraphParse(file_path.to_owned(), index, e.to_string()))?;
        edges.push((src, dst));
    }

    let vertex_count = match options.vertex_count {
        Some(vertex_count) => vertex_count,
        None => {
            let inferred = edges
                .iter()
                .map(|&(src, dst)| std::cmp::max(src, dst) as usize + 1)
                .max()
                .unwrap_or(0);
            if inferred > MAX_INFERRED_VERTEX_COUNT {
                return Err(ConnError::InferredVertexCountTooLarge(
                    inferred,
                    MAX_INFERRED_VERTEX_COUNT,
                ));
            }
            inferred
        }
    };
    let graph = Graph::from_edges(vertex_count, edges)?;
    info!(
        "{} vertices and {} edges loaded from '{}' in {} ({} records ignored)",
        graph.vertex_count(),
        graph.edge_count(),
        file_path,
        timer.elapsed(),
        empty_count
    );
    Ok(graph)
}

fn get_csv_reader(
    file_path: &str,
    options: &EdgeListOptions,
) -> Result<Reader<BufReader<File>>, ConnError> {
    Ok(csv::ReaderBuilder::new()
        .has_headers(options.has_headers)
        .delimiter(options.separator.unwrap_or(DEFAULT_SEPARATOR))
        .double_quote(false)
        .comment(options.comment_char)
        .trim(csv::Trim::All)
        .from_reader(get_buf_reader(file_path)?))
}

#[cfg(test)]
mod tests {
    use crate::graph::loader::{load_edge_list, EdgeListOptions};
    use crate::graph::VertexId;
    use itertools::Itertools;

    const TINY_GRAPH: &str = "data/test_data/cc/tiny_graph.csv";
    const TINY_GRAPH_HEADERS: &str = "data/test_data/cc/tiny_graph_headers.txt";
    const MALFORMED: &str = "data/test_data/cc/malformed.csv";
    const MISSING: &str = "data/test_data/cc/missing.csv";
    const HUGE_VERTEX_ID: &str = "data/test_data/cc/huge_vertex_id.csv";

    #[test]
    fn load_inferred_vertex_count() {
        let graph = load_edge_list(TINY_GRAPH, &EdgeListOptions::default()).unwrap();
        assert_eq!(graph.vertex_count(), 13);
        assert_eq!(graph.edge_count(), 13);
        let neighbors = graph.neighbors(0).unwrap().sorted().collect::<Vec<VertexId>>();
        assert_eq!(neighbors, vec![1, 2, 5, 6]);
    }

    #[test]
    fn load_with_headers_comments_and_separator() {
        let options = EdgeListOptions::new(true, Some(b'\t'), Some(b'#'), Some(15));
        let graph = load_edge_list(TINY_GRAPH_HEADERS, &options).unwrap();
        assert_eq!(graph.vertex_count(), 15);
        assert_eq!(graph.edge_count(), 13);
        assert_eq!(graph.degree(14).unwrap(), 0);
    }

    #[test]
    fn vertex_count_too_small() {
        let options = EdgeListOptions::new(false, None, None, Some(10));
        assert!(load_edge_list(TINY_GRAPH, &options).unwrap_err().is_index_range_error());
    }

    #[test]
    fn huge_inferred_vertex_count() {
        let error = load_edge_list(HUGE_VERTEX_ID, &EdgeListOptions::default()).unwrap_err();
        assert!(error.is_construction_error(), "{}", error);
        assert!(error.to_string().contains("4000000001"), "{}", error);

        let options = EdgeListOptions::new(false, None, None, Some(3));
        assert!(load_edge_list(HUGE_VERTEX_ID, &options).unwrap_err().is_index_range_error());
    }

    #[test]
    fn load_errors() {
        let error = load_edge_list(MALFORMED, &EdgeListOptions::default()).unwrap_err();
        assert!(error.to_string().starts_with("[LoadGraphError]"), "{}", error);
        let error = load_edge_list(MISSING, &EdgeListOptions::default()).unwrap_err();
        assert!(error.to_string().starts_with("[IOError]"), "{}", error);
    }
}
