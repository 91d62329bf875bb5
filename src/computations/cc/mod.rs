use crate::error::ConnError;
use crate::graph::{Graph, VertexId};
use crate::util::timer::ConnTimer;
use log::debug;

const NAME: &str = "CC";

pub type ComponentId = usize;

/// Partition of a graph's vertices into connected components.
///
/// Components are numbered in the order of their lowest vertex id, starting from 0. The analysis
/// runs once, at construction, with an iterative depth-first search. A vertex is marked when it
/// is pushed, so the explicit stack never holds more than `vertex_count` entries.
#[derive(Debug, Clone)]
pub struct ConnectedComponents {
    ids: Vec<ComponentId>,
    sizes: Vec<usize>,
    max_stack_depth: usize,
}

impl ConnectedComponents {
    pub fn new(graph: &Graph) -> Self {
        let timer = ConnTimer::now();
        let vertex_count = graph.vertex_count();
        let mut visited = vec![false; vertex_count];
        let mut ids = vec![0; vertex_count];
        let mut sizes = Vec::new();
        let mut stack: Vec<VertexId> = Vec::new();
        let mut max_stack_depth = 0;

        for start in 0..vertex_count {
            if visited[start] {
                continue;
            }
            let component = sizes.len();
            let mut size = 0;
            visited[start] = true;
            stack.push(start as VertexId);
            max_stack_depth = std::cmp::max(max_stack_depth, stack.len());
            while let Some(v) = stack.pop() {
                ids[v as usize] = component;
                size += 1;
                for w in graph.adjacent(v) {
                    if !visited[w as usize] {
                        visited[w as usize] = true;
                        stack.push(w);
                    }
                }
                max_stack_depth = std::cmp::max(max_stack_depth, stack.len());
            }
            sizes.push(size);
        }

        debug!(
            "[{}] Found {} components among {} vertices in {} (max stack depth {})",
            NAME,
            sizes.len(),
            vertex_count,
            timer.elapsed(),
            max_stack_depth
        );
        Self { ids, sizes, max_stack_depth }
    }

    /// Number of connected components.
    pub fn count(&self) -> usize {
        self.sizes.len()
    }

    /// Component id of vertex `v`.
    pub fn id(&self, v: VertexId) -> Result<ComponentId, ConnError> {
        self.check_vertex(v)?;
        Ok(self.ids[v as usize])
    }

    /// Number of vertices in the component containing `v`.
    pub fn size(&self, v: VertexId) -> Result<usize, ConnError> {
        Ok(self.sizes[self.id(v)?])
    }

    pub fn connected(&self, v: VertexId, w: VertexId) -> Result<bool, ConnError> {
        Ok(self.id(v)? == self.id(w)?)
    }

    /// Vertex counts indexed by component id.
    pub fn component_sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Vertices grouped by component id, each group in ascending vertex order.
    pub fn components(&self) -> Vec<Vec<VertexId>> {
        let mut components =
            self.sizes.iter().map(|size| Vec::with_capacity(*size)).collect::<Vec<_>>();
        for (v, id) in self.ids.iter().enumerate() {
            components[*id].push(v as VertexId);
        }
        components
    }

    /// Largest number of vertices waiting on the traversal stack at any point.
    pub fn max_stack_depth(&self) -> usize {
        self.max_stack_depth
    }

    fn check_vertex(&self, v: VertexId) -> Result<(), ConnError> {
        if (v as usize) < self.ids.len() {
            Ok(())
        } else {
            Err(ConnError::VertexOutOfRange(v as usize, self.ids.len()))
        }
    }
}
