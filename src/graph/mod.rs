use crate::error::ConnError;
use hashbrown::HashSet;
use log::debug;
use std::convert::TryFrom;

pub mod loader;

pub type VertexId = u32;

/// An undirected graph stored as one neighbor set per vertex.
///
/// Neighbor storage is set-like, so adding the same edge twice (in either direction) is a no-op.
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: Vec<HashSet<VertexId>>,
    edge_count: usize,
}

impl Graph {
    /// Memory grows with `vertex_count`, one empty neighbor set per vertex. A count whose
    /// storage cannot be allocated is reported as a construction error.
    pub fn new(vertex_count: usize) -> Result<Self, ConnError> {
        if vertex_count < 1 || VertexId::try_from(vertex_count - 1).is_err() {
            return Err(ConnError::InvalidVertexCount(vertex_count));
        }
        debug!("Creating graph with {} vertices", vertex_count);
        let mut adjacency = Vec::new();
        adjacency
            .try_reserve_exact(vertex_count)
            .map_err(|_| ConnError::OutOfMemory("adjacency sets", vertex_count))?;
        adjacency.resize_with(vertex_count, HashSet::new);
        Ok(Self { adjacency, edge_count: 0 })
    }

    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (VertexId, VertexId)>,
    ) -> Result<Self, ConnError> {
        let mut graph = Self::new(vertex_count)?;
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct undirected edges, self-loops included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<(), ConnError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if self.adjacency[u as usize].insert(v) {
            self.adjacency[v as usize].insert(u);
            self.edge_count += 1;
        }
        Ok(())
    }

    pub fn neighbors(
        &self,
        v: VertexId,
    ) -> Result<impl Iterator<Item = VertexId> + '_, ConnError> {
        self.check_vertex(v)?;
        Ok(self.adjacent(v))
    }

    pub fn degree(&self, v: VertexId) -> Result<usize, ConnError> {
        self.check_vertex(v)?;
        Ok(self.adjacency[v as usize].len())
    }

    #[inline]
    pub(crate) fn adjacent(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency[v as usize].iter().copied()
    }

    #[inline]
    pub(crate) fn check_vertex(&self, v: VertexId) -> Result<(), ConnError> {
        if (v as usize) < self.adjacency.len() {
            Ok(())
        } else {
            Err(ConnError::VertexOutOfRange(v as usize, self.adjacency.len()))
        }
    }
}
