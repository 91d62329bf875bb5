#[derive(Debug)]
pub enum ConnError {
    Generic(String),
    ReadFile(String, String),
    GraphParse(String, usize, String),
    InvalidGridSize(usize),
    InvalidVertexCount(usize),
    InferredVertexCountTooLarge(usize, usize),
    InvalidTrialCount(usize),
    OutOfMemory(&'static str, usize),
    SiteOutOfRange(usize, usize, usize),
    VertexOutOfRange(usize, usize),
    ElementOutOfRange(usize, usize),
}

impl ConnError {
    /// Errors raised while building a structure. No partially built value is ever returned.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            ConnError::InvalidGridSize(_)
                | ConnError::InvalidVertexCount(_)
                | ConnError::InferredVertexCountTooLarge(..)
                | ConnError::InvalidTrialCount(_)
                | ConnError::OutOfMemory(..)
        )
    }

    /// Caller-correctable precondition failures on a coordinate, vertex or element index.
    pub fn is_index_range_error(&self) -> bool {
        matches!(
            self,
            ConnError::SiteOutOfRange(..)
                | ConnError::VertexOutOfRange(..)
                | ConnError::ElementOutOfRange(..)
        )
    }
}

impl std::fmt::Display for ConnError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConnError::Generic(msg) => write!(f, "[ConnError] {}", msg)?,
            ConnError::ReadFile(file_path, e) => {
                write!(f, "[IOError] Could not open file '{}' for reading: {}", file_path, e)?;
            }
            ConnError::GraphParse(file_path, index, e) => write!(
                f,
                "[LoadGraphError] Could not parse edge record {} in file '{}': {}",
                index, file_path, e
            )?,
            ConnError::InvalidGridSize(n) => {
                write!(f, "[ConstructionError] Grid size must be at least 1, got {}", n)?;
            }
            ConnError::InvalidVertexCount(n) => write!(
                f,
                "[ConstructionError] Vertex count must be between 1 and {}, got {}",
                u64::from(crate::graph::VertexId::MAX) + 1,
                n
            )?,
            ConnError::InferredVertexCountTooLarge(n, limit) => write!(
                f,
                "[ConstructionError] Inferred vertex count {} exceeds {}; pass the vertex count explicitly",
                n, limit
            )?,
            ConnError::InvalidTrialCount(n) => {
                write!(f, "[ConstructionError] Trial count must be at least 1, got {}", n)?;
            }
            ConnError::OutOfMemory(what, len) => {
                write!(f, "[ConstructionError] Could not allocate {} for {} entries", what, len)?;
            }
            ConnError::SiteOutOfRange(row, col, n) => write!(
                f,
                "[IndexRangeError] Site ({}, {}) is outside the {}x{} grid (rows and columns are 1..={})",
                row, col, n, n, n
            )?,
            ConnError::VertexOutOfRange(v, count) => write!(
                f,
                "[IndexRangeError] Vertex {} is outside the graph with {} {}",
                v,
                count,
                if *count == 1 { "vertex" } else { "vertices" }
            )?,
            ConnError::ElementOutOfRange(i, len) => {
                write!(f, "[IndexRangeError] Element {} is outside 0..{}", i, len)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ConnError {}
