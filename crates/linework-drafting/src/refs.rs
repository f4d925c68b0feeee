//! Reference table: parallel arrays mapping emitted drawing geometry
//! back to source topology.
//!
//! Stored values are the kernel's own 1-based entity enumeration
//! indices, so a given edge keeps its reference across recomputation
//! as long as the source topology's ordering is unchanged. That
//! stability is an assumption about the kernel, not a guarantee
//! across kernel upgrades.

use serde::{Deserialize, Serialize};

use crate::error::ReferenceError;

/// Parallel reference arrays for edges, vertices, and faces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceTable {
    edges: Vec<i32>,
    vertices: Vec<i32>,
    faces: Vec<i32>,
}

fn record(
    refs: &mut Vec<i32>,
    index: usize,
    reference: i32,
    geometry_len: usize,
) -> Result<(), ReferenceError> {
    // The next reference slot must be exactly the primitive being
    // appended; anything else means the extractor lost alignment.
    if index != refs.len() || index >= geometry_len {
        return Err(ReferenceError::OutOfOrder {
            index,
            recorded: refs.len(),
            geometry_len,
        });
    }
    refs.push(reference);
    Ok(())
}

impl ReferenceTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the source reference for edge primitive `index`.
    /// `geometry_len` is the edge geometry array length at call time.
    pub fn record_edge(
        &mut self,
        index: usize,
        reference: i32,
        geometry_len: usize,
    ) -> Result<(), ReferenceError> {
        record(&mut self.edges, index, reference, geometry_len)
    }

    /// Record the source reference for vertex primitive `index`.
    pub fn record_vertex(
        &mut self,
        index: usize,
        reference: i32,
        geometry_len: usize,
    ) -> Result<(), ReferenceError> {
        record(&mut self.vertices, index, reference, geometry_len)
    }

    /// Record the source reference for face primitive `index`.
    pub fn record_face(
        &mut self,
        index: usize,
        reference: i32,
        geometry_len: usize,
    ) -> Result<(), ReferenceError> {
        record(&mut self.faces, index, reference, geometry_len)
    }

    /// Source reference of edge primitive `index`. O(1).
    pub fn lookup_edge(&self, index: usize) -> Option<i32> {
        self.edges.get(index).copied()
    }

    /// Source reference of vertex primitive `index`. O(1).
    pub fn lookup_vertex(&self, index: usize) -> Option<i32> {
        self.vertices.get(index).copied()
    }

    /// Source reference of face primitive `index`. O(1).
    pub fn lookup_face(&self, index: usize) -> Option<i32> {
        self.faces.get(index).copied()
    }

    /// Selectable topological name for edge primitive `index`, e.g.
    /// `"Edge7"`. `None` for synthetic geometry.
    pub fn edge_name(&self, index: usize) -> Option<String> {
        self.lookup_edge(index)
            .filter(|&r| r > 0)
            .map(|r| format!("Edge{r}"))
    }

    /// Selectable topological name for vertex primitive `index`, e.g.
    /// `"Vertex3"`. `None` for synthetic geometry.
    pub fn vertex_name(&self, index: usize) -> Option<String> {
        self.lookup_vertex(index)
            .filter(|&r| r > 0)
            .map(|r| format!("Vertex{r}"))
    }

    /// All edge references, aligned with the edge geometry array.
    pub fn edge_refs(&self) -> &[i32] {
        &self.edges
    }

    /// All vertex references, aligned with the vertex geometry array.
    pub fn vertex_refs(&self) -> &[i32] {
        &self.vertices
    }

    /// All face references, aligned with the face geometry array.
    pub fn face_refs(&self) -> &[i32] {
        &self.faces
    }
}
