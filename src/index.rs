//! Static packed R-tree over region envelopes.
//!
//! The index answers one question: which regions' bounding envelopes could
//! contain a point? It never looks at polygon rings. It is built once with
//! sort-tile-recursive packing (see [`str_pack`](crate::compute::spatial::str_pack))
//! and is immutable afterwards, so it needs no rebalancing and no locking.
//!
//! ## Layout
//!
//! Nodes live in a flat arena (`Vec<Node>`) and refer to their children by
//! position. Leaves hold up to `node_capacity` `(envelope, handle)` entries;
//! internal nodes hold up to `node_capacity` child ids. Every node caches the
//! union of its children's envelopes.
//!
//! ## Query
//!
//! A depth-first walk from the root that skips any subtree whose envelope
//! fails the predicate. Each region sits in exactly one leaf, so results
//! contain no duplicates. Results may include false positives (envelope hit,
//! polygon miss); the resolver filters those.

use crate::compute::spatial::str_pack::{MIN_NODE_CAPACITY, pack};
use crate::store::{RegionHandle, RegionStore};
use geo::Coord;
use smallvec::SmallVec;
use tzlocate_types::envelope::Envelope;

/// Default number of entries per node.
pub const DEFAULT_NODE_CAPACITY: usize = 16;

/// Candidates returned by a point query. Most points hit one or two regions.
pub type Candidates = SmallVec<[RegionHandle; 8]>;

/// A region envelope paired with its handle, as stored in leaves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexEntry {
    pub envelope: Envelope,
    pub handle: RegionHandle,
}

#[derive(Debug, Clone)]
struct Node {
    envelope: Envelope,
    kind: NodeKind,
}

#[derive(Debug, Clone)]
enum NodeKind {
    Leaf(Vec<IndexEntry>),
    Internal(Vec<usize>),
}

/// Shape of a built index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    /// Number of indexed regions
    pub entries: usize,
    /// Total nodes, leaves included
    pub nodes: usize,
    pub leaves: usize,
    /// Levels from root to leaves; 0 for an empty index
    pub height: usize,
    pub node_capacity: usize,
}

/// Immutable bounding-box tree over region envelopes.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    nodes: Vec<Node>,
    root: Option<usize>,
    len: usize,
    height: usize,
    node_capacity: usize,
}

impl SpatialIndex {
    /// Bulk-build an index over `entries`.
    ///
    /// An empty input produces an empty index whose queries return nothing.
    /// `node_capacity` below 2 is raised to 2.
    ///
    /// # Examples
    ///
    /// ```
    /// use tzlocate::{RegionStore, SpatialIndex};
    /// use geo::polygon;
    ///
    /// let mut store = RegionStore::new();
    /// store.add(polygon![(x: 0.0, y: 0.0), (x: 0.0, y: 1.0), (x: 1.0, y: 1.0)], "Zone/A")?;
    ///
    /// let index = SpatialIndex::build(store.index_entries(), 16);
    /// assert_eq!(index.query_point(0.9, 0.1).len(), 1);
    /// assert!(index.query_point(2.0, 2.0).is_empty());
    /// # Ok::<(), tzlocate::TzError>(())
    /// ```
    pub fn build<I>(entries: I, node_capacity: usize) -> Self
    where
        I: IntoIterator<Item = IndexEntry>,
    {
        let node_capacity = node_capacity.max(MIN_NODE_CAPACITY);
        let entries: Vec<IndexEntry> = entries.into_iter().collect();
        let len = entries.len();
        let mut nodes = Vec::with_capacity(len.div_ceil(node_capacity) * 2);

        let mut level: Vec<(Envelope, usize)> = Vec::new();
        for group in pack(entries, node_capacity, |e| e.envelope) {
            let Some(envelope) = Envelope::union_all(group.iter().map(|e| &e.envelope)) else {
                continue;
            };
            level.push((envelope, push_node(&mut nodes, envelope, NodeKind::Leaf(group))));
        }

        let mut height = usize::from(!level.is_empty());
        while level.len() > 1 {
            let mut next = Vec::with_capacity(level.len().div_ceil(node_capacity));
            for group in pack(level, node_capacity, |(envelope, _)| *envelope) {
                let Some(envelope) = Envelope::union_all(group.iter().map(|(e, _)| e)) else {
                    continue;
                };
                let children = group.into_iter().map(|(_, id)| id).collect();
                next.push((envelope, push_node(&mut nodes, envelope, NodeKind::Internal(children))));
            }
            level = next;
            height += 1;
        }

        Self {
            root: level.first().map(|(_, id)| *id),
            nodes,
            len,
            height,
            node_capacity,
        }
    }

    /// Build over every region currently in `store`.
    pub fn from_store(store: &RegionStore, node_capacity: usize) -> Self {
        Self::build(store.index_entries(), node_capacity)
    }

    /// Every region whose envelope contains `(x, y)`, borders included.
    ///
    /// Order is unspecified. Non-finite coordinates match nothing.
    pub fn query_point(&self, x: f64, y: f64) -> Candidates {
        let mut found = Candidates::new();
        self.search(|envelope| envelope.contains_xy(x, y), |handle| found.push(handle));
        found
    }

    pub fn query_coord(&self, coord: Coord<f64>) -> Candidates {
        self.query_point(coord.x, coord.y)
    }

    /// Every region whose envelope intersects `query`.
    pub fn query_envelope(&self, query: &Envelope) -> Vec<RegionHandle> {
        let mut found = Vec::new();
        self.search(|envelope| envelope.intersects(query), |handle| found.push(handle));
        found
    }

    fn search<P, F>(&self, predicate: P, mut emit: F)
    where
        P: Fn(&Envelope) -> bool,
        F: FnMut(RegionHandle),
    {
        let Some(root) = self.root else {
            return;
        };

        let mut stack: SmallVec<[usize; 32]> = SmallVec::new();
        stack.push(root);

        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            if !predicate(&node.envelope) {
                continue;
            }
            match &node.kind {
                NodeKind::Leaf(entries) => entries
                    .iter()
                    .filter(|entry| predicate(&entry.envelope))
                    .for_each(|entry| emit(entry.handle)),
                NodeKind::Internal(children) => stack.extend(children.iter().copied()),
            }
        }
    }

    /// Number of indexed regions.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node.kind, NodeKind::Leaf(_)))
            .count()
    }

    pub fn node_capacity(&self) -> usize {
        self.node_capacity
    }

    /// Envelope covering every indexed region, if any.
    pub fn bounds(&self) -> Option<Envelope> {
        self.root.map(|root| self.nodes[root].envelope)
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            entries: self.len,
            nodes: self.node_count(),
            leaves: self.leaf_count(),
            height: self.height,
            node_capacity: self.node_capacity,
        }
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::build(std::iter::empty(), DEFAULT_NODE_CAPACITY)
    }
}

fn push_node(nodes: &mut Vec<Node>, envelope: Envelope, kind: NodeKind) -> usize {
    nodes.push(Node { envelope, kind });
    nodes.len() - 1
}
