use std::borrow::Borrow;

use tracing::debug;

use super::*;

/// Maps labels to node indices and back. Indices are assigned in insertion order.
///
/// # Example
/// ```
/// use wgraphs::utils::*;
///
/// let mut labels = NodeLabels::new();
/// assert_eq!(labels.insert("Euston"), 0);
/// assert_eq!(labels.insert("Angel"), 1);
/// assert_eq!(labels.insert("Euston"), 0);
///
/// assert_eq!(labels.id_of("Angel"), Some(1));
/// assert_eq!(labels.label_of(0), Some("Euston"));
/// assert_eq!(labels.label_of(2), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeLabels {
    ids: FxHashMap<String, Node>,
    labels: Vec<String>,
}

impl NodeLabels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of `label`, assigning the next free index if it is new
    pub fn insert<S: Into<String>>(&mut self, label: S) -> Node {
        let label = label.into();
        if let Some(&id) = self.ids.get(&label) {
            return id;
        }

        let id = self.labels.len() as Node;
        self.ids.insert(label.clone(), id);
        self.labels.push(label);
        id
    }

    pub fn id_of<Q>(&self, label: &Q) -> Option<Node>
    where
        String: Borrow<Q>,
        Q: std::hash::Hash + Eq + ?Sized,
    {
        self.ids.get(label).copied()
    }

    pub fn label_of(&self, u: Node) -> Option<&str> {
        self.labels.get(u as usize).map(String::as_str)
    }

    /// Number of labelled nodes
    pub fn number_of_nodes(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels ordered by node index
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Replaces the endpoints of `edge` by their labels.
    /// Returns `None` if an endpoint is not labelled.
    pub fn label_edge<W: Copy>(&self, edge: &WeightedEdge<W>) -> Option<(&str, &str, W)> {
        Some((self.label_of(edge.u)?, self.label_of(edge.v)?, edge.weight))
    }
}

impl<S: Into<String>> FromIterator<S> for NodeLabels {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut labels = Self::new();
        for label in iter {
            labels.insert(label);
        }
        labels
    }
}

/// Builds an undirected weighted graph from labelled connections.
///
/// If the same pair of labels is connected several times, only the lightest connection is kept.
/// Connections are inserted in the order their label pair first appeared.
///
/// # Example
/// ```
/// use wgraphs::{prelude::*, utils::*};
///
/// let (graph, labels) = LabelledGraphBuilder::new()
///     .connection("A", "B", 5)
///     .connection("B", "C", 2)
///     .connection("B", "A", 3)
///     .build();
///
/// assert_eq!(graph.number_of_edges(), 2);
/// assert_eq!(graph.weight_of(labels.id_of("A").unwrap(), labels.id_of("B").unwrap()), Some(3));
/// ```
#[derive(Debug, Clone)]
pub struct LabelledGraphBuilder<W = i64> {
    labels: NodeLabels,
    connections: Vec<WeightedEdge<W>>,
    position: FxHashMap<Edge, usize>,
}

impl<W> Default for LabelledGraphBuilder<W> {
    fn default() -> Self {
        Self {
            labels: NodeLabels::default(),
            connections: Vec::new(),
            position: FxHashMap::default(),
        }
    }
}

impl<W: Weight> LabelledGraphBuilder<W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a node without connecting it
    pub fn add_station<S: Into<String>>(&mut self, label: S) -> Node {
        self.labels.insert(label)
    }

    /// Registers nodes in the given order without connecting them
    pub fn stations<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for label in labels {
            self.add_station(label);
        }
        self
    }

    /// Connects `a` and `b`, registering unknown labels.
    /// Keeps the existing connection if it is at most as heavy.
    pub fn add_connection<S: Into<String>>(&mut self, a: S, b: S, weight: W) {
        let u = self.labels.insert(a);
        let v = self.labels.insert(b);
        let key = Edge(u, v).normalized();

        match self.position.get(&key) {
            Some(&i) => {
                if weight.total_cmp(&self.connections[i].weight).is_lt() {
                    self.connections[i].weight = weight;
                }
            }
            None => {
                self.position.insert(key, self.connections.len());
                self.connections.push(WeightedEdge::new(u, v, weight));
            }
        }
    }

    /// Connects `a` and `b`, registering unknown labels
    pub fn connection<S: Into<String>>(mut self, a: S, b: S, weight: W) -> Self {
        self.add_connection(a, b, weight);
        self
    }

    /// Adds all `(a, b, weight)` connections
    pub fn connections<I, S>(mut self, connections: I) -> Self
    where
        I: IntoIterator<Item = (S, S, W)>,
        S: Into<String>,
    {
        for (a, b, weight) in connections {
            self.add_connection(a, b, weight);
        }
        self
    }

    /// Returns the graph together with the labels of its nodes
    pub fn build(self) -> (Graph<W>, NodeLabels) {
        let mut graph = Graph::new(self.labels.number_of_nodes(), false, true);
        for WeightedEdge { u, v, weight } in self.connections {
            // all endpoints were registered in `labels`
            let inserted = graph.insert_edge(u, v, weight);
            debug_assert!(inserted.is_ok());
        }

        debug!(
            n = graph.number_of_nodes(),
            m = graph.number_of_edges(),
            "built labelled graph"
        );
        (graph, self.labels)
    }
}
