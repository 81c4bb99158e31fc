/*!
# Utilities

Real networks name their nodes (`"Paddington"`, `"Baker Street"`, ...) while all graphs in this
crate use dense indices `0..n`. This module provides the glue:
- [`NodeLabels`]: a bijection between labels and node indices in insertion order,
- [`LabelledGraphBuilder`]: builds an undirected weighted graph from labelled connections.
*/

use fxhash::FxHashMap;

use crate::prelude::*;

mod labels;

pub use labels::*;
