//! Cheapest-path search over the gate graph.
//!
//! The graph is supplied as a plain directed edge list on every call;
//! node ids are opaque strings and nothing here knows about gates,
//! storage or the web layer.

mod dijkstra;

pub use dijkstra::{Edge, PathResult, RoutingError, find_shortest_path};
