mod bellman_ford;
mod dijkstra;
mod dijkstra_lazy;
pub mod generator;
mod result;
mod util;

pub use bellman_ford::bellman_ford;
pub use dijkstra::dijkstra;
pub use dijkstra_lazy::dijkstra_lazy;
pub use result::ShortestPathResult;

/// Distance recorded for vertices the source cannot reach.
pub const INF: f64 = f64::MAX;
