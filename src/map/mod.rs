mod block;
mod distance;
mod ids;
mod io;
mod map;

pub use block::Block;
pub use distance::DistanceTable;
pub use ids::{BlockId, SchoolId};
pub use map::Map;
