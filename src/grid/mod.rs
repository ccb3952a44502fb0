pub mod cell;
pub mod direction;
pub mod error;
pub mod grid;
pub mod mirror;
pub mod splitter;

pub use cell::Cell;
pub use direction::Direction;
pub use error::GridError;
pub use error::PlacementError;
pub use grid::GridConfig;
pub use mirror::Mirror;
pub use mirror::Placement;
pub use splitter::Splitter;
pub use splitter::SplitterHit;
