//! Pure spiral math: coordinate generation, radius mapping, eased transitions
//! and shape assembly. Nothing in here depends on the ECS, so it is all
//! unit-testable without an `App`.

pub mod easing;
pub mod generator;
pub mod radius;
pub mod shape;
pub mod state;
pub mod transition;

pub use easing::Easing;
pub use generator::SPIRAL_CIRCLE_COUNT;
pub use radius::max_distance;
pub use state::SpiralState;
