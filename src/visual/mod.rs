pub mod animate;
pub mod material;
pub mod plugin;
pub mod setup;

pub use plugin::SpiralPlugin;
