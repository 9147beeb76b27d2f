pub mod aggregator;
pub mod classifier;
pub mod export;
pub mod loader;
pub mod renderer;
