pub mod config;
pub mod engine;
pub mod lyrics;
pub mod model;
pub mod notify;
pub mod order;
pub mod persist;
pub mod player;
pub mod playlist;
pub mod probe;
