pub mod config;
pub mod posts;
pub mod random;
pub mod tags;
