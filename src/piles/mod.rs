//! Pile management: shuffle, draw-with-reshuffle, discard-all.

pub mod manager;

pub use manager::Piles;
