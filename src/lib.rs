//! Nearest-neighbor tours over TSPLIB-style point files.

pub mod tsp;
