pub mod audit;
pub mod roster_writer;
pub mod stats;
