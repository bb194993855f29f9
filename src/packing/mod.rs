//! Bin-packing problem side: instance data, the OR-Library reader,
//! incremental solution assembly, Falkenauer fitness, and the "2N"
//! random-key decoder that ties them to the BRKGA engine.

mod decoder;
mod fitness;
mod instance;
mod reader;
mod solution;

pub use decoder::BinPackingDecoder;
pub use fitness::FitnessFunction;
pub use instance::{Instance, InstanceError};
pub use reader::{parse_instance, read_instance, ReadError};
pub use solution::PackingSolution;
