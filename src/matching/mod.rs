pub mod normalizer;
pub mod similarity;

pub use normalizer::*;
pub use similarity::*;
