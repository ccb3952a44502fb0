pub mod candidate;
pub mod generator;
pub mod optimizer;
pub mod solution;

pub use candidate::Candidate;
pub use optimizer::Optimizer;
pub use solution::Solution;
