pub mod retrace;
pub mod termination;
pub mod tracer;
pub mod trajectory;

pub use retrace::retrace;
pub use termination::Termination;
pub use tracer::trace;
pub use tracer::MirrorMap;
pub use trajectory::Trajectory;
