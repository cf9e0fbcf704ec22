//! Domain model (arguments, metadata).

pub mod args;
pub mod metadata;

pub use self::args::TaskArgs;
pub use self::metadata::TaskMetadata;
