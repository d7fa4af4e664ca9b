//! The filesystem side of the logger: the files every flush fans out to.

mod file;

pub use file::TargetFile;
