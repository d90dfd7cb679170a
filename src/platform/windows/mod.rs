//! Windows-specific platform implementations

mod filesystem;
mod paths;

pub use filesystem::WindowsFilesystem;
pub use paths::WindowsPaths;
