//! Output port for materializing a generated project.

use crate::domain::AppError;
use crate::domain::project::GeneratedProject;

/// Persists a generated project somewhere outside the engine.
pub trait ProjectWriter {
    /// Write every artifact of the project. Returns the number of files written.
    fn write(&self, project: &GeneratedProject) -> Result<usize, AppError>;
}
