// Re-export glam for convenience
pub use glam::*;

// Prism math types
mod interval;
mod linalg;
mod ray;

pub use interval::Interval;
pub use linalg::{solve_cramer, DETERMINANT_EPSILON};
pub use ray::Ray;
