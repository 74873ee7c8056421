// Re-export glam for convenience
pub use glam::*;

mod ray;
pub use ray::{Ray, RAY_EPSILON};
