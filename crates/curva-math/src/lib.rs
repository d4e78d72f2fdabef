pub mod bernstein;
pub mod polyline;

pub use glam::DVec2;
pub use bernstein::{bernstein_basis, binomial_coefficient};
pub use polyline::{is_finite_point, lerp, max_deviation};

pub type Point2 = DVec2;
