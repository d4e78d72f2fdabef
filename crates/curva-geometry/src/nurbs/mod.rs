//! B-spline core algorithms: knot vector construction and Cox-de Boor basis evaluation.

pub mod basis;
pub mod knot;

pub use basis::{b_spline_basis, b_spline_basis_closed};
pub use knot::KnotVector;
