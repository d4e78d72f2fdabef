pub mod error;
pub mod family;
pub mod limits;
pub mod params;
pub mod tolerance;
pub mod traits;

pub use error::{CurveError, Result};
pub use family::CurveFamily;
pub use limits::Limits;
pub use params::CurveParams;
pub use tolerance::Tolerance;
pub use traits::Validate;
