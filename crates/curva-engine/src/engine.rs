//! Algorithm registry and selection for one curve family.

use curva_core::{CurveFamily, CurveParams, Limits, Validate};
use curva_geometry::{Algorithm, AlgorithmDescriptor, CurveFn, CurveRequest, CurveSample};
use curva_math::Point2;

use crate::error::{EngineError, Result};

#[derive(Clone, Copy)]
struct Registration {
    descriptor: AlgorithmDescriptor,
    compute: CurveFn,
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// Curve engine for a single family.
///
/// Owns its own "current algorithm" selection; separate engines never share
/// it. The engine does no locking: callers sharing one instance across
/// threads must serialize `select_algorithm` against `compute_curve`.
#[derive(Debug, Clone)]
pub struct Engine {
    family: CurveFamily,
    registry: Vec<Registration>,
    current: usize,
}

impl Engine {
    /// Engine preloaded with the built-in strategies of `family`; the first
    /// one is selected.
    pub fn new(family: CurveFamily) -> Self {
        let registry = Algorithm::for_family(family)
            .map(|algorithm| Registration {
                descriptor: algorithm.descriptor(),
                compute: algorithm.compute_fn(),
            })
            .collect();
        Self {
            family,
            registry,
            current: 0,
        }
    }

    /// Uniform B-Spline, Non-Uniform B-Spline and NURBS.
    pub fn bspline() -> Self {
        Self::new(CurveFamily::BSpline)
    }

    /// De Casteljau, Bernstein Polynomials and Linear Interpolation.
    pub fn bezier() -> Self {
        Self::new(CurveFamily::Bezier)
    }

    pub fn family(&self) -> CurveFamily {
        self.family
    }

    pub fn limits(&self) -> Limits {
        self.family.limits()
    }

    /// Append a strategy to the registry. Names must be unique and the
    /// descriptor's family must match the engine's.
    pub fn register(&mut self, descriptor: AlgorithmDescriptor, compute: CurveFn) -> Result<()> {
        if descriptor.family != self.family {
            return Err(EngineError::FamilyMismatch {
                name: descriptor.name.to_string(),
                expected: self.family,
                actual: descriptor.family,
            });
        }
        if self.position(descriptor.name).is_some() {
            return Err(EngineError::DuplicateAlgorithm(descriptor.name.to_string()));
        }
        log::debug!("registered {} algorithm {:?}", self.family, descriptor.name);
        self.registry.push(Registration {
            descriptor,
            compute,
        });
        Ok(())
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &AlgorithmDescriptor> + '_ {
        self.registry.iter().map(|r| &r.descriptor)
    }

    pub fn algorithm_names(&self) -> Vec<&'static str> {
        self.registry.iter().map(|r| r.descriptor.name).collect()
    }

    pub fn algorithm_descriptions(&self) -> Vec<&'static str> {
        self.registry.iter().map(|r| r.descriptor.description).collect()
    }

    /// Select the algorithm whose name matches exactly (case-sensitive).
    /// Returns false and keeps the current selection when none matches.
    pub fn select_algorithm(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(index) => {
                self.current = index;
                log::debug!("selected {} algorithm {:?}", self.family, name);
                true
            }
            None => {
                log::debug!(
                    "no {} algorithm named {:?}, keeping {:?}",
                    self.family,
                    name,
                    self.current_algorithm_name()
                );
                false
            }
        }
    }

    pub fn current_algorithm_name(&self) -> &'static str {
        self.current_registration().descriptor.name
    }

    pub fn current_algorithm_description(&self) -> &'static str {
        self.current_registration().descriptor.description
    }

    /// Validate the inputs against the family caps, then run the current
    /// algorithm. The degree is ignored by the Bezier family.
    ///
    /// Any failure comes back as [`EngineError::ComputeFailed`] naming the
    /// algorithm and carrying the violated contract.
    pub fn compute_curve(
        &self,
        points: &[Point2],
        degree: usize,
        resolution: usize,
    ) -> Result<CurveSample> {
        let registration = self.current_registration();
        let algorithm = registration.descriptor.name;
        log::trace!(
            "computing {} curve: {} points, degree {}, resolution {}",
            algorithm,
            points.len(),
            degree,
            resolution
        );

        let wrap = |source| EngineError::ComputeFailed {
            algorithm: algorithm.to_string(),
            source,
        };

        CurveRequest::new(self.family, points, degree, resolution)
            .validate()
            .map_err(wrap)?;
        (registration.compute)(points, degree, resolution).map_err(wrap)
    }

    /// [`compute_curve`](Self::compute_curve) with `params` first fitted to
    /// the point count, lowering a degree that is too high for it.
    pub fn compute_with(&self, points: &[Point2], params: &CurveParams) -> Result<CurveSample> {
        let fitted = params.fitted_to(points.len());
        self.compute_curve(points, fitted.degree, fitted.resolution)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.registry.iter().position(|r| r.descriptor.name == name)
    }

    fn current_registration(&self) -> &Registration {
        // The registry starts with at least one built-in and never shrinks.
        &self.registry[self.current]
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::bspline()
    }
}
