/// Input caps for one curve family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Limits {
    pub min_points: usize,
    pub max_points: usize,
    pub min_degree: usize,
    /// `None` for families whose degree is implied by the point count.
    pub max_degree: Option<usize>,
    pub min_resolution: usize,
    pub max_resolution: usize,
}

impl Limits {
    pub const MIN_POINTS: usize = 2;
    pub const MIN_RESOLUTION: usize = 10;
    pub const MAX_RESOLUTION: usize = 1000;

    pub const fn bspline() -> Self {
        Self {
            min_points: Self::MIN_POINTS,
            max_points: 15,
            min_degree: 1,
            max_degree: Some(5),
            min_resolution: Self::MIN_RESOLUTION,
            max_resolution: Self::MAX_RESOLUTION,
        }
    }

    pub const fn bezier() -> Self {
        Self {
            min_points: Self::MIN_POINTS,
            max_points: 10,
            min_degree: 1,
            max_degree: None,
            min_resolution: Self::MIN_RESOLUTION,
            max_resolution: Self::MAX_RESOLUTION,
        }
    }

    /// Largest degree accepted for `point_count` control points.
    pub fn max_degree_for(&self, point_count: usize) -> Option<usize> {
        let max = self.max_degree?;
        Some(max.min(point_count.saturating_sub(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_caps() {
        assert_eq!(Limits::bspline().max_points, 15);
        assert_eq!(Limits::bezier().max_points, 10);
        assert_eq!(Limits::bezier().max_degree, None);
    }

    #[test]
    fn test_max_degree_for_point_count() {
        let limits = Limits::bspline();
        assert_eq!(limits.max_degree_for(3), Some(2));
        assert_eq!(limits.max_degree_for(12), Some(5));
        assert_eq!(Limits::bezier().max_degree_for(5), None);
    }
}
