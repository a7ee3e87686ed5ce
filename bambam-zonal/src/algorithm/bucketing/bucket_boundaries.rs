use crate::model::ZonalError;

/// upper bounds, in minutes, of the travel time buckets of an analysis.
///
/// boundaries are the multiples of the bin width up to and including the search
/// horizon (`|max_travel_time_hours| * 60`). when the horizon is not a multiple of the
/// bin width, the last boundary is the largest multiple below it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketBoundaries {
    bin_width_minutes: u32,
    limit_minutes: u32,
    boundaries: Vec<u32>,
}

impl BucketBoundaries {
    pub fn new(
        max_travel_time_hours: i64,
        bin_width_minutes: u32,
    ) -> Result<BucketBoundaries, ZonalError> {
        if bin_width_minutes == 0 {
            return Err(ZonalError::InvalidParameter(String::from(
                "bin width must be a positive number of minutes",
            )));
        }
        let limit_minutes = max_travel_time_hours
            .checked_abs()
            .and_then(|h| h.checked_mul(60))
            .and_then(|m| u32::try_from(m).ok())
            .ok_or_else(|| {
                ZonalError::InvalidParameter(format!(
                    "max travel time of {max_travel_time_hours} hours is out of range"
                ))
            })?;

        let mut boundaries = vec![];
        let mut boundary = bin_width_minutes;
        while boundary <= limit_minutes {
            boundaries.push(boundary);
            boundary = match boundary.checked_add(bin_width_minutes) {
                Some(b) => b,
                None => break,
            };
        }
        Ok(BucketBoundaries {
            bin_width_minutes,
            limit_minutes,
            boundaries,
        })
    }

    pub fn bin_width_minutes(&self) -> u32 {
        self.bin_width_minutes
    }

    pub fn limit_minutes(&self) -> u32 {
        self.limit_minutes
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.boundaries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u32> {
        self.boundaries.iter()
    }

    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// the smallest boundary that is at least the (normalized) travel time, if any.
    pub fn covering_boundary(&self, travel_time_minutes: f64) -> Option<u32> {
        self.boundaries
            .iter()
            .find(|b| travel_time_minutes <= **b as f64)
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::BucketBoundaries;

    #[test]
    fn test_inbound_hour_half_hour_bins() {
        let b = BucketBoundaries::new(-1, 30).unwrap();
        assert_eq!(b.as_slice(), &[30, 60]);
        assert_eq!(b.limit_minutes(), 60);
    }

    #[test]
    fn test_limit_is_included_when_exact_multiple() {
        let b = BucketBoundaries::new(2, 40).unwrap();
        assert_eq!(b.as_slice(), &[40, 80, 120]);
        assert_eq!(b.covering_boundary(120.0), Some(120));
        assert_eq!(b.covering_boundary(120.5), None);
    }

    #[test]
    fn test_no_partial_bucket_beyond_limit() {
        let b = BucketBoundaries::new(1, 25).unwrap();
        assert_eq!(b.as_slice(), &[25, 50]);
        assert_eq!(b.covering_boundary(55.0), None);
    }

    #[test]
    fn test_strictly_increasing_from_bin_width() {
        let b = BucketBoundaries::new(3, 7).unwrap();
        assert_eq!(b.as_slice()[0], 7);
        assert!(b.as_slice().windows(2).all(|w| w[0] < w[1]));
        assert_eq!(*b.as_slice().last().unwrap(), 175);
    }

    #[test]
    fn test_zero_horizon_has_no_boundaries() {
        let b = BucketBoundaries::new(0, 30).unwrap();
        assert!(b.is_empty());
        assert_eq!(b.covering_boundary(0.0), None);
    }

    #[test]
    fn test_zero_bin_width_rejected() {
        assert!(BucketBoundaries::new(1, 0).is_err());
    }

    #[test]
    fn test_covering_boundary_is_smallest() {
        let b = BucketBoundaries::new(1, 30).unwrap();
        assert_eq!(b.covering_boundary(25.0), Some(30));
        assert_eq!(b.covering_boundary(30.0), Some(30));
        assert_eq!(b.covering_boundary(30.5), Some(60));
        assert_eq!(b.covering_boundary(0.0), Some(30));
    }
}
