/// Smallest capacity a growing buffer is given, so an empty list can still double.
pub const MIN_CAPACITY: usize = 2;

pub trait CapacityPolicy {
    /// Returns the new capacity, or `None` if `required` already fits.
    fn grow(current: usize, required: usize) -> Option<usize>;
}

/// Geometric growth by a factor of two.
#[derive(Clone, Copy, Debug, Default)]
pub struct Doubling {}

impl CapacityPolicy for Doubling {

    #[inline]
    fn grow(current: usize, required: usize) -> Option<usize> {
        if required <= current { return None }
        let doubled = current
            .checked_mul(2)
            .unwrap_or_else(|| panic!("capacity overflow"));
        Some(required.max(doubled).max(MIN_CAPACITY))
    }
}

/// Grows to exactly what is required. Quadratic over a run of appends.
#[derive(Clone, Copy, Debug, Default)]
pub struct Exact {}

impl CapacityPolicy for Exact {

    #[inline]
    fn grow(current: usize, required: usize) -> Option<usize> {
        if required <= current { None }
        else { Some(required) }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn doubling() {
        assert_eq!(Doubling::grow(0, 1), Some(MIN_CAPACITY));
        assert_eq!(Doubling::grow(1, 2), Some(2));
        assert_eq!(Doubling::grow(4, 5), Some(8));
        assert_eq!(Doubling::grow(4, 20), Some(20));
        assert_eq!(Doubling::grow(8, 8), None);
    }

    #[test]
    fn exact() {
        assert_eq!(Exact::grow(0, 1), Some(1));
        assert_eq!(Exact::grow(4, 5), Some(5));
        assert_eq!(Exact::grow(5, 3), None);
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn doubling_overflow() {
        Doubling::grow(usize::MAX / 2 + 1, usize::MAX);
    }
}
