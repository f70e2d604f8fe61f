//! Numeric predicates

/// Passes when the value lies in `min..=max`.
pub fn in_range<N>(min: N, max: N) -> impl Fn(&N) -> bool + Clone + Send + Sync + 'static
where
    N: PartialOrd + Copy + Send + Sync + 'static,
{
    move |value| *value >= min && *value <= max
}

/// Passes when the value is at least `min`.
pub fn at_least<N>(min: N) -> impl Fn(&N) -> bool + Clone + Send + Sync + 'static
where
    N: PartialOrd + Copy + Send + Sync + 'static,
{
    move |value| *value >= min
}

/// Passes when the value is at most `max`.
pub fn at_most<N>(max: N) -> impl Fn(&N) -> bool + Clone + Send + Sync + 'static
where
    N: PartialOrd + Copy + Send + Sync + 'static,
{
    move |value| *value <= max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_inclusive() {
        let percent = in_range(0, 100);
        assert!(percent(&0));
        assert!(percent(&100));
        assert!(!percent(&101));
        assert!(!percent(&-1));
    }

    #[test]
    fn bounds() {
        assert!(at_least(1.5)(&1.5));
        assert!(!at_least(1.5)(&1.4));
        assert!(at_most(10_u8)(&10));
        assert!(!at_most(10_u8)(&11));
    }
}
