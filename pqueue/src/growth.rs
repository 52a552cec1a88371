/// Capacity the queue moves to once `capacity` slots are all in use:
/// `capacity * 3 / 2 + 1`, so that growth also makes progress from 0 and 1.
pub fn grown_capacity(capacity: usize) -> usize {
    // capacity + capacity / 2 == capacity * 3 / 2 without the intermediate overflow
    capacity.saturating_add(capacity / 2).saturating_add(1)
}

#[cfg(test)]
mod tests {
    use super::grown_capacity;

    #[test]
    fn grows_from_empty() {
        assert_eq!(grown_capacity(0), 1);
        assert_eq!(grown_capacity(1), 2);
    }

    #[test]
    fn follows_three_halves_plus_one() {
        let mut capacity = 2;
        let mut sequence = vec![capacity];
        for _ in 0..6 {
            capacity = grown_capacity(capacity);
            sequence.push(capacity);
        }
        assert_eq!(sequence, [2, 4, 7, 11, 17, 26, 40]);
    }

    #[test]
    fn always_strictly_larger() {
        for capacity in 0..1000 {
            assert!(grown_capacity(capacity) > capacity);
        }
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        assert_eq!(grown_capacity(usize::MAX), usize::MAX);
    }
}
