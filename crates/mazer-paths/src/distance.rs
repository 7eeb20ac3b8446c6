use mazer_core::Location;

/// Manhattan (L1) distance between two locations.
#[inline]
pub fn manhattan(a: Location, b: Location) -> usize {
    a.row.abs_diff(b.row) + a.column.abs_diff(b.column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Location::new(0, 0);
        let b = Location::new(4, 29);
        assert_eq!(manhattan(a, b), 33);
        assert_eq!(manhattan(b, a), 33);
        assert_eq!(manhattan(a, a), 0);
    }
}
