//! Board geometry helpers.

/// The height and width of the default region tiling for a board size.
///
/// The height is the largest divisor of `size` that is at most its square
/// root, so 9 tiles as 3x3, 6 as 2x3, and a prime size as 1xN.
///
/// # Example
/// ```
/// # use sudoku_engine_lib::math::region_dimensions;
/// assert_eq!(region_dimensions(9), (3, 3));
/// assert_eq!(region_dimensions(6), (2, 3));
/// assert_eq!(region_dimensions(16), (4, 4));
/// ```
pub fn region_dimensions(size: usize) -> (usize, usize) {
    let mut height = (size as f64).sqrt().floor() as usize;
    while size % height != 0 {
        height -= 1;
    }
    (height, size / height)
}

/// The default region assignment for each cell of a board, in row-major
/// order.
///
/// # Example
/// ```
/// # use sudoku_engine_lib::math::default_regions;
/// let regions = default_regions(6);
/// assert_eq!(regions.len(), 36);
/// assert_eq!(regions, vec![
///     0, 0, 0, 1, 1, 1,
///     0, 0, 0, 1, 1, 1,
///     2, 2, 2, 3, 3, 3,
///     2, 2, 2, 3, 3, 3,
///     4, 4, 4, 5, 5, 5,
///     4, 4, 4, 5, 5, 5,
/// ]);
/// ```
pub fn default_regions(size: usize) -> Vec<usize> {
    if size == 0 {
        return Vec::new();
    }

    let (region_height, region_width) = region_dimensions(size);
    let mut regions = Vec::with_capacity(size * size);
    for row in 0..size {
        for column in 0..size {
            regions.push((row / region_height) * region_height + column / region_width);
        }
    }

    regions
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_regions_9() {
        let regions = default_regions(9);
        assert_eq!(regions.len(), 81);
        assert_eq!(regions[0], 0);
        assert_eq!(regions[8], 2);
        assert_eq!(regions[40], 4);
        assert_eq!(regions[80], 8);
        for region in 0..9 {
            assert_eq!(regions.iter().filter(|&&r| r == region).count(), 9);
        }
    }
}
