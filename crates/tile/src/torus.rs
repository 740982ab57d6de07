//! Distances on a `width x height` torus.

/// Squared Euclidean distance between `a` and `b` on a torus.
///
/// Compares `a` against `b` and its eight copies shifted by one tile in each
/// direction and keeps the smallest. Coordinates are expected to lie inside
/// the tile. Integer arithmetic keeps ties exact.
pub fn distance_sq(a: (usize, usize), b: (usize, usize), width: usize, height: usize) -> u64 {
    let (ax, ay) = (a.0 as i64, a.1 as i64);
    let (bx, by) = (b.0 as i64, b.1 as i64);
    let (w, h) = (width as i64, height as i64);

    let mut best = u64::MAX;
    for ox in -1..=1 {
        for oy in -1..=1 {
            let dx = ax - (bx + ox * w);
            let dy = ay - (by + oy * h);
            best = best.min((dx * dx + dy * dy) as u64);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_point_is_zero() {
        assert_eq!(distance_sq((5, 7), (5, 7), 32, 32), 0);
    }

    #[test]
    fn interior_points_use_plain_distance() {
        assert_eq!(distance_sq((10, 10), (13, 14), 32, 32), 25);
    }

    #[test]
    fn wraps_horizontally() {
        assert_eq!(distance_sq((0, 0), (31, 0), 32, 32), 1);
    }

    #[test]
    fn wraps_vertically_and_diagonally() {
        assert_eq!(distance_sq((0, 1), (0, 31), 32, 32), 4);
        assert_eq!(distance_sq((0, 0), (31, 31), 32, 32), 2);
    }

    #[test]
    fn non_square_torus_wraps_each_axis_by_its_own_size() {
        assert_eq!(distance_sq((0, 0), (15, 0), 16, 64), 1);
        assert_eq!(distance_sq((0, 0), (0, 15), 16, 64), 225);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn symmetric_and_bounded(
                w in 1_usize..64,
                h in 1_usize..64,
                ax in 0_usize..64, ay in 0_usize..64,
                bx in 0_usize..64, by in 0_usize..64,
            ) {
                let a = (ax % w, ay % h);
                let b = (bx % w, by % h);
                let d = distance_sq(a, b, w, h);
                prop_assert_eq!(d, distance_sq(b, a, w, h));
                // No point on a torus is more than half a tile away on either axis.
                let (hw, hh) = ((w / 2) as u64, (h / 2) as u64);
                prop_assert!(d <= hw * hw + hh * hh);
            }
        }
    }
}
