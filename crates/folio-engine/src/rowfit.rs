/// Rendered width of one item at size unit 1, in pixels.
const ITEM_BASE_WIDTH: f64 = 40.0;

/// Gap between adjacent items, in pixels.
const ITEM_GAP: f64 = 24.0;

/// Heuristic: do the current items fit on a single row?
///
/// Estimates total width as `n * (size * 40) + max(n - 1, 0) * 24` and
/// compares it to the observed container width. This is an estimate, not a
/// layout measurement.
pub fn is_single_row(item_count: usize, size: f64, container_width: f64) -> bool {
    let gaps = item_count.saturating_sub(1) as f64;
    let estimated = item_count as f64 * (size * ITEM_BASE_WIDTH) + gaps * ITEM_GAP;
    estimated <= container_width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_when_estimate_is_within_container() {
        // 3 * 40 + 2 * 24 = 168
        assert!(is_single_row(3, 1.0, 200.0));
        assert!(!is_single_row(3, 1.0, 150.0));
    }

    #[test]
    fn size_unit_scales_item_width() {
        // 2 * (2 * 40) + 24 = 184
        assert!(is_single_row(2, 2.0, 184.0));
        assert!(!is_single_row(2, 2.0, 183.0));
    }

    #[test]
    fn empty_list_always_fits() {
        assert!(is_single_row(0, 1.0, 0.0));
    }
}
