//! Track click paging

/// Page one container length toward the pointer
///
/// A click before the thumb's start pages back; anywhere else (including on
/// the thumb itself) pages forward.
pub fn page_target(pointer: f64, thumb_start: f64, target: f64, container_length: f64) -> f64 {
    let direction = if pointer < thumb_start { -1.0 } else { 1.0 };
    target + direction * container_length
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_toward_pointer() {
        assert_eq!(page_target(10.0, 50.0, 300.0, 100.0), 200.0);
        assert_eq!(page_target(80.0, 50.0, 300.0, 100.0), 400.0);
        assert_eq!(page_target(50.0, 50.0, 300.0, 100.0), 400.0);
    }
}
