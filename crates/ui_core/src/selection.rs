//! Order-preserving multi-select toggling.

/// Toggles `value` within `current`: removes it when present, appends it
/// at the end otherwise. The relative order of untouched entries is
/// preserved, so toggling the same value twice restores the input list.
pub fn toggle_value<T: Clone + PartialEq>(current: &[T], value: &T) -> Vec<T> {
    if current.contains(value) {
        current
            .iter()
            .filter(|candidate| *candidate != value)
            .cloned()
            .collect()
    } else {
        let mut next = current.to_vec();
        next.push(value.clone());
        next
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn absent_value_is_appended() {
        let next = toggle_value(&["a".to_string()], &"b".to_string());
        assert_eq!(next, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn present_value_is_removed_preserving_order() {
        let current = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let next = toggle_value(&current, &"a".to_string());
        assert_eq!(next, vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn double_toggle_round_trips() {
        let current = vec!["a".to_string(), "c".to_string()];
        let once = toggle_value(&current, &"b".to_string());
        let twice = toggle_value(&once, &"b".to_string());
        assert_eq!(twice, current);
    }
}
