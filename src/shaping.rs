//! Turns raw result arrays into labelled chart series

/// One labelled value ready to be drawn
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

pub const NODE_PREFIX: &str = "Node";
pub const ELEMENT_PREFIX: &str = "Elem";

/// Label each value `"{prefix} {i + 1}"`, keeping input order.
///
/// Missing or empty input gives an empty series; callers show a placeholder.
/// Values pass through untouched, unit scaling belongs to the caller.
pub fn to_series(values: Option<&[f64]>, label_prefix: &str) -> Vec<SeriesPoint> {
    values
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(i, &value)| SeriesPoint {
            label: format!("{} {}", label_prefix, i + 1),
            value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_one_based() {
        let series = to_series(Some(&[0.0, -0.002, -0.0015]), NODE_PREFIX);
        let labels: Vec<_> = series.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["Node 1", "Node 2", "Node 3"]);
    }

    #[test]
    fn values_and_length_are_preserved() {
        let values = [150.0, -212.13, 0.0, 1e9];
        let series = to_series(Some(&values), ELEMENT_PREFIX);
        assert_eq!(series.len(), values.len());
        for (point, value) in series.iter().zip(values) {
            assert_eq!(point.value, value);
        }
    }

    #[test]
    fn missing_and_empty_give_nothing() {
        assert!(to_series(None, ELEMENT_PREFIX).is_empty());
        assert!(to_series(Some(&[]), ELEMENT_PREFIX).is_empty());
    }
}
