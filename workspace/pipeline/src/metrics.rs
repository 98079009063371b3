//! Quality bands for the accuracy metric cards.

/// How a metric value reads for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricLevel {
    Good,
    Fair,
    Poor,
}

impl MetricLevel {
    /// Accent class for the metric card border.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Good => "border-success",
            Self::Fair => "border-warning",
            Self::Poor => "border-error",
        }
    }
}

/// MAPE bands: at most 10% reads as good, at most 20% as fair.
pub fn assess_mape(value: f64) -> (MetricLevel, &'static str) {
    if value <= 10.0 {
        (MetricLevel::Good, "forecast accuracy is strong")
    } else if value <= 20.0 {
        (MetricLevel::Fair, "forecast accuracy is moderate")
    } else {
        (MetricLevel::Poor, "forecast accuracy is weak")
    }
}

/// Direction-accuracy bands: 0.7 and up reads as good, 0.5 as fair.
pub fn assess_direction_accuracy(value: f64) -> (MetricLevel, &'static str) {
    if value >= 0.7 {
        (MetricLevel::Good, "trend direction is reliable")
    } else if value >= 0.5 {
        (MetricLevel::Fair, "trend direction is hit or miss")
    } else {
        (MetricLevel::Poor, "trend direction is unreliable")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mape_bands_at_the_boundaries() {
        assert_eq!(assess_mape(0.0).0, MetricLevel::Good);
        assert_eq!(assess_mape(10.0).0, MetricLevel::Good);
        assert_eq!(assess_mape(10.1).0, MetricLevel::Fair);
        assert_eq!(assess_mape(20.0).0, MetricLevel::Fair);
        assert_eq!(assess_mape(20.1).0, MetricLevel::Poor);
    }

    #[test]
    fn direction_accuracy_bands_at_the_boundaries() {
        assert_eq!(assess_direction_accuracy(0.9).0, MetricLevel::Good);
        assert_eq!(assess_direction_accuracy(0.7).0, MetricLevel::Good);
        assert_eq!(assess_direction_accuracy(0.69).0, MetricLevel::Fair);
        assert_eq!(assess_direction_accuracy(0.5).0, MetricLevel::Fair);
        assert_eq!(assess_direction_accuracy(0.49).0, MetricLevel::Poor);
    }
}
