use serde::{Deserialize, Serialize};

/// Métrica mostrada en el panel de Data Vault
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultMetric {
    pub label: String,
    pub value: f64,
    pub unit: String,
    /// Variación respecto al periodo anterior, en %
    pub change_pct: f64,
}

impl VaultMetric {
    pub fn formatted_value(&self) -> String {
        if self.value.fract() == 0.0 {
            format!("{:.0} {}", self.value, self.unit).trim_end().to_string()
        } else {
            format!("{:.1} {}", self.value, self.unit).trim_end().to_string()
        }
    }

    pub fn trend_class(&self) -> &'static str {
        if self.change_pct > 0.0 {
            "metric-trend up"
        } else if self.change_pct < 0.0 {
            "metric-trend down"
        } else {
            "metric-trend flat"
        }
    }

    pub fn formatted_change(&self) -> String {
        format!("{:+.1}%", self.change_pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(value: f64, change_pct: f64) -> VaultMetric {
        VaultMetric {
            label: "Stored records".to_string(),
            value,
            unit: "GB".to_string(),
            change_pct,
        }
    }

    #[test]
    fn test_formatting() {
        assert_eq!(metric(42.0, 0.0).formatted_value(), "42 GB");
        assert_eq!(metric(3.14, 0.0).formatted_value(), "3.1 GB");
        assert_eq!(metric(1.0, 4.0).formatted_change(), "+4.0%");
        assert_eq!(metric(1.0, -2.5).formatted_change(), "-2.5%");
    }

    #[test]
    fn test_trend_class() {
        assert_eq!(metric(1.0, 1.0).trend_class(), "metric-trend up");
        assert_eq!(metric(1.0, -1.0).trend_class(), "metric-trend down");
        assert_eq!(metric(1.0, 0.0).trend_class(), "metric-trend flat");
    }
}
