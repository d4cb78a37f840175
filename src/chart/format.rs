//! Number formatting for tick labels and tooltips

/// Above this magnitude an f64 has no fractional digits left
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Tooltip form: thousands separators, up to two decimals
///
/// `4000.0` -> `"4,000"`, `1398.5` -> `"1,398.5"`, `-2500.0` -> `"-2,500"`
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let abs = value.abs();

    let (int_digits, cents) = if abs >= MAX_EXACT_INTEGER {
        (format!("{:.0}", abs), 0)
    } else {
        let total = (abs * 100.0).round() as u64;
        ((total / 100).to_string(), total % 100)
    };

    let mut out = group_thousands(&int_digits);
    if cents > 0 {
        let digits = format!("{:02}", cents);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }

    if value < 0.0 && (cents > 0 || int_digits != "0") {
        format!("-{}", out)
    } else {
        out
    }
}

/// Axis tick form: no separators, trailing zeros trimmed
///
/// Shows enough decimals to tell ticks `step` apart; magnitudes of 1e15 and
/// up use exponent notation. `2500.0` -> `"2500"`, `0.025` -> `"0.025"`
pub fn format_tick(value: f64, step: f64) -> String {
    // avoid "-0"
    let value = if value == 0.0 { 0.0 } else { value };
    if value.abs() >= 1e15 {
        return format!("{:e}", value);
    }

    let decimals = if step.is_finite() && step > 0.0 {
        ((-step.log10().floor()).max(0.0) as usize + 1).min(15)
    } else {
        2
    };
    let s = format!("{:.*}", decimals, value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(4000.0), "4,000");
        assert_eq!(format_value(1398.0), "1,398");
        assert_eq!(format_value(50.0), "50");
        assert_eq!(format_value(1234567.0), "1,234,567");
        assert_eq!(format_value(1398.5), "1,398.5");
        assert_eq!(format_value(3.24), "3.24");
        assert_eq!(format_value(-2500.0), "-2,500");
        assert_eq!(format_value(0.0), "0");
    }

    #[test]
    fn test_format_value_large_magnitudes() {
        assert_eq!(format_value(1e20), "100,000,000,000,000,000,000");
        assert_eq!(format_value(-1e20), "-100,000,000,000,000,000,000");
        let max = format_value(f64::MAX);
        assert!(max.starts_with("179,769,313"));
        assert_eq!(max.len(), 309 + 102);
        assert_eq!(format_value(-0.001), "0");
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(2500.0, 2500.0), "2500");
        assert_eq!(format_tick(0.25, 0.25), "0.25");
        assert_eq!(format_tick(0.5, 0.25), "0.5");
        assert_eq!(format_tick(-0.0, 1.0), "0");
        assert_eq!(format_tick(-500.0, 500.0), "-500");
    }

    #[test]
    fn test_format_tick_follows_step() {
        let labels: Vec<String> = [0.0, 0.001, 0.002, 0.003, 0.004]
            .iter()
            .map(|&t| format_tick(t, 0.001))
            .collect();
        assert_eq!(labels, vec!["0", "0.001", "0.002", "0.003", "0.004"]);
        assert_eq!(format_tick(0.075, 0.025), "0.075");
        assert_eq!(format_tick(1.5e308, 5e307), "1.5e308");
    }
}
