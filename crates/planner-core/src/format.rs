//! Display formatting for percentages, costs and counts

use crate::aggregate::CostTotal;
use planner_catalog::{CostRange, Scenario};

/// Signed percentage: `+10%`, `0%`, `-15%`
#[must_use]
pub fn signed_percent(value: i64) -> String {
    if value > 0 {
        format!("+{value}%")
    } else {
        format!("{value}%")
    }
}

/// Whole dollars with thousands separators: `$13,000`
#[must_use]
pub fn dollars(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Single scenario cost: `$2,000 - $8,000`
#[must_use]
pub fn cost_range(range: CostRange) -> String {
    format!(
        "{} - {}",
        dollars(u64::from(range.min)),
        dollars(u64::from(range.max))
    )
}

/// Aggregated cost: `$0` when nothing known was selected
#[must_use]
pub fn cost_total(total: &CostTotal) -> String {
    if total.is_empty() {
        dollars(0)
    } else {
        format!("{} - {}", dollars(total.min), dollars(total.max))
    }
}

/// Scenario badge from its own effect: `+25%` / `-15%`
#[must_use]
pub fn badge(scenario: &Scenario) -> String {
    signed_percent(scenario.signed_risk())
}

/// Progress line: `2 of 6 scenarios selected`
#[must_use]
pub fn selection_count(selected: usize, total: usize) -> String {
    format!("{selected} of {total} scenarios selected")
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_catalog::Catalog;

    #[test]
    fn percent_sign_only_when_positive() {
        assert_eq!(signed_percent(10), "+10%");
        assert_eq!(signed_percent(0), "0%");
        assert_eq!(signed_percent(-15), "-15%");
    }

    #[test]
    fn dollars_group_thousands() {
        assert_eq!(dollars(0), "$0");
        assert_eq!(dollars(999), "$999");
        assert_eq!(dollars(1_000), "$1,000");
        assert_eq!(dollars(13_000), "$13,000");
        assert_eq!(dollars(100_000), "$100,000");
        assert_eq!(dollars(1_234_567), "$1,234,567");
    }

    #[test]
    fn cost_formats() {
        assert_eq!(cost_range(CostRange::new(2_000, 8_000)), "$2,000 - $8,000");
        assert_eq!(cost_total(&CostTotal::default()), "$0");
        let total = CostTotal {
            min: 3_000,
            max: 13_000,
            counted: 2,
        };
        assert_eq!(cost_total(&total), "$3,000 - $13,000");
    }

    #[test]
    fn badges_follow_change() {
        let catalog = Catalog::builtin();
        assert_eq!(badge(catalog.get("irrigation").unwrap()), "+25%");
        assert_eq!(badge(catalog.get("planting").unwrap()), "-15%");
    }

    #[test]
    fn count_line() {
        assert_eq!(selection_count(2, 6), "2 of 6 scenarios selected");
    }
}
