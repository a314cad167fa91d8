//! Shapes handed to the plot, selector and table widgets.

use crate::data::model::Entry;

/// A scatter-plot marker: score on x, lowest price on y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint<'a> {
    pub score: f64,
    pub lowest_price: f64,
    pub name: &'a str,
    pub stress: &'a str,
}

impl ScatterPoint<'_> {
    pub fn xy(&self) -> [f64; 2] {
        [self.score, self.lowest_price]
    }
}

pub fn scatter_points<'a>(subset: &[&'a Entry]) -> Vec<ScatterPoint<'a>> {
    subset
        .iter()
        .map(|e| ScatterPoint {
            score: e.score,
            lowest_price: e.lowest_price,
            name: &e.name,
            stress: &e.stress,
        })
        .collect()
}

/// Options for the entry selector, in subset order.
pub fn name_choices<'a>(subset: &[&'a Entry]) -> Vec<&'a str> {
    subset.iter().map(|e| e.name.as_str()).collect()
}

/// Hover text for one marker.
pub fn hover_label(name: &str, stress: &str, score: f64, lowest_price: f64) -> String {
    let mut label = name.to_string();
    if !stress.is_empty() {
        label.push_str(&format!("\nstress: {stress}"));
    }
    label.push_str(&format!("\nスコア: {score:.2}\n最低価格: ￥{}", format_yen(lowest_price)));
    label
}

/// Format a price with thousands separators, e.g. `12500.0` → `"12,500"`.
pub fn format_yen(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0.0 && digits != "0" {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::data::model::entry;

    #[test]
    fn scatter_points_follow_subset() {
        let mut a = entry("A", 4.0, 1200.0);
        a.stress = "low".into();
        let c = entry("C", 4.5, 9999.0);
        let points = scatter_points(&[&a, &c]);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].xy(), [4.0, 1200.0]);
        assert_eq!(points[0].stress, "low");
        assert_eq!(points[1].name, "C");
    }

    #[test]
    fn empty_subset_has_no_choices() {
        assert!(name_choices(&[]).is_empty());
        assert!(scatter_points(&[]).is_empty());
    }

    #[test]
    fn choices_keep_duplicates_in_order() {
        let a = entry("A", 4.0, 1.0);
        let b = entry("B", 4.0, 1.0);
        let a2 = entry("A", 3.0, 1.0);
        assert_eq!(name_choices(&[&a, &b, &a2]), vec!["A", "B", "A"]);
    }

    #[rstest]
    #[case(0.0, "0")]
    #[case(980.0, "980")]
    #[case(1500.0, "1,500")]
    #[case(12_345_678.0, "12,345,678")]
    #[case(-2500.0, "-2,500")]
    fn yen_formatting(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_yen(value), expected);
    }

    #[test]
    fn hover_label_mentions_name_and_stress() {
        let label = hover_label("A", "high", 4.0, 1200.0);
        assert!(label.starts_with("A\nstress: high"));
        assert!(label.ends_with("￥1,200"));
        assert!(!hover_label("B", "", 3.0, 800.0).contains("stress"));
    }
}
