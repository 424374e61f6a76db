//! Small display helpers shared by the HTML page and the terminal UI.

pub fn format_score(score: f64) -> String {
    format!("{score:.2}")
}

pub fn expanded_terms_label(terms: &[String]) -> String {
    terms.join(", ")
}

pub fn confidence_label(confidence: &str) -> String {
    format!("{confidence} confidence")
}

pub fn results_summary(total_found: u64) -> String {
    format!("About {total_found} results")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(12.8431, "12.84")]
    #[case(0.0, "0.00")]
    #[case(1.005, "1.00")]
    #[case(7.0, "7.00")]
    fn scores_have_two_decimals(#[case] score: f64, #[case] expected: &str) {
        assert_eq!(format_score(score), expected);
    }

    #[test]
    fn labels() {
        assert_eq!(
            expanded_terms_label(&["a".into(), "b c".into()]),
            "a, b c"
        );
        assert_eq!(expanded_terms_label(&[]), "");
        assert_eq!(confidence_label("high"), "high confidence");
        assert_eq!(results_summary(42), "About 42 results");
    }
}
