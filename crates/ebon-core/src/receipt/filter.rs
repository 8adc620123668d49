//! Receipt line filter.
//!
//! Purchased items sit between the "EUR" currency marker line and the dash
//! terminator that precedes the sum. Indented lines inside that window are
//! per-item quantity annotations, not item/price pairs.

/// Reduce rendered receipt text to the candidate item lines, in receipt order.
///
/// The window is strictly between the first line containing `EUR` (the marker
/// line itself is dropped) and the first subsequent line containing a dash
/// run. Without a marker the result is empty; without a terminator the window
/// runs to the end of the text.
pub fn candidate_lines(text: &str) -> Vec<String> {
    text.lines()
        .skip_while(|line| !line.contains("EUR"))
        .skip(1)
        .take_while(|line| !line.contains("-----"))
        .filter(|line| !line.starts_with(' '))
        .map(|line| line.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn keeps_lines_between_marker_and_terminator() {
        let text = "REWE Markt GmbH\nBon 4711\n        EUR\nMilk  2,50\nBread  1,20\n--------------------------------\nSUMME  3,70\n";
        assert_eq!(candidate_lines(text), vec!["Milk  2,50", "Bread  1,20"]);
    }

    #[test]
    fn drops_indented_quantity_lines() {
        let text = "   EUR\nMilk  2,50\n  2 Stk x 1,25\nBread  1,20\n-----\n";
        assert_eq!(candidate_lines(text), vec!["Milk  2,50", "Bread  1,20"]);
    }

    #[test]
    fn no_marker_yields_nothing() {
        assert_eq!(candidate_lines("Milk  2,50\nBread  1,20\n-----\n"), Vec::<String>::new());
    }

    #[test]
    fn missing_terminator_runs_to_end_of_text() {
        let text = "   EUR\nMilk  2,50\nBread  1,20";
        assert_eq!(candidate_lines(text), vec!["Milk  2,50", "Bread  1,20"]);
    }

    #[test]
    fn surviving_lines_are_trimmed() {
        let text = "   EUR\nMilk  2,50\t\n-----\n";
        assert_eq!(candidate_lines(text), vec!["Milk  2,50"]);
    }
}
