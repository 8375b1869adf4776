//! Candidate ordering and bounded selection.

use crate::domain::Candidate;

/// Total order over candidates: price ascending, earliest outbound day
/// breaking ties. The sort is stable, so candidates with equal keys keep
/// their (deterministic) emission order.
pub fn sort_candidates(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| {
        a.total
            .total_cmp(&b.total)
            .then_with(|| a.out_day.cmp(&b.out_day))
    });
}

/// Bounded selection, kept separate from the sort: the first `top_n` entries
/// of an already-ordered sequence (fewer if the route has fewer).
pub fn take_top(candidates: &[Candidate], top_n: usize) -> Vec<Candidate> {
    candidates.iter().take(top_n).cloned().collect()
}

/// Cross-route leaderboard: re-sort the full union of all routes' candidates
/// (not just each route's top-N) and keep the best `top_n`. Only meaningful
/// when two or more routes were searched; callers skip it otherwise.
pub fn combined_ranking(mut all: Vec<Candidate>, top_n: usize) -> Vec<Candidate> {
    sort_candidates(&mut all);
    all.truncate(top_n);
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(total: f64, out_day: &str, route_label: &str) -> Candidate {
        Candidate {
            total,
            out_day: out_day.to_string(),
            ret_day: String::new(),
            out_price: total / 2.0,
            ret_price: total / 2.0,
            dep_out: None,
            arr_out: None,
            dep_ret: None,
            arr_ret: None,
            route_label: route_label.to_string(),
        }
    }

    #[test]
    fn sorts_by_total_then_outbound_day() {
        let mut candidates = vec![
            candidate(120.0, "2025-06-01", "A"),
            candidate(95.0, "2025-06-02", "A"),
            candidate(110.0, "2025-06-02", "A"),
            candidate(110.0, "2025-06-01", "A"),
        ];
        sort_candidates(&mut candidates);

        let keys: Vec<(f64, &str)> = candidates
            .iter()
            .map(|c| (c.total, c.out_day.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                (95.0, "2025-06-02"),
                (110.0, "2025-06-01"),
                (110.0, "2025-06-02"),
                (120.0, "2025-06-01"),
            ]
        );
    }

    #[test]
    fn take_top_caps_but_never_pads() {
        let candidates = vec![
            candidate(95.0, "2025-06-02", "A"),
            candidate(110.0, "2025-06-01", "A"),
        ];
        assert_eq!(take_top(&candidates, 1).len(), 1);
        assert_eq!(take_top(&candidates, 5).len(), 2);
    }

    #[test]
    fn combined_ranking_merges_routes_and_truncates() {
        let route_a = vec![
            candidate(95.0, "2025-06-02", "CGN ↔ PMO"),
            candidate(130.0, "2025-06-03", "CGN ↔ PMO"),
        ];
        let route_b = vec![
            candidate(100.0, "2025-06-01", "NRN ↔ TPS"),
            candidate(105.0, "2025-06-04", "NRN ↔ TPS"),
        ];
        let union: Vec<Candidate> = route_a.iter().chain(route_b.iter()).cloned().collect();

        let combined = combined_ranking(union.clone(), 3);
        assert_eq!(combined.len(), 3);
        let totals: Vec<f64> = combined.iter().map(|c| c.total).collect();
        assert_eq!(totals, vec![95.0, 100.0, 105.0]);
        for entry in &combined {
            assert!(union.contains(entry), "combined entry must come from the union");
        }
    }
}
