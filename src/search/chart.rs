//! Chart series: cheapest achievable total per outbound day.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::Candidate;
use crate::utils::parse_iso_day;

/// For each distinct outbound date, the minimum total across all stay spans.
///
/// Points come out in discovery order, not date order — sort by date before
/// feeding them to any time-series rendering.
pub fn cheapest_per_departure(candidates: &[Candidate]) -> Vec<(NaiveDate, f64)> {
    let mut best: HashMap<NaiveDate, f64> = HashMap::new();
    for candidate in candidates {
        let Some(date) = parse_iso_day(&candidate.out_day) else {
            continue;
        };
        best.entry(date)
            .and_modify(|price| *price = price.min(candidate.total))
            .or_insert(candidate.total);
    }
    best.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(total: f64, out_day: &str) -> Candidate {
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
            route_label: "CGN ↔ PMO".to_string(),
        }
    }

    #[test]
    fn keeps_only_the_cheapest_total_per_day() {
        let candidates = vec![
            candidate(120.0, "2025-06-01"),
            candidate(95.0, "2025-06-01"),
            candidate(110.0, "2025-06-02"),
        ];
        let mut points = cheapest_per_departure(&candidates);
        points.sort_by_key(|(date, _)| *date);

        let day = |d: &str| parse_iso_day(d).unwrap();
        assert_eq!(points, vec![(day("2025-06-01"), 95.0), (day("2025-06-02"), 110.0)]);
    }

    #[test]
    fn empty_input_yields_empty_series() {
        assert!(cheapest_per_departure(&[]).is_empty());
    }
}
