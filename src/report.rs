//! Plain-text rendering of ranked results and chart series.

use itertools::Itertools;

use crate::domain::Candidate;
use crate::search::{SearchRequest, SearchResponse};
use crate::utils::hhmm;

pub fn print_search(request: &SearchRequest, response: &SearchResponse) {
    for route in &request.routes {
        let label = route.label();
        if let Some(rows) = response.per_route.get(&label) {
            print_table(&format!("Top {} — {}", request.top_n, label), rows);
        }
    }
    if !response.combined.is_empty() {
        print_table("OVERALL RANKING", &response.combined);
    }
    print_chart_series(request, response);
}

fn print_table(title: &str, rows: &[Candidate]) {
    println!("\n{title}");
    if rows.is_empty() {
        println!("  (no feasible round trips)");
        return;
    }
    println!(
        "  {:>8}  {:<10}  {:<10}  {:<20}  {:<20}  {}",
        "Total", "Out", "Ret", "Out leg", "Ret leg", "Route"
    );
    for c in rows {
        println!(
            "  {:>8.2}  {:<10}  {:<10}  {:<20}  {:<20}  {}",
            c.total,
            c.out_day,
            c.ret_day,
            leg(c.out_price, c.dep_out.as_deref(), c.arr_out.as_deref()),
            leg(c.ret_price, c.dep_ret.as_deref(), c.arr_ret.as_deref()),
            c.route_label,
        );
    }
}

fn leg(price: f64, dep: Option<&str>, arr: Option<&str>) -> String {
    format!("{:.2} | {}→{}", price, hhmm(dep), hhmm(arr))
}

/// Chart points arrive in discovery order; sort by date before showing them
/// as a series.
fn print_chart_series(request: &SearchRequest, response: &SearchResponse) {
    for route in &request.routes {
        let label = route.label();
        let Some(points) = response.chart_series.get(&label) else {
            continue;
        };
        if points.is_empty() {
            continue;
        }
        println!("\nCheapest total per departure day — {label}");
        for (date, price) in points.iter().sorted_by_key(|(date, _)| *date) {
            println!("  {date}  {price:>8.2}");
        }
    }
}
