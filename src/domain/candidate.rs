use serde::Serialize;

/// One feasible, priced round trip.
///
/// A value object: no identity beyond its fields, and duplicates are never
/// deduplicated (month maps have unique day keys, so each (out_day, span)
/// pairing produces at most one candidate anyway).
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Candidate {
    /// `out_price + ret_price`.
    pub total: f64,
    pub out_day: String,
    pub ret_day: String,
    pub out_price: f64,
    pub ret_price: f64,
    pub dep_out: Option<String>,
    pub arr_out: Option<String>,
    pub dep_ret: Option<String>,
    pub arr_ret: Option<String>,
    /// "origin ↔ destination" tag naming the route that produced it.
    pub route_label: String,
}
