//! Search defaults, mirroring the presets of the original desktop tool

pub struct SearchDefaults {
    pub currency: &'static str,
    /// Minimum nights between outbound and return
    pub min_days: u64,
    /// Maximum nights between outbound and return
    pub max_days: u64,
    /// Result-set cap per ranking table
    pub top_n: usize,
    /// Window length (days) when no end date is given
    pub span_days: u64,
    /// The classic two-route preset
    pub preset_routes: [(&'static str, &'static str); 2],
}

pub const SEARCH: SearchDefaults = SearchDefaults {
    currency: "EUR",
    min_days: 3,
    max_days: 14,
    top_n: 5,
    span_days: 30,
    preset_routes: [("CGN", "PMO"), ("NRN", "TPS")],
};

/// A search compares at most this many routes side by side.
pub const MAX_ROUTES: usize = 2;
