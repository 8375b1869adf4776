//! Price-source (Ryanair farfnd) configuration

pub struct SourceConfig {
    /// `{origin}` and `{dest}` are substituted into the template.
    pub endpoint_template: &'static str,
    // Whole-request timeout; the engine adds no timeout of its own on top
    pub timeout_secs: u64,
    pub user_agent: &'static str,
}

pub const SOURCE: SourceConfig = SourceConfig {
    endpoint_template:
        "https://www.ryanair.com/api/farfnd/v4/oneWayFares/{origin}/{dest}/cheapestPerDay",
    timeout_secs: 20,
    user_agent: "RoundtripFinder/1.3",
};
