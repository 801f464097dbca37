/// Runtime configuration for the dashboard, resolved from the environment.
///
/// Defaults reproduce the fixed query scope: Indonesian region, `id-ID`
/// host language, and a `tz` value of 420.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: String,
    pub base_url: String,
    pub geo: String,
    pub host_language: String,
    /// Minutes *west* of UTC, sent to the provider as `tz` (the JavaScript
    /// `getTimezoneOffset` convention): `360` is UTC-06:00, `-420` is UTC+07:00.
    /// Only affects how the provider buckets data; display is always UTC+7.
    pub tz_offset_minutes: i32,
    pub user_agent: String,
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,
}
