/// Harvest v2 time-entries endpoint; all entry data travels in the query string
pub(crate) const TIME_ENTRIES_URL: &str = "https://api.harvestapp.com/v2/time_entries";

/// Spent-date format required by the API: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";
