//! Wall-clock helpers that work both in the browser and on the server

/// Milliseconds since the Unix epoch
#[cfg(feature = "hydrate")]
pub fn now_millis() -> i64 {
    js_sys::Date::now() as i64
}

/// Milliseconds since the Unix epoch
#[cfg(not(feature = "hydrate"))]
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Seconds since the Unix epoch
pub fn now_secs() -> i64 {
    now_millis() / 1000
}
