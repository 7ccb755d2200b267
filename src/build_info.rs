use chrono::{DateTime, Datelike, FixedOffset};

/// Set by `build.rs`.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

pub fn parse_build_time(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw).ok()
}

/// Footer stamp, e.g. `Oct 14 2026`.
pub fn built_on(raw: &str) -> Option<String> {
    parse_build_time(raw).map(|t| t.format("%b %e %Y").to_string())
}

pub fn copyright_year(raw: &str) -> Option<i32> {
    parse_build_time(raw).map(|t| t.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamp() {
        let raw = "2026-10-14T09:30:00+00:00";
        assert_eq!(built_on(raw).as_deref(), Some("Oct 14 2026"));
        assert_eq!(copyright_year(raw), Some(2026));
    }

    #[test]
    fn test_garbage() {
        assert_eq!(built_on("yesterday"), None);
    }

    #[test]
    fn test_own_stamp_parses() {
        assert!(parse_build_time(BUILD_TIME).is_some());
    }
}
