use std::sync::OnceLock;
use time::{
    Date,
    format_description::{self, OwnedFormatItem},
};

static ISO: OnceLock<Option<OwnedFormatItem>> = OnceLock::new();

fn iso() -> Option<&'static OwnedFormatItem> {
    ISO.get_or_init(|| format_description::parse_owned::<1>("[year]-[month]-[day]").ok())
        .as_ref()
}

/// Render a date as ISO `YYYY-MM-DD`.
pub(crate) fn format_iso(date: &Date) -> String {
    iso()
        .and_then(|format| date.format(format).ok())
        .unwrap_or_else(|| date.to_string())
}

/// Parse an ISO `YYYY-MM-DD` string; anything else is absent.
pub(crate) fn parse_iso(text: &str) -> Option<Date> {
    Date::parse(text.trim(), iso()?).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    #[test]
    fn iso_dates_round_trip() {
        let date = Date::from_calendar_date(2024, Month::February, 29).expect("valid date");
        let text = format_iso(&date);

        assert_eq!(text, "2024-02-29");
        assert_eq!(parse_iso(&text), Some(date));
    }

    #[test]
    fn early_years_are_zero_padded() {
        let date = Date::from_calendar_date(99, Month::January, 5).expect("valid date");

        assert_eq!(format_iso(&date), "0099-01-05");
        assert_eq!(parse_iso("0099-01-05"), Some(date));
    }

    #[test]
    fn invalid_dates_are_absent() {
        assert_eq!(parse_iso("2023-02-29"), None);
        assert_eq!(parse_iso("2023-13-01"), None);
        assert_eq!(parse_iso("yesterday"), None);
        assert_eq!(parse_iso("2023-01"), None);
    }

    #[test]
    fn non_iso_spellings_are_absent() {
        assert_eq!(parse_iso("2023-1-5"), None);
        assert_eq!(parse_iso("+2023-+01-+05"), None);
        assert_eq!(parse_iso("99-1-5"), None);
        assert_eq!(parse_iso("2023-01-05T00:00"), None);
    }
}
