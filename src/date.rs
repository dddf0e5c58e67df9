//! Flexible date inputs.
//!
//! Publication dates arrive in whatever shape the caller has on hand: a real
//! timestamp, a string (`"2024-06-01"`, `"now"`, `"+1 week"`), or nothing at
//! all. [`DateInput`] captures that shape at the API boundary; [`resolve`]
//! turns it into a concrete `DateTime<Utc>` exactly once, anchoring relative
//! expressions at the supplied instant.
//!
//! [`resolve`]: DateInput::resolve

use chrono::{DateTime, Duration, Months, NaiveDate, NaiveDateTime, Utc};

use crate::error::{DraftableError, Result};

/// A publication date as supplied by a caller.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// No date. Resolves to `None` and clears the field.
    Absent,
    /// A concrete instant, used as-is.
    At(DateTime<Utc>),
    /// A date expression, absolute or relative to the current time.
    Expr(String),
}

impl From<DateTime<Utc>> for DateInput {
    fn from(at: DateTime<Utc>) -> Self {
        DateInput::At(at)
    }
}

impl From<Option<DateTime<Utc>>> for DateInput {
    fn from(at: Option<DateTime<Utc>>) -> Self {
        match at {
            Some(at) => DateInput::At(at),
            None => DateInput::Absent,
        }
    }
}

impl From<&str> for DateInput {
    fn from(expr: &str) -> Self {
        DateInput::Expr(expr.to_string())
    }
}

impl From<String> for DateInput {
    fn from(expr: String) -> Self {
        DateInput::Expr(expr)
    }
}

impl DateInput {
    /// Resolve to a concrete timestamp.
    ///
    /// `anchor` is the instant relative expressions count from; absolute
    /// inputs ignore it.
    pub fn resolve(&self, anchor: DateTime<Utc>) -> Result<Option<DateTime<Utc>>> {
        match self {
            DateInput::Absent => Ok(None),
            DateInput::At(at) => Ok(Some(*at)),
            DateInput::Expr(expr) => parse_expr(expr, anchor).map(Some),
        }
    }
}

fn invalid(input: &str) -> DraftableError {
    DraftableError::InvalidDateFormat {
        input: input.to_string(),
    }
}

fn parse_expr(expr: &str, anchor: DateTime<Utc>) -> Result<DateTime<Utc>> {
    let trimmed = expr.trim();

    if trimmed.eq_ignore_ascii_case("now") {
        return Ok(anchor);
    }
    if trimmed.starts_with('+') || trimmed.starts_with('-') {
        return parse_offset(trimmed, anchor);
    }

    if let Ok(at) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(at.with_timezone(&Utc));
    }
    if let Ok(at) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Ok(at.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        // Midnight UTC; the 00:00:00 always exists
        if let Some(at) = date.and_hms_opt(0, 0, 0) {
            return Ok(at.and_utc());
        }
    }

    Err(invalid(expr))
}

/// Parse a signed offset like `+1 week` or `-3 days`.
///
/// Units: second, minute, hour, day, week, month, year (singular or plural).
/// Months and years use calendar arithmetic, so `+1 month` from Jan 31 lands
/// on the last day of February.
fn parse_offset(expr: &str, anchor: DateTime<Utc>) -> Result<DateTime<Utc>> {
    let negative = expr.starts_with('-');
    let body = &expr[1..];

    let mut parts = body.split_whitespace();
    let amount: u32 = parts
        .next()
        .and_then(|raw| raw.parse().ok())
        .ok_or_else(|| invalid(expr))?;
    let unit = parts.next().ok_or_else(|| invalid(expr))?;
    if parts.next().is_some() {
        return Err(invalid(expr));
    }

    let singular = unit.strip_suffix('s').unwrap_or(unit);
    let shifted = match singular {
        "second" => shift_duration(anchor, Duration::seconds(i64::from(amount)), negative),
        "minute" => shift_duration(anchor, Duration::minutes(i64::from(amount)), negative),
        "hour" => shift_duration(anchor, Duration::hours(i64::from(amount)), negative),
        "day" => shift_duration(anchor, Duration::days(i64::from(amount)), negative),
        "week" => shift_duration(anchor, Duration::weeks(i64::from(amount)), negative),
        "month" => shift_months(anchor, Months::new(amount), negative),
        "year" => shift_months(anchor, Months::new(amount.saturating_mul(12)), negative),
        _ => None,
    };

    shifted.ok_or_else(|| invalid(expr))
}

fn shift_duration(
    anchor: DateTime<Utc>,
    offset: Duration,
    negative: bool,
) -> Option<DateTime<Utc>> {
    if negative {
        anchor.checked_sub_signed(offset)
    } else {
        anchor.checked_add_signed(offset)
    }
}

fn shift_months(anchor: DateTime<Utc>, offset: Months, negative: bool) -> Option<DateTime<Utc>> {
    if negative {
        anchor.checked_sub_months(offset)
    } else {
        anchor.checked_add_months(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap()
    }

    #[test]
    fn absent_resolves_to_none() {
        assert_eq!(DateInput::Absent.resolve(anchor()).unwrap(), None);
    }

    #[test]
    fn concrete_instant_passes_through() {
        let at = anchor() + Duration::days(3);
        assert_eq!(DateInput::At(at).resolve(anchor()).unwrap(), Some(at));
    }

    #[test]
    fn from_option_maps_none_to_absent() {
        assert_eq!(DateInput::from(None), DateInput::Absent);
        let at = anchor();
        assert_eq!(DateInput::from(Some(at)), DateInput::At(at));
    }

    #[test]
    fn now_resolves_to_anchor() {
        let resolved = DateInput::from("now").resolve(anchor()).unwrap();
        assert_eq!(resolved, Some(anchor()));

        let resolved = DateInput::from("  NOW ").resolve(anchor()).unwrap();
        assert_eq!(resolved, Some(anchor()));
    }

    #[test]
    fn positive_offsets_count_forward() {
        let cases = [
            ("+30 seconds", anchor() + Duration::seconds(30)),
            ("+5 minutes", anchor() + Duration::minutes(5)),
            ("+2 hours", anchor() + Duration::hours(2)),
            ("+1 day", anchor() + Duration::days(1)),
            ("+1 week", anchor() + Duration::weeks(1)),
        ];
        for (expr, expected) in cases {
            let resolved = DateInput::from(expr).resolve(anchor()).unwrap();
            assert_eq!(resolved, Some(expected), "expr: {expr}");
        }
    }

    #[test]
    fn negative_offsets_count_backward() {
        let resolved = DateInput::from("-3 days").resolve(anchor()).unwrap();
        assert_eq!(resolved, Some(anchor() - Duration::days(3)));
    }

    #[test]
    fn month_offset_uses_calendar_arithmetic() {
        let jan31 = Utc.with_ymd_and_hms(2023, 1, 31, 9, 0, 0).unwrap();
        let resolved = DateInput::from("+1 month").resolve(jan31).unwrap();
        // 2023 is not a leap year; clamps to Feb 28
        assert_eq!(
            resolved,
            Some(Utc.with_ymd_and_hms(2023, 2, 28, 9, 0, 0).unwrap())
        );
    }

    #[test]
    fn year_offset() {
        let resolved = DateInput::from("+2 years").resolve(anchor()).unwrap();
        assert_eq!(
            resolved,
            Some(Utc.with_ymd_and_hms(2026, 6, 15, 10, 30, 0).unwrap())
        );
    }

    #[test]
    fn absolute_date_formats() {
        let resolved = DateInput::from("2024-01-15").resolve(anchor()).unwrap();
        assert_eq!(
            resolved,
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap())
        );

        let resolved = DateInput::from("2024-01-15 10:30:00")
            .resolve(anchor())
            .unwrap();
        assert_eq!(
            resolved,
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap())
        );
    }

    #[test]
    fn rfc3339_with_offset_normalizes_to_utc() {
        let resolved = DateInput::from("2024-01-15T12:00:00+02:00")
            .resolve(anchor())
            .unwrap();
        assert_eq!(
            resolved,
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap())
        );
    }

    #[test]
    fn unparseable_expressions_error() {
        for expr in ["soon", "+abc week", "+1", "+1 fortnight", "+1 week extra", ""] {
            let err = DateInput::from(expr).resolve(anchor()).unwrap_err();
            assert!(
                matches!(err, DraftableError::InvalidDateFormat { .. }),
                "expr: {expr:?}"
            );
        }
    }
}
