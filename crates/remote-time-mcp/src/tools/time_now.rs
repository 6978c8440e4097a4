//! `time_now` tool
//!
//! Returns the current UTC time, either ISO-8601 or formatted with
//! strftime-style specifiers.

use std::fmt::Write;
use std::sync::Arc;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Value, json};

use super::{Clock, Tool, ToolDefinition, ToolError, ToolResult};

/// Current UTC time
pub struct TimeNow {
    clock: Arc<dyn Clock>,
}

impl TimeNow {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl Tool for TimeNow {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "time_now",
            description: "Return the current UTC time. Pass `fmt` to format it with strftime-style specifiers.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "fmt": {
                        "type": "string",
                        "description": "strftime format, e.g. \"%Y-%m-%d %H:%M:%S UTC\". ISO-8601 when omitted."
                    }
                }
            }),
        }
    }

    fn call(&self, arguments: &Value) -> Result<ToolResult, ToolError> {
        let fmt = parse_fmt(arguments)?;
        let now = self.clock.now();

        let text = match fmt {
            Some(fmt) => format_strftime(now, fmt)?,
            None => format_iso(now),
        };

        Ok(ToolResult::text(text))
    }
}

/// Extract the optional `fmt` argument. Empty strings count as absent.
fn parse_fmt(arguments: &Value) -> Result<Option<&str>, ToolError> {
    let fields = match arguments {
        Value::Null => return Ok(None),
        Value::Object(fields) => fields,
        other => {
            return Err(ToolError::InvalidArguments(format!(
                "arguments must be an object, got {other}"
            )));
        }
    };

    match fields.get("fmt") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(ToolError::InvalidArguments(format!(
            "`fmt` must be a string, got {other}"
        ))),
    }
}

/// ISO-8601 with a `+00:00` offset. The fraction is omitted when it is zero.
fn format_iso(time: DateTime<Utc>) -> String {
    let precision = if time.timestamp_subsec_micros() == 0 {
        SecondsFormat::Secs
    } else {
        SecondsFormat::Micros
    };
    time.to_rfc3339_opts(precision, false)
}

fn format_strftime(time: DateTime<Utc>, fmt: &str) -> Result<String, ToolError> {
    let items: Vec<Item<'_>> = StrftimeItems::new(fmt).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(ToolError::InvalidArguments(format!(
            "invalid format string: {fmt}"
        )));
    }

    let mut out = String::new();
    write!(out, "{}", time.format_with_items(items.iter()))
        .map_err(|_| ToolError::InvalidArguments(format!("cannot format time with: {fmt}")))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::FixedClock;
    use chrono::TimeZone;

    fn tool() -> TimeNow {
        let instant = Utc
            .with_ymd_and_hms(2026, 10, 19, 8, 30, 5)
            .unwrap()
            .checked_add_signed(chrono::Duration::microseconds(123_456))
            .unwrap();
        TimeNow::new(Arc::new(FixedClock(instant)))
    }

    fn text(result: ToolResult) -> String {
        result.content.into_iter().next().unwrap().text
    }

    #[test]
    fn test_iso_without_fmt() {
        let out = text(tool().call(&json!({})).unwrap());
        assert_eq!(out, "2026-10-19T08:30:05.123456+00:00");
    }

    #[test]
    fn test_null_arguments() {
        let out = text(tool().call(&Value::Null).unwrap());
        assert!(out.ends_with("+00:00"));
    }

    #[test]
    fn test_null_and_empty_fmt_are_iso() {
        let a = text(tool().call(&json!({"fmt": null})).unwrap());
        let b = text(tool().call(&json!({"fmt": ""})).unwrap());
        assert_eq!(a, "2026-10-19T08:30:05.123456+00:00");
        assert_eq!(a, b);
    }

    #[test]
    fn test_iso_whole_second_has_no_fraction() {
        let instant = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap();
        let tool = TimeNow::new(Arc::new(FixedClock(instant)));
        let out = text(tool.call(&json!({})).unwrap());
        assert_eq!(out, "2026-10-19T08:30:00+00:00");
    }

    #[test]
    fn test_strftime_fmt() {
        let out = text(tool().call(&json!({"fmt": "%Y-%m-%d %H:%M:%S UTC"})).unwrap());
        assert_eq!(out, "2026-10-19 08:30:05 UTC");
    }

    #[test]
    fn test_invalid_specifier() {
        let err = tool().call(&json!({"fmt": "%Q"})).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn test_non_string_fmt() {
        let err = tool().call(&json!({"fmt": 42})).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn test_non_object_arguments() {
        let err = tool().call(&json!(["%Y"])).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
