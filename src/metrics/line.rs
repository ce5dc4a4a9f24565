use chrono::DateTime;

use super::{Metric, MetricValue};
use crate::error::{ClientError, LineParseError};

/// Renders `metrics` as protocol lines into a single buffer, in input order.
///
/// The first invalid metric aborts the whole batch, so a caller never sees a
/// partially built buffer.
pub fn encode_batch(prefix: &str, metrics: &[Metric]) -> Result<String, ClientError> {
    let mut buffer = String::new();

    for (index, metric) in metrics.iter().enumerate() {
        if metric.name.is_empty() {
            return Err(ClientError::EmptyName { index });
        }
        if has_whitespace(prefix) || has_whitespace(&metric.name) {
            return Err(ClientError::Malformed { index, field: "name" });
        }

        if matches!(metric.value, MetricValue::Float(v) if !v.is_finite()) {
            return Err(ClientError::Malformed { index, field: "value" });
        }
        let value = metric.value.to_string();
        if value.is_empty() || has_whitespace(&value) {
            return Err(ClientError::Malformed { index, field: "value" });
        }

        if !prefix.is_empty() {
            buffer.push_str(prefix);
            buffer.push('.');
        }
        buffer.push_str(&metric.name);
        buffer.push(' ');
        buffer.push_str(&value);
        buffer.push(' ');
        buffer.push_str(&metric.unix_timestamp().to_string());
        buffer.push('\n');
    }

    Ok(buffer)
}

/// Parses one `<name> <value> <unix-seconds>` line. A trailing line break is
/// ignored.
pub fn parse_line(line: &str) -> Result<Metric, LineParseError> {
    let line = line.trim_end_matches(['\n', '\r']);
    let fields: Vec<&str> = line.split(' ').collect();
    if fields.len() != 3 {
        return Err(LineParseError::FieldCount(fields.len()));
    }

    let name = fields[0];
    if name.is_empty() {
        return Err(LineParseError::EmptyName);
    }

    let seconds: i64 = fields[2]
        .parse()
        .map_err(|_| LineParseError::Timestamp(fields[2].to_string()))?;
    let timestamp = DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| LineParseError::Timestamp(fields[2].to_string()))?;

    Ok(Metric::at(name, parse_value(fields[1]), timestamp))
}

/// Reads a value the way it appears on the wire: integer, then float, then
/// verbatim text.
pub fn parse_value(text: &str) -> MetricValue {
    if let Ok(v) = text.parse::<i64>() {
        MetricValue::Integer(v)
    } else if let Ok(v) = text.parse::<f64>() {
        MetricValue::Float(v)
    } else {
        MetricValue::String(text.to_string())
    }
}

fn has_whitespace(text: &str) -> bool {
    text.chars().any(char::is_whitespace)
}
