//! Form record to template field mapping

use crate::field_map::FieldMap;
use crate::fields::*;
use crate::record::{value_to_string, FormRecord};
use serde_json::Value;

/// Build the template field values for one form record
///
/// Fields are emitted in template order: text fields, status, occasion,
/// not-observed, report type, traits, recommendation, summary markers and
/// finally the trait average. Text fields are always present (possibly
/// empty); traits and the average are only present when they have a value.
pub fn build_field_map(record: &FormRecord) -> FieldMap {
    let mut fields = FieldMap::new();

    for (tag, key) in TEXT_FIELDS {
        fields.insert(*tag, record.text(key));
    }

    let status = record.get_str(STATUS_KEY);
    let code = STATUS_CODES
        .iter()
        .find(|(value, _)| Some(*value) == status)
        .map(|(_, code)| *code)
        .unwrap_or_default();
    fields.insert(STATUS_FIELD, code);

    insert_flags(&mut fields, OCCASION_FLAGS, record.get_str(OCCASION_KEY));

    let nob = if record.is_truthy(NOT_OBSERVED_KEY) {
        FLAG_SET
    } else {
        FLAG_CLEAR
    };
    fields.insert(NOT_OBSERVED_FIELD, nob);

    insert_flags(&mut fields, REPORT_TYPE_FLAGS, record.get_str(REPORT_TYPE_KEY));

    for (key, tag) in TRAITS {
        match record.get(key) {
            None | Some(Value::Null) => {}
            Some(Value::String(s)) if s.is_empty() => {}
            Some(value) => fields.insert(*tag, value_to_string(value)),
        }
    }

    let recommendation = record.get_str(RECOMMENDATION_KEY);
    fields.insert(RECOMMENDATION_FIELD, record.text(RECOMMENDATION_KEY));
    for (value, tag) in SUMMARY_MARKERS {
        let mark = if Some(*value) == recommendation {
            SUMMARY_MARK
        } else {
            ""
        };
        fields.insert(*tag, mark);
    }

    if let Some(avg) = trait_average(record) {
        fields.insert(TRAIT_AVERAGE_FIELD, format!("{avg:.2}"));
    }

    tracing::debug!(fields = fields.len(), "built field map");
    fields
}

/// Set one flag of an exclusive group to "1" and the rest to "0"
///
/// An unknown or missing selection clears every flag.
fn insert_flags(fields: &mut FieldMap, flags: &[(&str, &str)], selected: Option<&str>) {
    for (value, tag) in flags {
        let flag = if Some(*value) == selected {
            FLAG_SET
        } else {
            FLAG_CLEAR
        };
        fields.insert(*tag, flag);
    }
}

/// Mean of the numeric trait grades, if any
///
/// JSON numbers count, as do strings made of digits and dots that parse as
/// a number (`"4"`, `"3.5"`). Booleans count as 1 and 0. `"NOB"` and other
/// text are ignored.
pub fn trait_average(record: &FormRecord) -> Option<f64> {
    let grades: Vec<f64> = TRAITS
        .iter()
        .filter_map(|(key, _)| record.get(key).and_then(numeric_grade))
        .collect();

    if grades.is_empty() {
        None
    } else {
        Some(grades.iter().sum::<f64>() / grades.len() as f64)
    }
}

fn numeric_grade(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => {
            let digits = s.replace('.', "");
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            s.parse().ok()
        }
        _ => None,
    }
}
