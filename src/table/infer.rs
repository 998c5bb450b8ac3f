use std::collections::HashMap;

use super::{ColumnType, Value};

/// Cells that load as [`Value::Missing`], matching the usual dataframe defaults.
pub const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn is_missing(raw: &str) -> bool {
    NA_VALUES.contains(&raw)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "True" | "TRUE" | "true" => Some(true),
        "False" | "FALSE" | "false" => Some(false),
        _ => None,
    }
}

/// Narrowest type that every non-missing cell fits, widening
/// Bool/Int -> Float -> Text as conflicting cells show up.
pub fn infer_column_type<'a, I>(cells: I) -> ColumnType
where
    I: IntoIterator<Item = &'a str>,
{
    let mut current: Option<ColumnType> = None;

    for cell in cells {
        if is_missing(cell) {
            continue;
        }

        current = Some(match current {
            None => classify(cell),
            Some(ColumnType::Text) => return ColumnType::Text,
            Some(ColumnType::Bool) if parse_bool(cell).is_some() => ColumnType::Bool,
            Some(ColumnType::Bool) => return ColumnType::Text,
            Some(ColumnType::Int) if cell.parse::<i64>().is_ok() => ColumnType::Int,
            Some(ColumnType::Int | ColumnType::Float) if cell.parse::<f64>().is_ok() => {
                ColumnType::Float
            }
            Some(_) => return ColumnType::Text,
        });
    }

    current.unwrap_or(ColumnType::Text)
}

fn classify(cell: &str) -> ColumnType {
    if parse_bool(cell).is_some() {
        ColumnType::Bool
    } else if cell.parse::<i64>().is_ok() {
        ColumnType::Int
    } else if cell.parse::<f64>().is_ok() {
        ColumnType::Float
    } else {
        ColumnType::Text
    }
}

/// Convert a raw cell into a value of an already inferred column type.
pub fn parse_cell(raw: &str, ty: ColumnType) -> Value {
    if is_missing(raw) {
        return Value::Missing;
    }

    let parsed = match ty {
        ColumnType::Bool => parse_bool(raw).map(Value::Bool),
        ColumnType::Int => raw.parse().ok().map(Value::Int),
        ColumnType::Float => raw.parse().ok().map(Value::Float),
        ColumnType::Text => None,
    };
    parsed.unwrap_or_else(|| Value::Text(raw.to_string()))
}

/// Duplicate header names get a `.N` suffix so every column stays addressable.
pub fn dedupe_headers<'a, I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut out = Vec::new();

    for name in raw {
        let mut candidate = name.to_string();
        if let Some(&last) = seen.get(name) {
            let mut n = last;
            loop {
                n += 1;
                candidate = format!("{}.{}", name, n);
                if !seen.contains_key(&candidate) {
                    break;
                }
            }
            seen.insert(name.to_string(), n);
        }
        seen.insert(candidate.clone(), 0);
        out.push(candidate);
    }

    out
}
