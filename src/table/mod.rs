// src/table/mod.rs
use std::{fmt, fs::File, io::Read, path::Path};

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::Result;

pub mod infer;

/// Per-column type, resolved once the whole file has been read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Bool,
    Int,
    Float,
    Text,
}

/// A single cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Missing,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view; integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Missing => f.write_str("NaN"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => f.write_str(s),
        }
    }
}

/// A fully materialized CSV: named columns, one shared schema, ordered rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    types: Vec<ColumnType>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Parse the CSV at `path`. The header row names the columns.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(file)
    }

    /// Read every record from `reader` into memory, then infer each column's
    /// type from all of its non-missing cells.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

        let columns = infer::dedupe_headers(rdr.headers()?.iter());

        let mut raw = Vec::new();
        for record in rdr.records() {
            raw.push(record?);
        }

        let types: Vec<ColumnType> = (0..columns.len())
            .map(|idx| infer::infer_column_type(raw.iter().map(|r| r.get(idx).unwrap_or(""))))
            .collect();

        let rows = raw
            .iter()
            .map(|record| {
                types
                    .iter()
                    .enumerate()
                    .map(|(idx, ty)| infer::parse_cell(record.get(idx).unwrap_or(""), *ty))
                    .collect()
            })
            .collect::<Vec<Vec<Value>>>();

        debug!(
            columns = columns.len(),
            rows = rows.len(),
            "parsed csv into table"
        );

        Ok(Self {
            columns,
            types,
            rows,
        })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_types(&self) -> &[ColumnType] {
        &self.types
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn column_type(&self, name: &str) -> Option<ColumnType> {
        self.column_index(name).map(|idx| self.types[idx])
    }

    /// All values of one column, in row order.
    pub fn column<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a Value> + 'a> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[idx]))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        self.rows.get(index).map(|values| Row {
            columns: &self.columns,
            values,
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(move |values| Row {
            columns: &self.columns,
            values,
        })
    }
}

/// Borrowed view of one row, keyed by column name.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    columns: &'a [String],
    values: &'a [Value],
}

impl<'a> Row<'a> {
    pub fn get(&self, column: &str) -> Option<&'a Value> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.values.get(idx)
    }

    pub fn values(&self) -> &'a [Value] {
        self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Value)> + 'a {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use anyhow::Result;
    use std::io::Cursor;

    #[test]
    fn test_two_column_table() -> Result<()> {
        let table = Table::from_reader(Cursor::new("a,b\n1,x\n2,y\n"))?;

        assert_eq!(table.columns(), ["a", "b"]);
        assert_eq!(table.column_types(), [ColumnType::Int, ColumnType::Text]);
        assert_eq!(table.shape(), (2, 2));

        let rows: Vec<Vec<Value>> = table.rows().map(|r| r.values().to_vec()).collect();
        assert_eq!(
            rows,
            vec![
                vec![Value::Int(1), Value::Text("x".into())],
                vec![Value::Int(2), Value::Text("y".into())],
            ]
        );

        let first = table.row(0).expect("row 0");
        assert_eq!(first.get("a"), Some(&Value::Int(1)));
        assert_eq!(first.get("b").and_then(Value::as_str), Some("x"));
        assert_eq!(first.get("c"), None);
        assert!(table.row(2).is_none());
        Ok(())
    }

    #[test]
    fn test_missing_cells_and_float_widening() -> Result<()> {
        let csv = "npi,cost,flag\n1003000126,12.5,True\n1003000134,,false\n1003000142,7,\n";
        let table = Table::from_reader(Cursor::new(csv))?;

        assert_eq!(
            table.column_types(),
            [ColumnType::Int, ColumnType::Float, ColumnType::Bool]
        );
        let costs: Vec<Option<f64>> = table
            .column("cost")
            .expect("cost column")
            .map(Value::as_f64)
            .collect();
        assert_eq!(costs, vec![Some(12.5), None, Some(7.0)]);
        assert_eq!(table.row(2).and_then(|r| r.get("flag")), Some(&Value::Missing));
        Ok(())
    }

    #[test]
    fn test_header_only_file_is_empty() -> Result<()> {
        let table = Table::from_reader(Cursor::new("a,b\n"))?;
        assert!(table.is_empty());
        assert_eq!(table.shape(), (0, 2));
        assert_eq!(table.column_types(), [ColumnType::Text, ColumnType::Text]);
        Ok(())
    }

    #[test]
    fn test_quoted_fields_keep_commas() -> Result<()> {
        let table = Table::from_reader(Cursor::new("name,city\n\"Smith, John\",\"Boston\"\n"))?;
        let row = table.row(0).expect("row 0");
        assert_eq!(row.get("name").and_then(Value::as_str), Some("Smith, John"));
        let pairs: Vec<(&str, String)> = row.iter().map(|(k, v)| (k, v.to_string())).collect();
        assert_eq!(
            pairs,
            vec![("name", "Smith, John".to_string()), ("city", "Boston".to_string())]
        );
        Ok(())
    }

    #[test]
    fn test_ragged_record_is_a_csv_error() {
        let err = Table::from_reader(Cursor::new("a,b\n1,2,3\n")).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)), "got {err:?}");
    }
}
