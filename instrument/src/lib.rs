//! Telemetry collection for supply-agent runs.
//!
//! Agents publish observations as `tracing` events at `INFO` level. The
//! [`DataFrameSubscriber`] turns each event target into a table and each event
//! field into a column, so the schema follows whatever the agents emit.
//!
//! Two targets are used by `supply-core`:
//! - `time_series`: one row per observation (`agent_id`, `time`, `series`, `value`)
//! - `agent_position`: one row per agent entering the simulation
//!
//! # Usage
//!
//! ```ignore
//! tracing::subscriber::with_default(instrument::DataFrameSubscriber, || {
//!     // ... drive agents ...
//! });
//! let recorder = instrument::drain();
//! let supply = recorder.time_series("supplycommod");
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Record};
use tracing::{Event, Id, Metadata, Subscriber};

/// Table target for named per-period observations.
pub const TIME_SERIES: &str = "time_series";
/// Table target for static agent position records.
pub const AGENT_POSITION: &str = "agent_position";

/// A column of typed values.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedColumn {
    U64(Vec<u64>),
    I64(Vec<i64>),
    F64(Vec<f64>),
    Bool(Vec<bool>),
    Str(Vec<String>),
}

impl TypedColumn {
    pub fn len(&self) -> usize {
        match self {
            TypedColumn::U64(v) => v.len(),
            TypedColumn::I64(v) => v.len(),
            TypedColumn::F64(v) => v.len(),
            TypedColumn::Bool(v) => v.len(),
            TypedColumn::Str(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A table with dynamically-typed columns.
#[derive(Debug, Clone, Default)]
pub struct DynamicTable {
    pub columns: HashMap<String, TypedColumn>,
    pub row_count: usize,
}

impl DynamicTable {
    /// Pad all columns to the current row count so rows stay aligned when an
    /// event omits a field.
    fn pad_columns_to_row_count(&mut self) {
        for col in self.columns.values_mut() {
            let current_len = col.len();
            if current_len < self.row_count {
                let padding = self.row_count - current_len;
                match col {
                    TypedColumn::U64(v) => v.extend(std::iter::repeat_n(0, padding)),
                    TypedColumn::I64(v) => v.extend(std::iter::repeat_n(0, padding)),
                    TypedColumn::F64(v) => v.extend(std::iter::repeat_n(0.0, padding)),
                    TypedColumn::Bool(v) => v.extend(std::iter::repeat_n(false, padding)),
                    TypedColumn::Str(v) => v.extend(std::iter::repeat_n(String::new(), padding)),
                }
            }
        }
    }

    pub fn f64s(&self, column: &str) -> Option<&[f64]> {
        match self.columns.get(column)? {
            TypedColumn::F64(v) => Some(v),
            _ => None,
        }
    }

    pub fn u64s(&self, column: &str) -> Option<&[u64]> {
        match self.columns.get(column)? {
            TypedColumn::U64(v) => Some(v),
            _ => None,
        }
    }

    pub fn strs(&self, column: &str) -> Option<&[String]> {
        match self.columns.get(column)? {
            TypedColumn::Str(v) => Some(v),
            _ => None,
        }
    }
}

/// Collection of tables, keyed by tracing target.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub tables: HashMap<String, DynamicTable>,
}

impl Recorder {
    pub fn table(&self, target: &str) -> Option<&DynamicTable> {
        self.tables.get(target)
    }

    /// All `(time, value)` observations of one named series, in emission order.
    pub fn time_series(&self, series: &str) -> Vec<(u64, f64)> {
        let Some(table) = self.table(TIME_SERIES) else {
            return Vec::new();
        };
        let (Some(names), Some(times), Some(values)) =
            (table.strs("series"), table.u64s("time"), table.f64s("value"))
        else {
            return Vec::new();
        };

        names
            .iter()
            .zip(times.iter().zip(values))
            .filter(|(name, _)| name.as_str() == series)
            .map(|(_, (&time, &value))| (time, value))
            .collect()
    }

    /// Just the values of one named series, in emission order.
    pub fn series_values(&self, series: &str) -> Vec<f64> {
        self.time_series(series).into_iter().map(|(_, v)| v).collect()
    }
}

thread_local! {
    static RECORDER: RefCell<Recorder> = RefCell::default();
}

/// Visitor that extracts event fields into table columns.
struct ColumnVisitor<'a> {
    table: &'a mut DynamicTable,
    /// Rows recorded before this one; new columns are back-filled to this length.
    row_count: usize,
}

impl Visit for ColumnVisitor<'_> {
    fn record_u64(&mut self, field: &Field, value: u64) {
        let name = field.name().to_string();
        let col = self
            .table
            .columns
            .entry(name)
            .or_insert_with(|| TypedColumn::U64(vec![0; self.row_count]));
        if let TypedColumn::U64(v) = col {
            v.push(value);
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        let name = field.name().to_string();
        let col = self
            .table
            .columns
            .entry(name)
            .or_insert_with(|| TypedColumn::I64(vec![0; self.row_count]));
        if let TypedColumn::I64(v) = col {
            v.push(value);
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        let name = field.name().to_string();
        let col = self
            .table
            .columns
            .entry(name)
            .or_insert_with(|| TypedColumn::F64(vec![0.0; self.row_count]));
        if let TypedColumn::F64(v) = col {
            v.push(value);
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        let name = field.name().to_string();
        let col = self
            .table
            .columns
            .entry(name)
            .or_insert_with(|| TypedColumn::Bool(vec![false; self.row_count]));
        if let TypedColumn::Bool(v) = col {
            v.push(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let name = field.name().to_string();
        let col = self
            .table
            .columns
            .entry(name)
            .or_insert_with(|| TypedColumn::Str(vec![String::new(); self.row_count]));
        if let TypedColumn::Str(v) = col {
            v.push(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.record_str(field, &format!("{:?}", value));
    }
}

/// Tracing subscriber that collects `INFO` events into column-oriented tables.
///
/// Spans and `DEBUG`/`TRACE` events are ignored, so diagnostic logging can
/// share the same call sites without polluting the tables.
pub struct DataFrameSubscriber;

impl Subscriber for DataFrameSubscriber {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.is_event() && *metadata.level() <= tracing::Level::INFO
    }

    fn new_span(&self, _span: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _span: &Id, _values: &Record<'_>) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let target = event.metadata().target().to_string();

        RECORDER.with(|r| {
            let mut recorder = r.borrow_mut();
            let table = recorder.tables.entry(target).or_default();

            table.pad_columns_to_row_count();
            let row_count = table.row_count;
            event.record(&mut ColumnVisitor { table, row_count });
            table.row_count += 1;
            // Columns this event did not touch
            table.pad_columns_to_row_count();
        });
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

/// Drain all recorded data from the thread-local recorder.
pub fn drain() -> Recorder {
    RECORDER.with(|r| std::mem::take(&mut *r.borrow_mut()))
}

/// Clear all recorded data without returning it.
pub fn clear() {
    RECORDER.with(|r| *r.borrow_mut() = Recorder::default());
}

// === Polars Integration ===

use polars::prelude::*;

impl DynamicTable {
    /// Convert this table to a polars DataFrame.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let columns: Vec<Column> = self
            .columns
            .iter()
            .map(|(name, col)| match col {
                TypedColumn::U64(v) => Column::new(name.into(), v),
                TypedColumn::I64(v) => Column::new(name.into(), v),
                TypedColumn::F64(v) => Column::new(name.into(), v),
                TypedColumn::Bool(v) => Column::new(name.into(), v),
                TypedColumn::Str(v) => Column::new(name.into(), v),
            })
            .collect();

        DataFrame::new(columns)
    }
}

impl Recorder {
    /// Convert all tables to polars DataFrames.
    pub fn to_dataframes(&self) -> HashMap<String, DataFrame> {
        self.tables
            .iter()
            .filter_map(|(name, table)| table.to_dataframe().ok().map(|df| (name.clone(), df)))
            .collect()
    }
}

/// Drain all recorded data and convert to polars DataFrames.
pub fn drain_to_dataframes() -> HashMap<String, DataFrame> {
    drain().to_dataframes()
}

/// Save all DataFrames as `{dir}/{name}.parquet`.
pub fn save_parquet(dfs: &mut HashMap<String, DataFrame>, dir: &Path) -> PolarsResult<()> {
    std::fs::create_dir_all(dir).map_err(|e| PolarsError::IO {
        error: e.into(),
        msg: None,
    })?;
    for (name, df) in dfs.iter_mut() {
        let path = dir.join(format!("{}.parquet", name));
        let file = std::fs::File::create(&path).map_err(|e| PolarsError::IO {
            error: e.into(),
            msg: None,
        })?;
        ParquetWriter::new(file).finish(df)?;
    }
    Ok(())
}
