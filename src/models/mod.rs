pub mod dashboard;
pub mod table;

use serde_json::Value;
use thiserror::Error;

pub use dashboard::SearchDashboardResult;
pub use table::{SearchTableResult, TABLE_INDEX};

/// Selects which result schema shapes the response of a filter request.
///
/// The table and dashboard resources share one handler; this tag is the only
/// thing that differs between them, bound at route-wiring time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Table,
    Dashboard,
}

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("search result does not match the {kind} schema: {source}")]
    Shape {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize {kind} search result: {source}")]
    Serialize {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ResultKind {
    pub fn name(&self) -> &'static str {
        match self {
            ResultKind::Table => "table",
            ResultKind::Dashboard => "dashboard",
        }
    }

    /// Apply the schema element-wise to a sequence of raw backend documents.
    pub fn dump(&self, results: Vec<Value>) -> Result<Vec<Value>, SchemaError> {
        results.into_iter().map(|raw| self.dump_one(raw)).collect()
    }

    fn dump_one(&self, raw: Value) -> Result<Value, SchemaError> {
        match self {
            ResultKind::Table => {
                let result: SearchTableResult = serde_json::from_value(raw)
                    .map_err(|e| SchemaError::Shape { kind: self.name(), source: e })?;
                serde_json::to_value(result)
                    .map_err(|e| SchemaError::Serialize { kind: self.name(), source: e })
            }
            ResultKind::Dashboard => {
                let result: SearchDashboardResult = serde_json::from_value(raw)
                    .map_err(|e| SchemaError::Shape { kind: self.name(), source: e })?;
                serde_json::to_value(result)
                    .map_err(|e| SchemaError::Serialize { kind: self.name(), source: e })
            }
        }
    }
}
