//! Matrixop - matrix calculator over text selections
//!
//! The host hands over an operation name and one or two selected texts; the
//! engine answers with the rendered result and where to put it, or with a
//! structured error.

mod config;
mod dispatch;
mod operation;

pub use config::{EngineConfig, PRECISION_ENV};
pub use dispatch::{dispatch, DispatchError, Outcome};
pub use operation::{Operation, OperationMeta};

pub use matrixop_core::{Dimensions, ErrorReport, MatrixError};
pub use matrixop_linalg::Matrix;

/// Main Matrixop engine
#[derive(Debug, Clone, Copy, Default)]
pub struct Matrixop {
    config: EngineConfig,
}

impl Matrixop {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Engine configured from the environment
    pub fn from_env() -> Self {
        Self::new(EngineConfig::from_env())
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.config = self.config.with_precision(precision);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run a named operation
    pub fn run<S: AsRef<str>>(&self, operation: &str, selections: &[S]) -> Result<Outcome, DispatchError> {
        let op: Operation = operation.parse()?;
        self.run_operation(op, selections)
    }

    pub fn run_operation<S: AsRef<str>>(&self, op: Operation, selections: &[S]) -> Result<Outcome, DispatchError> {
        dispatch(op, selections, &self.config.formatter())
    }

    /// Zero-filled template for a shape like `3x2`
    pub fn template(&self, shape: &str) -> Result<String, DispatchError> {
        let dims = matrixop_linalg::parse_shape(shape)?;
        let blank = matrixop_linalg::zeros(dims)?;
        Ok(self.config.formatter().format(&blank))
    }

    /// Metadata for every operation
    pub fn operations(&self) -> Vec<OperationMeta> {
        Operation::ALL.iter().map(Operation::meta).collect()
    }

    /// Usage text for one operation, or for all of them
    pub fn help(&self, name: Option<&str>) -> Result<String, DispatchError> {
        match name {
            Some(name) => {
                let op: Operation = name.parse()?;
                Ok(describe(&op.meta()))
            }
            None => Ok(Operation::ALL
                .iter()
                .map(|op| describe(&op.meta()))
                .collect::<Vec<_>>()
                .join("\n\n")),
        }
    }
}

fn describe(meta: &OperationMeta) -> String {
    let mut text = format!(
        "{} ({} selection{}): {}\nUsage: {}",
        meta.name,
        meta.selections,
        if meta.selections == 1 { "" } else { "s" },
        meta.description,
        meta.usage
    );
    if !meta.aliases.is_empty() {
        text.push_str(&format!("\nAliases: {}", meta.aliases.join(", ")));
    }
    for example in meta.examples {
        text.push_str(&format!("\nExample: {}", example));
    }
    if !meta.related.is_empty() {
        text.push_str(&format!("\nSee also: {}", meta.related.join(", ")));
    }
    text
}
