//! BOM transform pipeline with ordered step execution.
//!
//! # Standard Pipeline Order
//!
//! 1. **RequiredColumnsStep** - Record missing required columns
//! 2. **NormalizeFieldsStep** - Trim text, coerce quantities
//! 3. **ClassifyStep** - Derive category label and top-level segment
//! 4. **ConsistencyStep** - Category presence, description/value match
//! 5. **SortStep** - Stable multi-key sort
//! 6. **DisplayColumnStep** - Materialize the display grouping column
//!
//! The sorted table is then projected onto the output schema.
//!
//! # Example
//!
//! ```ignore
//! use bom_transform::transform;
//!
//! let output = transform(table, &config)?;
//! assert_eq!(output.projected.len(), output.input_rows);
//! ```

use bom_model::{BomConfig, BomTable, IssueLedger, ProjectedTable, TableError};
use bom_validate::{check_required_columns, run_consistency_checks};
use tracing::info_span;

use crate::classify::add_category_columns;
use crate::normalize::normalize_fields;
use crate::sort::{add_display_column, project, sort_rows};

/// A single step of the transform pipeline.
///
/// Steps may mutate the working table and append to the ledger; they never
/// drop rows.
pub trait TransformStep: Send + Sync {
    /// Execute this step on the working table.
    fn execute(
        &self,
        table: &mut BomTable,
        config: &BomConfig,
        ledger: &mut IssueLedger,
    ) -> Result<(), TableError>;

    /// Human-readable name for this step (for logging/debugging).
    fn step_name(&self) -> &'static str;
}

struct RequiredColumnsStep;

impl TransformStep for RequiredColumnsStep {
    fn execute(
        &self,
        table: &mut BomTable,
        config: &BomConfig,
        ledger: &mut IssueLedger,
    ) -> Result<(), TableError> {
        check_required_columns(table, &config.required_columns, ledger);
        Ok(())
    }

    fn step_name(&self) -> &'static str {
        "required_columns"
    }
}

struct NormalizeFieldsStep;

impl TransformStep for NormalizeFieldsStep {
    fn execute(
        &self,
        table: &mut BomTable,
        _config: &BomConfig,
        ledger: &mut IssueLedger,
    ) -> Result<(), TableError> {
        normalize_fields(table, ledger);
        Ok(())
    }

    fn step_name(&self) -> &'static str {
        "normalize_fields"
    }
}

struct ClassifyStep;

impl TransformStep for ClassifyStep {
    fn execute(
        &self,
        table: &mut BomTable,
        config: &BomConfig,
        _ledger: &mut IssueLedger,
    ) -> Result<(), TableError> {
        add_category_columns(table, config)
    }

    fn step_name(&self) -> &'static str {
        "classify"
    }
}

struct ConsistencyStep;

impl TransformStep for ConsistencyStep {
    fn execute(
        &self,
        table: &mut BomTable,
        config: &BomConfig,
        ledger: &mut IssueLedger,
    ) -> Result<(), TableError> {
        run_consistency_checks(table, &config.options, ledger);
        Ok(())
    }

    fn step_name(&self) -> &'static str {
        "consistency"
    }
}

struct SortStep;

impl TransformStep for SortStep {
    fn execute(
        &self,
        table: &mut BomTable,
        config: &BomConfig,
        _ledger: &mut IssueLedger,
    ) -> Result<(), TableError> {
        sort_rows(table, &config.options.sort_by);
        Ok(())
    }

    fn step_name(&self) -> &'static str {
        "sort"
    }
}

struct DisplayColumnStep;

impl TransformStep for DisplayColumnStep {
    fn execute(
        &self,
        table: &mut BomTable,
        _config: &BomConfig,
        _ledger: &mut IssueLedger,
    ) -> Result<(), TableError> {
        add_display_column(table)
    }

    fn step_name(&self) -> &'static str {
        "display_column"
    }
}

/// An ordered pipeline of transform steps.
pub struct TransformPipeline {
    steps: Vec<Box<dyn TransformStep>>,
}

impl Default for TransformPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

impl TransformPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// The standard step order.
    pub fn standard() -> Self {
        Self::new()
            .add_step(Box::new(RequiredColumnsStep))
            .add_step(Box::new(NormalizeFieldsStep))
            .add_step(Box::new(ClassifyStep))
            .add_step(Box::new(ConsistencyStep))
            .add_step(Box::new(SortStep))
            .add_step(Box::new(DisplayColumnStep))
    }

    /// Add a step to the end of the pipeline.
    #[must_use]
    pub fn add_step(mut self, step: Box<dyn TransformStep>) -> Self {
        self.steps.push(step);
        self
    }

    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.step_name()).collect()
    }

    /// Execute all steps in order.
    pub fn execute(
        &self,
        table: &mut BomTable,
        config: &BomConfig,
        ledger: &mut IssueLedger,
    ) -> Result<(), TableError> {
        for step in &self.steps {
            let span = info_span!("step", name = step.step_name());
            let _guard = span.enter();
            step.execute(table, config, ledger)?;
            tracing::debug!(rows = table.len(), issues = ledger.len(), "step complete");
        }
        Ok(())
    }
}

/// Result of one transform run.
#[derive(Debug, Clone)]
pub struct TransformOutput {
    /// Sorted rows in output schema order.
    pub projected: ProjectedTable,
    /// Every finding, in detection order.
    pub ledger: IssueLedger,
    /// Number of rows read.
    pub input_rows: usize,
}

/// Run the standard pipeline and project the result.
///
/// Every input row is present in the output.
pub fn transform(mut table: BomTable, config: &BomConfig) -> Result<TransformOutput, TableError> {
    let input_rows = table.len();
    let mut ledger = IssueLedger::new();
    TransformPipeline::standard().execute(&mut table, config, &mut ledger)?;
    let projected = project(&table, &config.output_columns);
    tracing::info!(
        rows = projected.len(),
        issues = ledger.len(),
        "transform complete"
    );
    Ok(TransformOutput {
        projected,
        ledger,
        input_rows,
    })
}
