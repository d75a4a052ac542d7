//! Calculator state for the estimator front end.
//!
//! Holds the one input record being edited, its closing cost mode and the
//! result derived from both. Every mutation recomputes the result in full.

use proceeds_core::{
    AuditSheet, CalculationResult, ClosingCostsMode, CostField, CostInputs, SaleRatios, compute,
};
use rust_decimal::Decimal;
use tracing::debug;

/// The record being edited and its current result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorState {
    initial: (CostInputs, ClosingCostsMode),
    inputs: CostInputs,
    mode: ClosingCostsMode,
    result: CalculationResult,
}

impl CalculatorState {
    /// Create a state starting from `inputs` under `mode`. [`reset`](Self::reset)
    /// returns to this snapshot.
    pub fn new(
        inputs: CostInputs,
        mode: ClosingCostsMode,
    ) -> Self {
        let result = compute(&inputs, mode);
        Self {
            initial: (inputs.clone(), mode),
            inputs,
            mode,
            result,
        }
    }

    pub fn inputs(&self) -> &CostInputs {
        &self.inputs
    }

    pub fn mode(&self) -> ClosingCostsMode {
        self.mode
    }

    pub fn result(&self) -> &CalculationResult {
        &self.result
    }

    /// Replace one field and recompute.
    pub fn set_field(
        &mut self,
        field: CostField,
        value: Decimal,
    ) -> &CalculationResult {
        debug!(%field, %value, "field updated");
        field.set(&mut self.inputs, value);
        self.recompute()
    }

    /// Switch how the closing cost field is read and recompute. The field
    /// value itself is kept as entered.
    pub fn set_mode(
        &mut self,
        mode: ClosingCostsMode,
    ) -> &CalculationResult {
        debug!(%mode, "closing costs mode changed");
        self.mode = mode;
        self.recompute()
    }

    /// Return to the starting snapshot.
    pub fn reset(&mut self) -> &CalculationResult {
        let (inputs, mode) = self.initial.clone();
        self.inputs = inputs;
        self.mode = mode;
        self.recompute()
    }

    pub fn ratios(&self) -> SaleRatios {
        SaleRatios::new(&self.inputs, &self.result)
    }

    pub fn audit(&self) -> AuditSheet {
        AuditSheet::from_result(&self.inputs, self.mode, &self.result)
    }

    fn recompute(&mut self) -> &CalculationResult {
        self.result = compute(&self.inputs, self.mode);
        &self.result
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(CostInputs::startup_defaults(), ClosingCostsMode::default())
    }
}
