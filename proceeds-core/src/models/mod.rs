mod calculation_result;
mod closing_costs;
mod cost_field;
mod cost_inputs;

pub use calculation_result::{BreakdownCategory, BreakdownSlice, CalculationResult};
pub use closing_costs::{ClosingCosts, ClosingCostsMode};
pub use cost_field::{CostField, InputKind, UnknownFieldError};
pub use cost_inputs::{CostInputs, RawCostInputs};
