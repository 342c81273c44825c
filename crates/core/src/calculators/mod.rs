//! Calculators module - SIP, lumpsum, FD, RD and EMI.
//!
//! Pure functions over `Decimal`. Inputs are validated up front and results are
//! rounded to two decimals.

mod calculators_model;
mod calculators_validation;
mod deposit;
mod investment;
mod loan;

pub use calculators_model::{
    CalculatorKind, CalculatorResult, EmiInput, EmiResult, FdInput, LumpsumInput, RdInput,
    SipInput,
};
pub use deposit::{calculate_fd, calculate_rd};
pub use investment::{calculate_lumpsum, calculate_sip};
pub use loan::calculate_emi;
