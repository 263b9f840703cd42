mod benefit;
mod budget;
mod engine;
mod market;
mod types;

pub use benefit::{
    claim_adjustment, claimed_benefit, fra_benefit, household_benefits, spousal_benefit,
    BenefitAward, HouseholdBenefits, DEFAULT_MAX_FRA_BENEFIT, FULL_RETIREMENT_AGE,
};
pub use budget::{safe_withdrawal, sustainable_spending, total_budget, SAFE_WITHDRAWAL_RATE};
pub use engine::{
    project_working_balance, run_forecast, EXTENDED_TERMINAL_AGE, RETIREMENT_HORIZON_YEARS,
};
pub use market::{extended_regime, primary_regime, ReturnRegime};
pub use types::{
    BenefitValidation, BudgetLines, CalculationMethod, ForecastResult, ForecastYear, Inputs,
    MaritalStatus, MarketProfile, Person, Phase, Summary,
};
