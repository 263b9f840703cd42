use super::types::BudgetLines;

pub const SAFE_WITHDRAWAL_RATE: f64 = 0.04;

pub fn total_budget(lines: &BudgetLines) -> f64 {
    lines.housing
        + lines.healthcare
        + lines.food_living
        + lines.travel_leisure
        + lines.other_discretionary
}

/// Annual withdrawal the portfolio supports under the 4% rule.
pub fn safe_withdrawal(portfolio_balance: f64) -> f64 {
    SAFE_WITHDRAWAL_RATE * portfolio_balance
}

/// Total spending the household can sustain in retirement: the safe
/// withdrawal plus every recurring income stream, independent of what the
/// budget actually asks for.
pub fn sustainable_spending(
    portfolio_balance: f64,
    real_estate_cashflow: f64,
    benefit_income: f64,
) -> f64 {
    safe_withdrawal(portfolio_balance) + real_estate_cashflow + benefit_income
}
