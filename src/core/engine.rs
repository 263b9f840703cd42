//! Year-by-year household forecasting: a working-phase accumulation fold and a
//! retirement-phase drawdown fold, run over two horizons that share inputs but
//! use independent return regimes.

use super::benefit::{household_benefits, HouseholdBenefits};
use super::budget::{safe_withdrawal, sustainable_spending, total_budget};
use super::market::{derive_seed, extended_regime, primary_regime, ReturnRegime, ReturnSampler};
use super::types::{
    BenefitValidation, CalculationMethod, ForecastResult, ForecastYear, Inputs, Phase, Summary,
};

/// Retirement rows in the primary forecast, regardless of birth year.
pub const RETIREMENT_HORIZON_YEARS: u32 = 30;

/// Terminal attained age of the extended forecast.
pub const EXTENDED_TERMINAL_AGE: u32 = 100;

// Independent random streams, so the two forecasts and the projector trials
// never share a draw sequence.
const PRIMARY_STREAM: u32 = 0;
const EXTENDED_STREAM: u32 = 1;
const PROJECTION_STREAM: u32 = 2;

/// Runs both forecast horizons plus the summary projection for one validated
/// household. Pure: same inputs, same output, every time.
pub fn run_forecast(inputs: &Inputs) -> ForecastResult {
    let benefits = household_benefits(inputs);
    let profile = inputs.market_profile;

    let forecast = forecast_rows(
        inputs,
        &benefits,
        inputs.current_age()..inputs.retirement_age + RETIREMENT_HORIZON_YEARS,
        ReturnSampler::new(
            inputs.calculation_method,
            derive_seed(inputs.seed, PRIMARY_STREAM, 0),
        ),
        move |_| primary_regime(profile),
    );
    let extended_forecast = forecast_rows(
        inputs,
        &benefits,
        inputs.current_age()..=EXTENDED_TERMINAL_AGE,
        ReturnSampler::new(
            inputs.calculation_method,
            derive_seed(inputs.seed, EXTENDED_STREAM, 0),
        ),
        move |phase| extended_regime(profile, phase),
    );

    let portfolio_at_retirement = project_working_balance(inputs);
    let annual_budget = total_budget(&inputs.budget);
    let benefit_income = benefits.total_claimed();
    let safe_annual_withdrawal = safe_withdrawal(portfolio_at_retirement);
    let total_annual_income = safe_annual_withdrawal + inputs.real_estate_cashflow + benefit_income;

    ForecastResult {
        years_to_retirement: inputs.years_to_retirement(),
        summary: Summary {
            portfolio_at_retirement,
            safe_annual_withdrawal,
            total_annual_income,
            annual_budget,
            surplus_deficit: total_annual_income - annual_budget,
            sustainable_spending: sustainable_spending(
                portfolio_at_retirement,
                inputs.real_estate_cashflow,
                benefit_income,
            ),
        },
        benefits: benefit_validation(&benefits),
        forecast,
        extended_forecast,
    }
}

/// Portfolio balance entering retirement. Deterministic mode folds the mean
/// return over the working years; stochastic mode averages the ending balances
/// of independently seeded trials.
pub fn project_working_balance(inputs: &Inputs) -> f64 {
    match inputs.calculation_method {
        CalculationMethod::Deterministic => working_trial(
            inputs,
            ReturnSampler::new(CalculationMethod::Deterministic, 0),
        ),
        CalculationMethod::Stochastic => {
            let trials = inputs.trials.max(1);
            let total: f64 = (0..trials)
                .map(|trial| {
                    let seed = derive_seed(inputs.seed, PROJECTION_STREAM, trial);
                    working_trial(
                        inputs,
                        ReturnSampler::new(CalculationMethod::Stochastic, seed),
                    )
                })
                .sum();
            total / trials as f64
        }
    }
}

// Accumulation fold for one trial. The arithmetic mirrors working_year so the
// deterministic projection lands on the same bits as the forecast balance.
fn working_trial(inputs: &Inputs, mut sampler: ReturnSampler) -> f64 {
    let regime = primary_regime(inputs.market_profile);
    let mut balance = inputs.liquid_assets;
    for _ in 0..inputs.years_to_retirement() {
        let gain = balance * sampler.sample(regime);
        balance = balance + gain + inputs.annual_contribution;
    }
    balance
}

fn forecast_rows(
    inputs: &Inputs,
    benefits: &HouseholdBenefits,
    ages: impl Iterator<Item = u32>,
    mut sampler: ReturnSampler,
    regime_for: impl Fn(Phase) -> ReturnRegime,
) -> Vec<ForecastYear> {
    let current_age = inputs.current_age();
    let annual_budget = total_budget(&inputs.budget);
    let mut rows = Vec::new();
    let mut balance = inputs.liquid_assets;
    for age in ages {
        let year = inputs.current_year + (age - current_age) as i32;
        let phase = if age < inputs.retirement_age {
            Phase::Working
        } else {
            Phase::Retirement
        };
        let rate = sampler.sample(regime_for(phase));
        let row = match phase {
            Phase::Working => working_year(year, age, balance, rate, inputs.annual_contribution),
            Phase::Retirement => retirement_year(
                year,
                age,
                balance,
                rate,
                inputs.real_estate_cashflow,
                benefit_income_at(age, benefits),
                annual_budget,
            ),
        };
        balance = row.ending_balance;
        rows.push(row);
    }
    rows
}

fn working_year(year: i32, age: u32, starting: f64, rate: f64, contribution: f64) -> ForecastYear {
    let gain = starting * rate;
    ForecastYear {
        year,
        age,
        period: Phase::Working,
        starting_balance: starting,
        investment_gain: gain,
        contribution,
        real_estate_cashflow: 0.0,
        benefit_income: 0.0,
        spending: 0.0,
        ending_balance: starting + gain + contribution,
    }
}

fn retirement_year(
    year: i32,
    age: u32,
    starting: f64,
    rate: f64,
    real_estate_cashflow: f64,
    benefit_income: f64,
    spending: f64,
) -> ForecastYear {
    let gain = starting * rate;
    ForecastYear {
        year,
        age,
        period: Phase::Retirement,
        starting_balance: starting,
        investment_gain: gain,
        contribution: 0.0,
        real_estate_cashflow,
        benefit_income,
        spending,
        ending_balance: starting + gain + real_estate_cashflow + benefit_income - spending,
    }
}

// Each household member's claim age is compared separately against the row's
// attained age.
fn benefit_income_at(age: u32, benefits: &HouseholdBenefits) -> f64 {
    let mut income = 0.0;
    if age >= benefits.primary.claim_age {
        income += benefits.primary.claimed_amount;
    }
    if let Some(spousal) = benefits.spousal {
        if age >= spousal.claim_age {
            income += spousal.claimed_amount;
        }
    }
    income
}

fn benefit_validation(benefits: &HouseholdBenefits) -> BenefitValidation {
    BenefitValidation {
        primary_fra: benefits.primary.fra_amount,
        primary_claimed: benefits.primary.claimed_amount,
        primary_capped: benefits.primary.capped,
        spousal_fra: benefits.spousal.map_or(0.0, |s| s.fra_amount),
        spousal_claimed: benefits.spousal.map_or(0.0, |s| s.claimed_amount),
        spousal_capped: benefits.spousal.map_or(false, |s| s.capped),
        total_fra: benefits.total_fra(),
        total_claimed: benefits.total_claimed(),
    }
}
