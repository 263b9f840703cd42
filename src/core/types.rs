use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MaritalStatus {
    Single,
    Married,
    Couple,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MarketProfile {
    Conservative,
    Moderate,
    Aggressive,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CalculationMethod {
    Deterministic,
    Stochastic,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Phase {
    Working,
    Retirement,
}

#[derive(Debug, Clone, Copy)]
pub struct Person {
    pub birth_year: i32,
    pub annual_income: f64,
    pub years_worked: u32,
    pub claim_age: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct BudgetLines {
    pub housing: f64,
    pub healthcare: f64,
    pub food_living: f64,
    pub travel_leisure: f64,
    pub other_discretionary: f64,
}

#[derive(Debug, Clone)]
pub struct Inputs {
    pub current_year: i32,
    pub retirement_age: u32,
    pub liquid_assets: f64,
    pub annual_contribution: f64,
    pub real_estate_cashflow: f64,
    pub market_profile: MarketProfile,
    pub calculation_method: CalculationMethod,
    pub marital_status: MaritalStatus,
    pub primary: Person,
    pub spouse: Option<Person>,
    pub both_working: bool,
    pub budget: BudgetLines,
    pub max_fra_benefit: f64,
    pub trials: u32,
    pub seed: u64,
}

impl Inputs {
    pub fn current_age(&self) -> u32 {
        (self.current_year - self.primary.birth_year) as u32
    }

    pub fn years_to_retirement(&self) -> u32 {
        self.retirement_age - self.current_age()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastYear {
    pub year: i32,
    pub age: u32,
    pub period: Phase,
    pub starting_balance: f64,
    pub investment_gain: f64,
    pub contribution: f64,
    pub real_estate_cashflow: f64,
    pub benefit_income: f64,
    pub spending: f64,
    pub ending_balance: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub portfolio_at_retirement: f64,
    pub safe_annual_withdrawal: f64,
    pub total_annual_income: f64,
    pub annual_budget: f64,
    pub surplus_deficit: f64,
    pub sustainable_spending: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitValidation {
    pub primary_fra: f64,
    pub primary_claimed: f64,
    pub primary_capped: bool,
    pub spousal_fra: f64,
    pub spousal_claimed: f64,
    pub spousal_capped: bool,
    pub total_fra: f64,
    pub total_claimed: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResult {
    pub years_to_retirement: u32,
    pub summary: Summary,
    pub benefits: BenefitValidation,
    pub forecast: Vec<ForecastYear>,
    pub extended_forecast: Vec<ForecastYear>,
}
