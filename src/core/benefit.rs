use super::types::{Inputs, MaritalStatus, Person};

pub const FULL_RETIREMENT_AGE: u32 = 67;
pub const DEFAULT_MAX_FRA_BENEFIT: f64 = 45_864.0;

/// Benefit awarded at full retirement age: 40% of annual income, scaled by a
/// 35-year career factor, capped at the statutory maximum, in whole dollars.
pub fn fra_benefit(person: &Person, max_fra_benefit: f64) -> f64 {
    unadjusted_fra(person).min(max_fra_benefit).round()
}

fn unadjusted_fra(person: &Person) -> f64 {
    let career_factor = (person.years_worked as f64 / 35.0).min(1.0);
    0.4 * person.annual_income * career_factor
}

/// Claim-age factor: 0.70 at 62, 1.00 at 67, 1.32 at 70, and the early-claim
/// ramp `0.70 + 0.32 * (age - 62) / 8` strictly between the anchors.
pub fn claim_adjustment(claim_age: u32) -> f64 {
    match claim_age {
        62 => 0.70,
        67 => 1.00,
        70 => 1.32,
        age => 0.70 + 0.32 * ((age - 62) as f64) / 8.0,
    }
}

pub fn claimed_benefit(fra_amount: f64, claim_age: u32) -> f64 {
    (fra_amount * claim_adjustment(claim_age)).round()
}

/// Dependent-spouse benefit: half the worker's FRA amount, reduced 3% of the
/// base for each year the dependent's current age is under FRA, floored at
/// zero. The dependent gets no delayed-claim increase.
pub fn spousal_benefit(primary_fra_amount: f64, dependent_age: u32) -> f64 {
    let base = 0.5 * primary_fra_amount;
    let years_short = (FULL_RETIREMENT_AGE as f64 - dependent_age as f64).max(0.0);
    (base * (1.0 - 0.03 * years_short)).max(0.0).round()
}

#[derive(Debug, Clone, Copy)]
pub struct BenefitAward {
    pub fra_amount: f64,
    pub claimed_amount: f64,
    pub claim_age: u32,
    pub capped: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct HouseholdBenefits {
    pub primary: BenefitAward,
    pub spousal: Option<BenefitAward>,
}

impl HouseholdBenefits {
    pub fn total_fra(&self) -> f64 {
        self.primary.fra_amount + self.spousal.map_or(0.0, |s| s.fra_amount)
    }

    pub fn total_claimed(&self) -> f64 {
        self.primary.claimed_amount + self.spousal.map_or(0.0, |s| s.claimed_amount)
    }
}

// Selected once from household composition; every later benefit question is a
// match on this rather than a re-check of the marital/both-working flags.
#[derive(Debug, Clone, Copy)]
enum Entitlement {
    Independent(Person),
    Dependent {
        primary_fra_amount: f64,
        current_age: u32,
        claim_age: u32,
    },
}

pub fn household_benefits(inputs: &Inputs) -> HouseholdBenefits {
    HouseholdBenefits {
        primary: independent_award(&inputs.primary, inputs.max_fra_benefit),
        spousal: spouse_entitlement(inputs).map(|e| entitlement_award(e, inputs.max_fra_benefit)),
    }
}

fn spouse_entitlement(inputs: &Inputs) -> Option<Entitlement> {
    if inputs.marital_status == MaritalStatus::Single {
        return None;
    }
    let spouse = inputs.spouse?;
    Some(if inputs.both_working {
        Entitlement::Independent(spouse)
    } else {
        Entitlement::Dependent {
            primary_fra_amount: fra_benefit(&inputs.primary, inputs.max_fra_benefit),
            current_age: (inputs.current_year - spouse.birth_year) as u32,
            claim_age: spouse.claim_age,
        }
    })
}

fn independent_award(person: &Person, max_fra_benefit: f64) -> BenefitAward {
    let fra_amount = fra_benefit(person, max_fra_benefit);
    BenefitAward {
        fra_amount,
        claimed_amount: claimed_benefit(fra_amount, person.claim_age),
        claim_age: person.claim_age,
        capped: unadjusted_fra(person) > max_fra_benefit,
    }
}

fn entitlement_award(entitlement: Entitlement, max_fra_benefit: f64) -> BenefitAward {
    match entitlement {
        Entitlement::Independent(person) => independent_award(&person, max_fra_benefit),
        Entitlement::Dependent {
            primary_fra_amount,
            current_age,
            claim_age,
        } => BenefitAward {
            fra_amount: (0.5 * primary_fra_amount).round(),
            claimed_amount: spousal_benefit(primary_fra_amount, current_age),
            claim_age,
            capped: primary_fra_amount >= max_fra_benefit,
        },
    }
}
