//! Local healthcare premium estimator. Prices marketplace-style plan tiers
//! from a fixed rate table; the forecast only ever consumes the single
//! estimated annual cost figure.

use serde::Serialize;

/// Annual healthcare figure used when neither an explicit budget line nor a
/// state code is supplied.
pub const DEFAULT_ANNUAL_COST_PER_PERSON: f64 = 12_000.0;

/// Single-person federal poverty level, the subsidy eligibility threshold.
pub const DEFAULT_FPL_SINGLE: f64 = 14_580.0;

const MAX_OUT_OF_POCKET: f64 = 9_100.0;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum PlanTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl PlanTier {
    const ALL: [PlanTier; 4] = [
        PlanTier::Bronze,
        PlanTier::Silver,
        PlanTier::Gold,
        PlanTier::Platinum,
    ];

    // Monthly base premium, linear in years past age 50.
    fn monthly_base(self, age: u32) -> f64 {
        let past_fifty = age as f64 - 50.0;
        match self {
            PlanTier::Bronze => 350.0 + past_fifty * 15.0,
            PlanTier::Silver => 450.0 + past_fifty * 20.0,
            PlanTier::Gold => 550.0 + past_fifty * 25.0,
            PlanTier::Platinum => 700.0 + past_fifty * 30.0,
        }
    }

    fn deductible(self) -> f64 {
        match self {
            PlanTier::Bronze => 7_000.0,
            PlanTier::Silver => 5_000.0,
            PlanTier::Gold => 2_000.0,
            PlanTier::Platinum => 0.0,
        }
    }
}

#[derive(Copy, Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanQuote {
    pub tier: PlanTier,
    pub monthly_premium: f64,
    pub annual_premium: f64,
    pub deductible: f64,
    pub max_out_of_pocket: f64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthcareEstimate {
    pub quotes: Vec<PlanQuote>,
    pub subsidy_eligible: bool,
    pub subsidy_percentage: f64,
    pub recommended_tier: PlanTier,
    pub estimated_annual_cost: f64,
}

/// Prices all four tiers for one person. Adjustments apply in a fixed order:
/// base premium, then the Silver-only subsidy, then tobacco, then the state
/// multiplier.
pub fn estimate_premiums(
    age: u32,
    annual_income: f64,
    state: &str,
    tobacco_use: bool,
    fpl_single: f64,
) -> HealthcareEstimate {
    let subsidy_ceiling = 4.0 * fpl_single;
    let subsidy_eligible = annual_income <= subsidy_ceiling;
    let subsidy_percentage = if subsidy_eligible {
        (subsidy_ceiling - annual_income) / subsidy_ceiling
    } else {
        0.0
    };
    let state_factor = state_multiplier(state);

    let quote_for = |tier: PlanTier| {
        let mut monthly = tier.monthly_base(age);
        if tier == PlanTier::Silver && subsidy_eligible {
            monthly *= 1.0 - subsidy_percentage * 0.8;
        }
        if tobacco_use {
            monthly *= 1.5;
        }
        monthly *= state_factor;
        PlanQuote {
            tier,
            monthly_premium: monthly,
            annual_premium: monthly * 12.0,
            deductible: tier.deductible(),
            max_out_of_pocket: MAX_OUT_OF_POCKET,
        }
    };

    let recommended_tier = if subsidy_eligible {
        PlanTier::Silver
    } else {
        PlanTier::Bronze
    };
    let recommended = quote_for(recommended_tier);

    HealthcareEstimate {
        quotes: PlanTier::ALL.map(quote_for).to_vec(),
        subsidy_eligible,
        subsidy_percentage,
        recommended_tier,
        estimated_annual_cost: recommended.annual_premium + recommended.deductible,
    }
}

/// Sum of per-person estimated annual costs for a household. The spouse entry
/// is (age, income) at the primary's retirement.
pub fn household_annual_cost(
    primary_age: u32,
    primary_income: f64,
    spouse: Option<(u32, f64)>,
    state: &str,
    tobacco_use: bool,
    fpl_single: f64,
) -> f64 {
    let primary =
        estimate_premiums(primary_age, primary_income, state, tobacco_use, fpl_single);
    let spouse_cost = spouse.map_or(0.0, |(age, income)| {
        estimate_premiums(age, income, state, tobacco_use, fpl_single).estimated_annual_cost
    });
    primary.estimated_annual_cost + spouse_cost
}

fn state_multiplier(state: &str) -> f64 {
    match state.trim().to_ascii_uppercase().as_str() {
        "CA" => 1.1,
        "NY" => 1.15,
        "TX" => 0.9,
        "FL" => 0.95,
        "IL" => 1.05,
        "PA" => 1.0,
        "OH" => 0.9,
        "GA" => 0.85,
        "NC" => 0.9,
        "MI" => 0.95,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn quote(estimate: &HealthcareEstimate, tier: PlanTier) -> PlanQuote {
        *estimate
            .quotes
            .iter()
            .find(|q| q.tier == tier)
            .expect("all four tiers quoted")
    }

    #[test]
    fn base_premiums_at_fifty_match_the_rate_table() {
        // High income, neutral state, no tobacco: raw table values
        let estimate = estimate_premiums(50, 200_000.0, "PA", false, DEFAULT_FPL_SINGLE);
        assert_approx(quote(&estimate, PlanTier::Bronze).monthly_premium, 350.0);
        assert_approx(quote(&estimate, PlanTier::Silver).monthly_premium, 450.0);
        assert_approx(quote(&estimate, PlanTier::Gold).monthly_premium, 550.0);
        assert_approx(quote(&estimate, PlanTier::Platinum).monthly_premium, 700.0);
    }

    #[test]
    fn premiums_climb_per_year_past_fifty() {
        // Bronze at 65: 350 + 15 * 15 = 575/month, 6,900/year
        let estimate = estimate_premiums(65, 200_000.0, "PA", false, DEFAULT_FPL_SINGLE);
        let bronze = quote(&estimate, PlanTier::Bronze);
        assert_approx(bronze.monthly_premium, 575.0);
        assert_approx(bronze.annual_premium, 6_900.0);
    }

    #[test]
    fn subsidy_discounts_silver_only() {
        // Income at 2x FPL: pct = 0.5, Silver factor 1 - 0.5 * 0.8 = 0.6.
        // Silver at 60 is 650 base -> 390; Bronze stays at 500.
        let income = 2.0 * DEFAULT_FPL_SINGLE;
        let estimate = estimate_premiums(60, income, "PA", false, DEFAULT_FPL_SINGLE);
        assert!(estimate.subsidy_eligible);
        assert_approx(estimate.subsidy_percentage, 0.5);
        assert_approx(quote(&estimate, PlanTier::Silver).monthly_premium, 390.0);
        assert_approx(quote(&estimate, PlanTier::Bronze).monthly_premium, 500.0);
    }

    #[test]
    fn income_above_four_times_fpl_gets_no_subsidy() {
        let income = 4.0 * DEFAULT_FPL_SINGLE + 1.0;
        let estimate = estimate_premiums(60, income, "PA", false, DEFAULT_FPL_SINGLE);
        assert!(!estimate.subsidy_eligible);
        assert_approx(estimate.subsidy_percentage, 0.0);
        assert_approx(quote(&estimate, PlanTier::Silver).monthly_premium, 650.0);
    }

    #[test]
    fn tobacco_use_multiplies_every_tier() {
        let plain = estimate_premiums(55, 200_000.0, "PA", false, DEFAULT_FPL_SINGLE);
        let tobacco = estimate_premiums(55, 200_000.0, "PA", true, DEFAULT_FPL_SINGLE);
        for tier in PlanTier::ALL {
            assert_approx(
                quote(&tobacco, tier).monthly_premium,
                quote(&plain, tier).monthly_premium * 1.5,
            );
        }
    }

    #[test]
    fn state_multiplier_scales_the_final_premium() {
        // Bronze at 65 is 575 base; CA adds 10%
        let estimate = estimate_premiums(65, 200_000.0, "CA", false, DEFAULT_FPL_SINGLE);
        assert_approx(quote(&estimate, PlanTier::Bronze).monthly_premium, 632.5);
    }

    #[test]
    fn unknown_states_price_at_the_national_rate() {
        let known = estimate_premiums(60, 200_000.0, "PA", false, DEFAULT_FPL_SINGLE);
        let unknown = estimate_premiums(60, 200_000.0, "ZZ", false, DEFAULT_FPL_SINGLE);
        assert_approx(
            quote(&unknown, PlanTier::Gold).monthly_premium,
            quote(&known, PlanTier::Gold).monthly_premium,
        );
    }

    #[test]
    fn state_codes_are_case_insensitive() {
        let upper = estimate_premiums(60, 200_000.0, "NY", false, DEFAULT_FPL_SINGLE);
        let lower = estimate_premiums(60, 200_000.0, " ny ", false, DEFAULT_FPL_SINGLE);
        assert_approx(
            quote(&lower, PlanTier::Bronze).monthly_premium,
            quote(&upper, PlanTier::Bronze).monthly_premium,
        );
    }

    #[test]
    fn adjustments_stack_in_order() {
        // Silver at 60 with a 50% subsidy, tobacco, and CA pricing:
        // 650 * 0.6 * 1.5 * 1.1 = 643.5
        let income = 2.0 * DEFAULT_FPL_SINGLE;
        let estimate = estimate_premiums(60, income, "CA", true, DEFAULT_FPL_SINGLE);
        assert_approx(quote(&estimate, PlanTier::Silver).monthly_premium, 643.5);
    }

    #[test]
    fn recommendation_follows_subsidy_eligibility() {
        let subsidized = estimate_premiums(60, DEFAULT_FPL_SINGLE, "PA", false, DEFAULT_FPL_SINGLE);
        assert_eq!(subsidized.recommended_tier, PlanTier::Silver);

        let unsubsidized = estimate_premiums(60, 200_000.0, "PA", false, DEFAULT_FPL_SINGLE);
        assert_eq!(unsubsidized.recommended_tier, PlanTier::Bronze);
    }

    #[test]
    fn estimated_cost_is_premium_plus_deductible() {
        // Unsubsidized at 60: Bronze 500/month -> 6,000 + 7,000 deductible
        let estimate = estimate_premiums(60, 200_000.0, "PA", false, DEFAULT_FPL_SINGLE);
        assert_approx(estimate.estimated_annual_cost, 13_000.0);
    }

    #[test]
    fn quotes_carry_deductibles_and_the_shared_oop_limit() {
        let estimate = estimate_premiums(60, 200_000.0, "PA", false, DEFAULT_FPL_SINGLE);
        assert_eq!(estimate.quotes.len(), 4);
        assert_approx(quote(&estimate, PlanTier::Bronze).deductible, 7_000.0);
        assert_approx(quote(&estimate, PlanTier::Silver).deductible, 5_000.0);
        assert_approx(quote(&estimate, PlanTier::Gold).deductible, 2_000.0);
        assert_approx(quote(&estimate, PlanTier::Platinum).deductible, 0.0);
        for q in &estimate.quotes {
            assert_approx(q.max_out_of_pocket, 9_100.0);
        }
    }

    #[test]
    fn household_cost_sums_both_people() {
        let primary = estimate_premiums(65, 200_000.0, "TX", false, DEFAULT_FPL_SINGLE);
        let spouse = estimate_premiums(63, 200_000.0, "TX", false, DEFAULT_FPL_SINGLE);
        let combined = household_annual_cost(
            65,
            200_000.0,
            Some((63, 200_000.0)),
            "TX",
            false,
            DEFAULT_FPL_SINGLE,
        );
        assert_approx(
            combined,
            primary.estimated_annual_cost + spouse.estimated_annual_cost,
        );
    }
}
