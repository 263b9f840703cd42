use super::types::{CalculationMethod, MarketProfile, Phase};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnRegime {
    pub mean: f64,
    pub volatility: f64,
}

/// Rate table for the 30-year forecast; both phases share it.
pub fn primary_regime(profile: MarketProfile) -> ReturnRegime {
    match profile {
        MarketProfile::Conservative => ReturnRegime {
            mean: 0.05,
            volatility: 0.12,
        },
        MarketProfile::Moderate => ReturnRegime {
            mean: 0.07,
            volatility: 0.15,
        },
        MarketProfile::Aggressive => ReturnRegime {
            mean: 0.09,
            volatility: 0.18,
        },
    }
}

/// Rate table for the to-age-100 projection. Working and retirement phases
/// carry different means; this table is tracked separately from the 30-year
/// table and the two must not be merged.
pub fn extended_regime(profile: MarketProfile, phase: Phase) -> ReturnRegime {
    let mean = match (profile, phase) {
        (MarketProfile::Conservative, Phase::Working) => 0.06,
        (MarketProfile::Moderate, Phase::Working) => 0.075,
        (MarketProfile::Aggressive, Phase::Working) => 0.09,
        (MarketProfile::Conservative, Phase::Retirement) => 0.05,
        (MarketProfile::Moderate, Phase::Retirement) => 0.065,
        (MarketProfile::Aggressive, Phase::Retirement) => 0.08,
    };
    ReturnRegime {
        mean,
        volatility: primary_regime(profile).volatility,
    }
}

pub(crate) enum ReturnSampler {
    Deterministic,
    Seeded(Rng),
}

impl ReturnSampler {
    pub(crate) fn new(method: CalculationMethod, seed: u64) -> Self {
        match method {
            CalculationMethod::Deterministic => Self::Deterministic,
            CalculationMethod::Stochastic => Self::Seeded(Rng::new(seed)),
        }
    }

    /// One year's return: the regime mean, or in stochastic mode the mean
    /// plus a symmetric uniform perturbation of up to one volatility. The
    /// perturbation is deliberately uniform, not Gaussian.
    pub(crate) fn sample(&mut self, regime: ReturnRegime) -> f64 {
        match self {
            Self::Deterministic => regime.mean,
            Self::Seeded(rng) => regime.mean + (rng.next_f64() - 0.5) * 2.0 * regime.volatility,
        }
    }
}

pub(crate) fn derive_seed(base_seed: u64, stream: u32, trial: u32) -> u64 {
    let mixed = base_seed ^ ((stream as u64) << 32) ^ trial as u64;
    splitmix64(mixed)
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

pub(crate) struct Rng {
    state: u64,
}

impl Rng {
    pub(crate) fn new(seed: u64) -> Self {
        let state = if seed == 0 {
            0xA5A5_A5A5_A5A5_A5A5
        } else {
            seed
        };
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    pub(crate) fn next_f64(&mut self) -> f64 {
        const DENOM: f64 = (1_u64 << 53) as f64;
        let v = self.next_u64() >> 11;
        ((v as f64) + 0.5) / DENOM
    }
}
