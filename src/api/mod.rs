use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use chrono::Datelike;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::core::{
    BenefitValidation, BudgetLines, CalculationMethod, ForecastResult, ForecastYear, Inputs,
    MaritalStatus, MarketProfile, Person, Summary, FULL_RETIREMENT_AGE, run_forecast, total_budget,
};

mod error;
pub mod healthcare;

pub use error::ApiError;

use healthcare::HealthcareEstimate;

const INDEX_HTML: &str = include_str!("../../web/index.html");
const STYLES_CSS: &str = include_str!("../../web/styles.css");
const APP_JS: &str = include_str!("../../web/app.js");

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliMaritalStatus {
    Single,
    Married,
    Couple,
}

impl From<CliMaritalStatus> for MaritalStatus {
    fn from(value: CliMaritalStatus) -> Self {
        match value {
            CliMaritalStatus::Single => MaritalStatus::Single,
            CliMaritalStatus::Married => MaritalStatus::Married,
            CliMaritalStatus::Couple => MaritalStatus::Couple,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliMarketProfile {
    Conservative,
    Moderate,
    Aggressive,
}

impl From<CliMarketProfile> for MarketProfile {
    fn from(value: CliMarketProfile) -> Self {
        match value {
            CliMarketProfile::Conservative => MarketProfile::Conservative,
            CliMarketProfile::Moderate => MarketProfile::Moderate,
            CliMarketProfile::Aggressive => MarketProfile::Aggressive,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliCalculationMethod {
    Deterministic,
    Stochastic,
}

impl From<CliCalculationMethod> for CalculationMethod {
    fn from(value: CliCalculationMethod) -> Self {
        match value {
            CliCalculationMethod::Deterministic => CalculationMethod::Deterministic,
            CliCalculationMethod::Stochastic => CalculationMethod::Stochastic,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiMaritalStatus {
    #[serde(alias = "Single")]
    Single,
    #[serde(alias = "Married")]
    Married,
    #[serde(alias = "Couple", alias = "unmarried-couple", alias = "unmarriedCouple")]
    Couple,
}

impl From<ApiMaritalStatus> for CliMaritalStatus {
    fn from(value: ApiMaritalStatus) -> Self {
        match value {
            ApiMaritalStatus::Single => CliMaritalStatus::Single,
            ApiMaritalStatus::Married => CliMaritalStatus::Married,
            ApiMaritalStatus::Couple => CliMaritalStatus::Couple,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
enum ApiMarketProfile {
    #[serde(alias = "Conservative")]
    Conservative,
    #[serde(alias = "Moderate")]
    Moderate,
    #[serde(alias = "Aggressive")]
    Aggressive,
}

impl From<ApiMarketProfile> for CliMarketProfile {
    fn from(value: ApiMarketProfile) -> Self {
        match value {
            ApiMarketProfile::Conservative => CliMarketProfile::Conservative,
            ApiMarketProfile::Moderate => CliMarketProfile::Moderate,
            ApiMarketProfile::Aggressive => CliMarketProfile::Aggressive,
        }
    }
}

impl From<MarketProfile> for ApiMarketProfile {
    fn from(value: MarketProfile) -> Self {
        match value {
            MarketProfile::Conservative => ApiMarketProfile::Conservative,
            MarketProfile::Moderate => ApiMarketProfile::Moderate,
            MarketProfile::Aggressive => ApiMarketProfile::Aggressive,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
enum ApiCalculationMethod {
    #[serde(alias = "Deterministic")]
    Deterministic,
    #[serde(alias = "Stochastic", alias = "monte-carlo", alias = "monteCarlo")]
    Stochastic,
}

impl From<ApiCalculationMethod> for CliCalculationMethod {
    fn from(value: ApiCalculationMethod) -> Self {
        match value {
            ApiCalculationMethod::Deterministic => CliCalculationMethod::Deterministic,
            ApiCalculationMethod::Stochastic => CliCalculationMethod::Stochastic,
        }
    }
}

impl From<CalculationMethod> for ApiCalculationMethod {
    fn from(value: CalculationMethod) -> Self {
        match value {
            CalculationMethod::Deterministic => ApiCalculationMethod::Deterministic,
            CalculationMethod::Stochastic => ApiCalculationMethod::Stochastic,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ForecastPayload {
    birth_year: Option<i32>,
    retirement_age: Option<u32>,
    annual_income: Option<f64>,
    years_worked: Option<u32>,
    claim_age: Option<u32>,
    liquid_assets: Option<f64>,
    annual_contribution: Option<f64>,
    real_estate_cashflow: Option<f64>,

    marital_status: Option<ApiMaritalStatus>,
    both_working: Option<bool>,
    spouse_birth_year: Option<i32>,
    spouse_annual_income: Option<f64>,
    spouse_years_worked: Option<u32>,
    spouse_claim_age: Option<u32>,

    market_profile: Option<ApiMarketProfile>,
    calculation_method: Option<ApiCalculationMethod>,
    trials: Option<u32>,
    seed: Option<u64>,
    current_year: Option<i32>,
    max_fra_benefit: Option<f64>,

    housing: Option<f64>,
    healthcare: Option<f64>,
    food_living: Option<f64>,
    travel_leisure: Option<f64>,
    other_discretionary: Option<f64>,

    state: Option<String>,
    zip_code: Option<String>,
    tobacco_use: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct EstimatePayload {
    age: Option<u32>,
    income: Option<f64>,
    state: Option<String>,
    zip_code: Option<String>,
    tobacco_use: Option<bool>,
}

#[derive(Parser, Debug)]
#[command(
    name = "nestegg",
    about = "Household retirement forecaster (portfolio growth + government benefits + budget sustainability)"
)]
struct Cli {
    #[arg(long, default_value_t = 1975)]
    birth_year: i32,
    #[arg(long, default_value_t = 65)]
    retirement_age: u32,
    #[arg(long, default_value_t = 100_000.0)]
    annual_income: f64,
    #[arg(long, default_value_t = 30)]
    years_worked: u32,
    #[arg(long, default_value_t = 67, help = "Age benefits are first drawn, 62-70")]
    claim_age: u32,
    #[arg(long, default_value_t = 500_000.0)]
    liquid_assets: f64,
    #[arg(long, default_value_t = 25_000.0)]
    annual_contribution: f64,
    #[arg(
        long,
        default_value_t = 0.0,
        help = "Net annual real-estate income during retirement"
    )]
    real_estate_cashflow: f64,

    #[arg(long, value_enum, default_value_t = CliMaritalStatus::Single)]
    marital_status: CliMaritalStatus,
    #[arg(long, help = "Both spouses earn benefits from their own work records")]
    both_working: bool,
    #[arg(long)]
    spouse_birth_year: Option<i32>,
    #[arg(long)]
    spouse_annual_income: Option<f64>,
    #[arg(long)]
    spouse_years_worked: Option<u32>,
    #[arg(long, help = "Defaults to 67 for a dependent spouse")]
    spouse_claim_age: Option<u32>,

    #[arg(long, value_enum, default_value_t = CliMarketProfile::Moderate)]
    market_profile: CliMarketProfile,
    #[arg(long, value_enum, default_value_t = CliCalculationMethod::Deterministic)]
    calculation_method: CliCalculationMethod,
    #[arg(
        long,
        default_value_t = 1_000,
        help = "Stochastic trials averaged into the retirement balance"
    )]
    trials: u32,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, help = "Calendar year anchoring ages; defaults to the wall clock")]
    current_year: Option<i32>,
    #[arg(
        long,
        default_value_t = 45_864.0,
        help = "Statutory annual benefit cap at full retirement age"
    )]
    max_fra_benefit: f64,
    #[arg(
        long,
        default_value_t = 14_580.0,
        help = "Single-person federal poverty level for subsidy estimates"
    )]
    fpl_single: f64,

    #[arg(long, default_value_t = 24_000.0)]
    housing: f64,
    #[arg(
        long,
        help = "Annual healthcare budget; estimated from --state or defaulted when omitted"
    )]
    healthcare: Option<f64>,
    #[arg(long, default_value_t = 12_000.0)]
    food_living: f64,
    #[arg(long, default_value_t = 8_000.0)]
    travel_leisure: f64,
    #[arg(long, default_value_t = 6_000.0)]
    other_discretionary: f64,

    #[arg(long, help = "Two-letter state code for healthcare premium estimates")]
    state: Option<String>,
    #[arg(long)]
    zip_code: Option<String>,
    #[arg(long)]
    tobacco_use: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BudgetBreakdown {
    housing: f64,
    healthcare: f64,
    food_living: f64,
    travel_leisure: f64,
    other_discretionary: f64,
    total: f64,
}

impl BudgetBreakdown {
    fn from_lines(lines: &BudgetLines) -> Self {
        BudgetBreakdown {
            housing: lines.housing,
            healthcare: lines.healthcare,
            food_living: lines.food_living,
            travel_leisure: lines.travel_leisure,
            other_discretionary: lines.other_discretionary,
            total: total_budget(lines),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ForecastResponse {
    calculation_method: ApiCalculationMethod,
    market_profile: ApiMarketProfile,
    years_to_retirement: u32,
    summary: Summary,
    benefits: BenefitValidation,
    budget: BudgetBreakdown,
    forecast: Vec<ForecastYear>,
    extended_forecast: Vec<ForecastYear>,
}

fn build_inputs(cli: Cli) -> Result<Inputs, ApiError> {
    let current_year = cli.current_year.unwrap_or_else(default_current_year);

    if cli.birth_year < current_year - 100 || cli.birth_year > current_year {
        return Err(ApiError::invalid_input(
            "--birth-year",
            format!("must be between {} and {current_year}", current_year - 100),
        ));
    }
    let current_age = (current_year - cli.birth_year) as u32;

    if cli.retirement_age < current_age || cli.retirement_age > 120 {
        return Err(ApiError::invalid_input(
            "--retirement-age",
            format!("must be between the current age ({current_age}) and 120"),
        ));
    }

    for (flag, value) in [
        ("--annual-income", cli.annual_income),
        ("--liquid-assets", cli.liquid_assets),
        ("--annual-contribution", cli.annual_contribution),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ApiError::invalid_input(flag, "must be a finite value >= 0"));
        }
    }

    if !cli.real_estate_cashflow.is_finite() {
        return Err(ApiError::invalid_input(
            "--real-estate-cashflow",
            "must be a finite value",
        ));
    }

    if cli.years_worked > 50 {
        return Err(ApiError::invalid_input(
            "--years-worked",
            "must be between 0 and 50",
        ));
    }

    if !(62..=70).contains(&cli.claim_age) {
        return Err(ApiError::invalid_input(
            "--claim-age",
            "must be between 62 and 70",
        ));
    }

    if !(1..=100_000).contains(&cli.trials) {
        return Err(ApiError::invalid_input(
            "--trials",
            "must be between 1 and 100000",
        ));
    }

    if !cli.max_fra_benefit.is_finite() || cli.max_fra_benefit <= 0.0 {
        return Err(ApiError::invalid_input(
            "--max-fra-benefit",
            "must be a finite value > 0",
        ));
    }

    if !cli.fpl_single.is_finite() || cli.fpl_single <= 0.0 {
        return Err(ApiError::invalid_input(
            "--fpl-single",
            "must be a finite value > 0",
        ));
    }

    for (flag, value) in [
        ("--housing", cli.housing),
        ("--food-living", cli.food_living),
        ("--travel-leisure", cli.travel_leisure),
        ("--other-discretionary", cli.other_discretionary),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ApiError::invalid_input(flag, "must be a finite value >= 0"));
        }
    }

    if let Some(value) = cli.healthcare {
        if !value.is_finite() || value < 0.0 {
            return Err(ApiError::invalid_input(
                "--healthcare",
                "must be a finite value >= 0",
            ));
        }
    }

    let marital_status: MaritalStatus = cli.marital_status.into();
    let spouse = match marital_status {
        MaritalStatus::Single => None,
        MaritalStatus::Married | MaritalStatus::Couple => Some(build_spouse(&cli, current_year)?),
    };
    let both_working = marital_status != MaritalStatus::Single && cli.both_working;

    let healthcare = resolve_healthcare(&cli, marital_status, spouse);

    Ok(Inputs {
        current_year,
        retirement_age: cli.retirement_age,
        liquid_assets: cli.liquid_assets,
        annual_contribution: cli.annual_contribution,
        real_estate_cashflow: cli.real_estate_cashflow,
        market_profile: cli.market_profile.into(),
        calculation_method: cli.calculation_method.into(),
        marital_status,
        primary: Person {
            birth_year: cli.birth_year,
            annual_income: cli.annual_income,
            years_worked: cli.years_worked,
            claim_age: cli.claim_age,
        },
        spouse,
        both_working,
        budget: BudgetLines {
            housing: cli.housing,
            healthcare,
            food_living: cli.food_living,
            travel_leisure: cli.travel_leisure,
            other_discretionary: cli.other_discretionary,
        },
        max_fra_benefit: cli.max_fra_benefit,
        trials: cli.trials,
        seed: cli.seed,
    })
}

fn build_spouse(cli: &Cli, current_year: i32) -> Result<Person, ApiError> {
    let Some(birth_year) = cli.spouse_birth_year else {
        return Err(ApiError::invalid_input(
            "--spouse-birth-year",
            "is required for married and couple households",
        ));
    };

    if birth_year < current_year - 100 || birth_year > current_year {
        return Err(ApiError::invalid_input(
            "--spouse-birth-year",
            format!("must be between {} and {current_year}", current_year - 100),
        ));
    }

    if let Some(claim_age) = cli.spouse_claim_age {
        if !(62..=70).contains(&claim_age) {
            return Err(ApiError::invalid_input(
                "--spouse-claim-age",
                "must be between 62 and 70",
            ));
        }
    }

    if cli.both_working {
        let annual_income = cli.spouse_annual_income.ok_or_else(|| {
            ApiError::invalid_input(
                "--spouse-annual-income",
                "is required when both spouses work",
            )
        })?;
        if !annual_income.is_finite() || annual_income < 0.0 {
            return Err(ApiError::invalid_input(
                "--spouse-annual-income",
                "must be a finite value >= 0",
            ));
        }
        let years_worked = cli.spouse_years_worked.ok_or_else(|| {
            ApiError::invalid_input(
                "--spouse-years-worked",
                "is required when both spouses work",
            )
        })?;
        if years_worked > 50 {
            return Err(ApiError::invalid_input(
                "--spouse-years-worked",
                "must be between 0 and 50",
            ));
        }
        let claim_age = cli.spouse_claim_age.ok_or_else(|| {
            ApiError::invalid_input("--spouse-claim-age", "is required when both spouses work")
        })?;
        Ok(Person {
            birth_year,
            annual_income,
            years_worked,
            claim_age,
        })
    } else {
        // A dependent spouse draws on the primary record; their own income
        // and work history never enter the calculation.
        Ok(Person {
            birth_year,
            annual_income: 0.0,
            years_worked: 0,
            claim_age: cli.spouse_claim_age.unwrap_or(FULL_RETIREMENT_AGE),
        })
    }
}

// Explicit figure > state-based estimate > documented per-person default.
fn resolve_healthcare(cli: &Cli, marital_status: MaritalStatus, spouse: Option<Person>) -> f64 {
    if let Some(value) = cli.healthcare {
        return value;
    }

    if let Some(state) = cli.state.as_deref() {
        debug!(
            state,
            zip = cli.zip_code.as_deref().unwrap_or("-"),
            "estimating healthcare from the premium table"
        );
        let spouse_pricing = spouse.map(|s| {
            let age_at_retirement =
                (cli.retirement_age as i32 + (cli.birth_year - s.birth_year)).max(0) as u32;
            let income = if cli.both_working {
                s.annual_income
            } else {
                cli.annual_income
            };
            (age_at_retirement, income)
        });
        return healthcare::household_annual_cost(
            cli.retirement_age,
            cli.annual_income,
            spouse_pricing,
            state,
            cli.tobacco_use,
            cli.fpl_single,
        );
    }

    let persons = if marital_status == MaritalStatus::Single {
        1.0
    } else {
        2.0
    };
    debug!(persons, "no healthcare figure or state supplied; using the per-person default");
    healthcare::DEFAULT_ANNUAL_COST_PER_PERSON * persons
}

fn default_current_year() -> i32 {
    chrono::Utc::now().year()
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/styles.css", get(styles_handler))
        .route("/app.js", get(app_js_handler))
        .route(
            "/api/forecast",
            get(forecast_get_handler).post(forecast_post_handler),
        )
        .route("/api/healthcare-estimate", post(healthcare_estimate_handler))
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    println!("Retirement forecaster listening on http://{addr}");
    println!("Local access: http://127.0.0.1:{port}/");

    axum::serve(listener, app).await
}

async fn index_handler() -> impl IntoResponse {
    with_cache_control(Html(INDEX_HTML))
}

async fn styles_handler() -> impl IntoResponse {
    with_cache_control((
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLES_CSS,
    ))
}

async fn app_js_handler() -> impl IntoResponse {
    with_cache_control((
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        APP_JS,
    ))
}

async fn not_found_handler() -> Response {
    ApiError::NotFound.into_response()
}

async fn forecast_get_handler(Query(payload): Query<ForecastPayload>) -> Response {
    forecast_handler_impl(payload).await
}

async fn forecast_post_handler(Json(payload): Json<ForecastPayload>) -> Response {
    forecast_handler_impl(payload).await
}

async fn forecast_handler_impl(payload: ForecastPayload) -> Response {
    let inputs = match inputs_from_payload(payload) {
        Ok(inputs) => inputs,
        Err(err) => {
            warn!(error = %err, "rejected forecast request");
            return err.into_response();
        }
    };

    let result = run_forecast(&inputs);
    info!(
        years_to_retirement = result.years_to_retirement,
        forecast_rows = result.forecast.len(),
        extended_rows = result.extended_forecast.len(),
        "forecast complete"
    );
    json_response(StatusCode::OK, build_forecast_response(&inputs, result))
}

async fn healthcare_estimate_handler(Json(payload): Json<EstimatePayload>) -> Response {
    match healthcare_estimate_from_payload(payload) {
        Ok(estimate) => json_response(StatusCode::OK, estimate),
        Err(err) => {
            warn!(error = %err, "rejected healthcare estimate request");
            err.into_response()
        }
    }
}

fn healthcare_estimate_from_payload(
    payload: EstimatePayload,
) -> Result<HealthcareEstimate, ApiError> {
    let Some(state) = payload.state else {
        return Err(ApiError::invalid_input(
            "state",
            "is required for a healthcare estimate",
        ));
    };

    let age = payload.age.unwrap_or(60);
    if !(18..=110).contains(&age) {
        return Err(ApiError::invalid_input("age", "must be between 18 and 110"));
    }

    let income = payload.income.unwrap_or(50_000.0);
    if !income.is_finite() || income < 0.0 {
        return Err(ApiError::invalid_input(
            "income",
            "must be a finite value >= 0",
        ));
    }

    debug!(
        state = %state,
        zip = payload.zip_code.as_deref().unwrap_or("-"),
        age,
        "pricing a standalone healthcare estimate"
    );
    Ok(healthcare::estimate_premiums(
        age,
        income,
        &state,
        payload.tobacco_use.unwrap_or(false),
        healthcare::DEFAULT_FPL_SINGLE,
    ))
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

/// One-shot mode: parse flags, run the forecast, print the response JSON.
pub fn run_cli() -> Result<(), ApiError> {
    let cli = Cli::parse();
    let inputs = build_inputs(cli)?;
    let result = run_forecast(&inputs);
    let response = build_forecast_response(&inputs, result);
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

#[cfg(test)]
fn inputs_from_json(json: &str) -> Result<Inputs, ApiError> {
    let payload = serde_json::from_str::<ForecastPayload>(json)
        .map_err(|e| ApiError::invalid_input("payload", format!("invalid JSON: {e}")))?;
    inputs_from_payload(payload)
}

fn inputs_from_payload(payload: ForecastPayload) -> Result<Inputs, ApiError> {
    let mut cli = default_cli_for_api();

    if let Some(v) = payload.birth_year {
        cli.birth_year = v;
    }
    if let Some(v) = payload.retirement_age {
        cli.retirement_age = v;
    }
    if let Some(v) = payload.annual_income {
        cli.annual_income = v;
    }
    if let Some(v) = payload.years_worked {
        cli.years_worked = v;
    }
    if let Some(v) = payload.claim_age {
        cli.claim_age = v;
    }
    if let Some(v) = payload.liquid_assets {
        cli.liquid_assets = v;
    }
    if let Some(v) = payload.annual_contribution {
        cli.annual_contribution = v;
    }
    if let Some(v) = payload.real_estate_cashflow {
        cli.real_estate_cashflow = v;
    }

    if let Some(v) = payload.marital_status {
        cli.marital_status = v.into();
    }
    if let Some(v) = payload.both_working {
        cli.both_working = v;
    }
    if let Some(v) = payload.spouse_birth_year {
        cli.spouse_birth_year = Some(v);
    }
    if let Some(v) = payload.spouse_annual_income {
        cli.spouse_annual_income = Some(v);
    }
    if let Some(v) = payload.spouse_years_worked {
        cli.spouse_years_worked = Some(v);
    }
    if let Some(v) = payload.spouse_claim_age {
        cli.spouse_claim_age = Some(v);
    }

    if let Some(v) = payload.market_profile {
        cli.market_profile = v.into();
    }
    if let Some(v) = payload.calculation_method {
        cli.calculation_method = v.into();
    }
    if let Some(v) = payload.trials {
        cli.trials = v;
    }
    if let Some(v) = payload.seed {
        cli.seed = v;
    }
    if let Some(v) = payload.current_year {
        cli.current_year = Some(v);
    }
    if let Some(v) = payload.max_fra_benefit {
        cli.max_fra_benefit = v;
    }

    if let Some(v) = payload.housing {
        cli.housing = v;
    }
    if let Some(v) = payload.healthcare {
        cli.healthcare = Some(v);
    }
    if let Some(v) = payload.food_living {
        cli.food_living = v;
    }
    if let Some(v) = payload.travel_leisure {
        cli.travel_leisure = v;
    }
    if let Some(v) = payload.other_discretionary {
        cli.other_discretionary = v;
    }

    if let Some(v) = payload.state {
        cli.state = Some(v);
    }
    if let Some(v) = payload.zip_code {
        cli.zip_code = Some(v);
    }
    if let Some(v) = payload.tobacco_use {
        cli.tobacco_use = v;
    }

    build_inputs(cli)
}

fn default_cli_for_api() -> Cli {
    Cli {
        birth_year: 1975,
        retirement_age: 65,
        annual_income: 100_000.0,
        years_worked: 30,
        claim_age: 67,
        liquid_assets: 500_000.0,
        annual_contribution: 25_000.0,
        real_estate_cashflow: 0.0,
        marital_status: CliMaritalStatus::Single,
        both_working: false,
        spouse_birth_year: None,
        spouse_annual_income: None,
        spouse_years_worked: None,
        spouse_claim_age: None,
        market_profile: CliMarketProfile::Moderate,
        calculation_method: CliCalculationMethod::Deterministic,
        trials: 1_000,
        seed: 42,
        current_year: None,
        max_fra_benefit: 45_864.0,
        fpl_single: 14_580.0,
        housing: 24_000.0,
        healthcare: None,
        food_living: 12_000.0,
        travel_leisure: 8_000.0,
        other_discretionary: 6_000.0,
        state: None,
        zip_code: None,
        tobacco_use: false,
    }
}

fn build_forecast_response(inputs: &Inputs, result: ForecastResult) -> ForecastResponse {
    ForecastResponse {
        calculation_method: inputs.calculation_method.into(),
        market_profile: inputs.market_profile.into(),
        years_to_retirement: result.years_to_retirement,
        summary: result.summary,
        benefits: result.benefits,
        budget: BudgetBreakdown::from_lines(&inputs.budget),
        forecast: result.forecast,
        extended_forecast: result.extended_forecast,
    }
}
