use crate::infra::ForecastEngines;
use chrono::Local;
use clap::Args;
use hotel_ai::error::AppError;
use hotel_ai::forecasting::{DemandForecast, PricingRecommendation};

#[derive(Args, Debug)]
pub(crate) struct ForecastArgs {
    /// Calendar date to score (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub(crate) date: Option<String>,
    /// Room type label, e.g. "Executive Suite"
    #[arg(long, default_value = "Standard")]
    pub(crate) room_type: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Date used for the demand and pricing portion of the demo
    #[arg(long, default_value = "2026-12-25")]
    pub(crate) date: String,
    /// Room type used throughout the demo
    #[arg(long, default_value = "Presidential Suite")]
    pub(crate) room_type: String,
    /// Skip the review sentiment portion of the demo
    #[arg(long)]
    pub(crate) skip_sentiment: bool,
}

fn resolve_date(date: Option<String>) -> String {
    date.unwrap_or_else(|| Local::now().date_naive().format("%Y-%m-%d").to_string())
}

pub(crate) fn run_forecast_demand(args: ForecastArgs) -> Result<(), AppError> {
    let engines = ForecastEngines::standard();
    let date = resolve_date(args.date);
    let forecast = engines.scorer.score(&date, &args.room_type)?;
    render_forecast(&forecast, &args.room_type);
    Ok(())
}

pub(crate) fn run_forecast_pricing(args: ForecastArgs) -> Result<(), AppError> {
    let engines = ForecastEngines::standard();
    let date = resolve_date(args.date);
    let recommendation = engines.pricing.recommend(&date, &args.room_type)?;
    render_recommendation(&recommendation, &args.room_type);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engines = ForecastEngines::standard();

    println!("Revenue decision demo");
    println!("Date: {} | Room type: {}", args.date, args.room_type);

    let forecast = engines.scorer.score(&args.date, &args.room_type)?;
    println!();
    render_forecast(&forecast, &args.room_type);

    let recommendation = engines.pricing.price_forecast(&forecast, &args.room_type);
    println!();
    render_recommendation(&recommendation, &args.room_type);

    if !args.skip_sentiment {
        println!("\nReview sentiment");
        for review in [
            "the room was clean and the staff were friendly",
            "noisy hallway and rude reception",
        ] {
            let reading = engines.sentiment.classify(review);
            println!(
                "- \"{}\" -> {} ({:+})",
                review,
                reading.sentiment.label(),
                reading.score as i64
            );
        }
    }

    println!("\nTactical insights");
    for insight in engines.insights.sample(2) {
        println!("- [{}] {}", insight.level, insight.text);
    }

    Ok(())
}

fn render_forecast(forecast: &DemandForecast, room_type: &str) {
    println!(
        "Demand for {} ({}): {:.2} [{}]",
        forecast.date,
        room_type,
        forecast.demand_score,
        forecast.level.label()
    );

    if forecast.factors.is_empty() {
        println!("Factors: none (standard demand)");
    } else {
        println!("Factors:");
        for factor in &forecast.factors {
            println!("- {}", factor.label());
        }
    }
}

fn render_recommendation(recommendation: &PricingRecommendation, room_type: &str) {
    println!(
        "Recommended nightly rate for {}: ${:.2} (confidence {:.0}%)",
        room_type,
        recommendation.recommended_price,
        recommendation.confidence * 100.0
    );
    println!("Rationale: {}", recommendation.reason);
}
