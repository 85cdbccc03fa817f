use hotel_ai::concierge::ConciergeGateway;
use hotel_ai::config::ConciergeConfig;
use hotel_ai::forecasting::{
    DemandScorer, EventCalendar, InsightCatalog, PricingEngine, RateCard, ScoringConfig,
    SentimentClassifier, SentimentLexicon,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Shared handler state: readiness flag, metrics handle, and the engine
/// facade. Every engine is immutable, so cloning the state is cheap and
/// lock-free.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) engines: Arc<ForecastEngines>,
    pub(crate) concierge: Option<Arc<dyn ConciergeGateway>>,
}

/// The deterministic engines behind the scoring endpoints, built once at
/// startup from their production tables.
pub(crate) struct ForecastEngines {
    pub(crate) scorer: Arc<DemandScorer>,
    pub(crate) pricing: PricingEngine,
    pub(crate) sentiment: SentimentClassifier,
    pub(crate) insights: InsightCatalog,
}

impl ForecastEngines {
    pub(crate) fn standard() -> Self {
        let scorer = Arc::new(DemandScorer::new(
            ScoringConfig::default(),
            EventCalendar::builtin(),
        ));
        let pricing = PricingEngine::new(scorer.clone(), RateCard::standard());

        Self {
            scorer,
            pricing,
            sentiment: SentimentClassifier::new(SentimentLexicon::builtin()),
            insights: InsightCatalog::builtin(),
        }
    }
}

pub(crate) fn build_concierge(
    config: &ConciergeConfig,
) -> Result<Option<Arc<dyn ConciergeGateway>>, hotel_ai::concierge::ConciergeError> {
    let client = hotel_ai::concierge::GroqConcierge::from_config(config)?;
    Ok(client.map(|client| Arc::new(client) as Arc<dyn ConciergeGateway>))
}
