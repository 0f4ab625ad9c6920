use crate::cli::ServeArgs;
use crate::infra::{scheme_directory, AppState, InMemorySessionStore};
use crate::routes::{with_feature_routes, FeatureServices};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use bharat_ai::accounts::AccountService;
use bharat_ai::assistant::ChatAssistant;
use bharat_ai::config::AppConfig;
use bharat_ai::error::AppError;
use bharat_ai::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let default_language = config.content.default_language;
    let directory = Arc::new(scheme_directory(&config.content)?);
    let store = Arc::new(InMemorySessionStore::default());
    let services = FeatureServices {
        directory: directory.clone(),
        assistant: Arc::new(ChatAssistant::default()),
        accounts: Arc::new(AccountService::new(store, default_language)),
        default_language,
    };

    let app = with_feature_routes(services)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        schemes = directory.catalog().len(),
        language = default_language.code(),
        "bharat ai service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
