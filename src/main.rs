use storefront_builder::app::App;
use storefront_builder::BuilderConfig;

fn main() {
    let (config, rejected) = match BuilderConfig::embedded() {
        Ok(config) => (config, None),
        Err(err) => (BuilderConfig::default(), Some(err)),
    };
    if let Err(err) = dioxus::logger::init(config.log_level()) {
        eprintln!("logger already initialised: {err}");
    }
    if let Some(err) = rejected {
        tracing::warn!(error = %err, "Builder.toml rejected, using defaults");
    }

    let config = BuilderConfig::install(config);
    tracing::info!(
        home_block_limit = config.plan.home_block_limit,
        "starting storefront builder"
    );
    dioxus::launch(App);
}
