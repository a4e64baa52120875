use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hours_badge::{
    config::Config, timing::shop_datetime_now::shop_datetime_now, Badge, WeeklySchedule,
};

const CONFIG_PATH: &str = "hours.json";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load_or_default(CONFIG_PATH)
        .with_context(|| format!("loading {}", CONFIG_PATH))?;
    let timezone = config.tz()?;

    let now = shop_datetime_now(timezone);
    let status = WeeklySchedule::standard().evaluate_datetime(&now);
    info!(%now, open = status.is_open(), near_close = status.is_near_close(), "business hours checked");

    let badge = Badge::from(&status);
    let output = serde_json::json!({ "status": status, "badge": badge });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
