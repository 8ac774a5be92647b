use shared_types::{AppError, BuyerDashboard, BuyerDashboardData};

const BUNDLED: &str = include_str!("../fixtures/buyer_dashboard.json");

pub fn parse_dashboard(json: &str) -> Result<BuyerDashboard, AppError> {
    let data: BuyerDashboardData = serde_json::from_str(json)?;
    Ok(data.buyer_dashboard)
}

/// Dashboard data shipped with the app. An unreadable fixture yields an
/// empty dashboard.
pub fn bundled_dashboard() -> BuyerDashboard {
    parse_dashboard(BUNDLED).unwrap_or_else(|error| {
        tracing::error!(%error, "bundled dashboard fixture is invalid");
        BuyerDashboard::default()
    })
}
