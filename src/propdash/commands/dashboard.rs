use crate::error::Result;
use crate::model::{Activity, ChartPeriod, KpiData, Notification, RevenuePoint};
use crate::store::PropertyStore;

/// Everything the overview screen needs, fetched in one pass.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub kpis: KpiData,
    pub revenue: Vec<RevenuePoint>,
    pub activities: Vec<Activity>,
    pub unread_notifications: usize,
}

pub fn run<S: PropertyStore>(store: &S, period: ChartPeriod) -> Result<DashboardData> {
    let notifications: Vec<Notification> = store.notifications()?;
    Ok(DashboardData {
        kpis: store.kpi_data()?,
        revenue: store.revenue_chart(period)?,
        activities: store.activities()?,
        unread_notifications: notifications.iter().filter(|n| !n.read).count(),
    })
}
