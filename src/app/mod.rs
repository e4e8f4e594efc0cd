mod state;
pub mod views;

pub use state::Dashboard;
pub use views::{LineChartView, OverviewView};
