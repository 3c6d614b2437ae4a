//! Dashboard widgets
//!
//! - DataTable: every record, column maxima in light green
//! - StatsTable: summary statistics, column maxima in light blue
//! - SpeedBarChart: average speed per skier
//! - DistanceTimeScatter: distance against time, coloured by speed
//! - Ranking: skiers by speed, fastest first
//! - Detail: skier selector and per-skier figures

pub mod data_table;
pub mod detail;
pub mod ranking;
pub mod scatter;
pub mod speed_chart;
pub mod stats_table;

pub use data_table::DataTablePanel;
pub use detail::DetailPanel;
pub use ranking::RankingPanel;
pub use scatter::DistanceTimeScatter;
pub use speed_chart::SpeedBarChart;
pub use stats_table::StatsTablePanel;
