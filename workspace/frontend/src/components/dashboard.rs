mod chart;
mod controls;
mod data_info;
mod metrics;
mod parameters;
mod preview;
mod upload;
mod view;

pub use view::Dashboard;
