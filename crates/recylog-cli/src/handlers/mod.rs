pub mod add;
pub mod analyze;
pub mod chart;
pub mod delete;
pub mod export;
pub mod import;
pub mod list;
pub mod search;
pub mod seed;
pub mod stats;
pub mod update;
