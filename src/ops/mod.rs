pub mod filter;
pub mod kpi;
pub mod placement;
