pub mod case_detail;
pub mod cases;
pub mod dashboard;
pub mod help;
pub mod map;
pub mod statistics;
