pub mod analysis;
pub mod assessment;
pub mod date;
pub mod labels;
pub mod session;
