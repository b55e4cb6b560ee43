pub mod audit;
pub mod navigation;
