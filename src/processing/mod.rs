pub mod filters;
pub mod steps;
