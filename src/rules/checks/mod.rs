//! Detection rules, one module per concern

pub mod breakpoints;
pub mod coverage;
pub mod flexgrid;
pub mod hardcoded;
pub mod inline;
pub mod layout;
