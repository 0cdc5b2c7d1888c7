pub mod pause;
pub mod quiz;
pub mod results;
pub mod selection;
