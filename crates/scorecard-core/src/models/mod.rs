pub mod care_gap;
pub mod dataset;
pub mod definition;
pub mod entity;
pub mod observation;
pub mod outcome;
pub mod period;
