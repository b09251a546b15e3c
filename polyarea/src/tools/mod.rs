pub mod area;
pub mod load;
pub mod probe;
