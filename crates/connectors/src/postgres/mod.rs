pub mod adapter;
pub mod client;
pub mod params;
pub mod row;
pub mod sink;
pub mod source;
