pub mod area;
pub mod filter;
pub mod hotel;
pub mod state;
pub mod stats;
pub mod surface;
pub mod view;
