#[allow(clippy::module_inception)]
mod area;

pub use area::Area;
