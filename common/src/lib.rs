pub mod intersect;
pub mod shapes;
