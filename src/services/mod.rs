pub mod engine;
pub mod random_fill;
pub mod render;
pub mod vip_rows;

pub use engine::SeatingEngine;
pub use render::RowSummary;
