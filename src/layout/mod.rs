pub mod axis;
pub mod engine;
pub mod legend;
pub mod matcher;
pub mod rows;
pub mod scale;
pub mod segments;
