pub mod choice;
pub mod item;
pub mod params;
pub mod scores;
