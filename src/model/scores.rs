use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemScore {
    pub rank: usize,
    pub label: String,
    pub best_count: u32,
    pub worst_count: u32,
    pub appearances: u32,
    pub score: f64,
    pub se: f64,
    pub ci_low: f64,
    pub ci_high: f64,
    pub utility: f64,
}
