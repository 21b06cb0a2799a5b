pub mod stage1_simulate;
pub mod stage2_score;
pub mod stage3_report;
