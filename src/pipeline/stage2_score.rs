use crate::error::{DegenerateInput, MaxDiffError};
use crate::model::choice::ChoiceRecord;
use crate::model::item::Catalog;
use crate::model::scores::ItemScore;

pub const Z_95: f64 = 1.96;

pub const TIED_UTILITY: f64 = 50.0;

#[derive(Debug)]
pub struct ScoreOutput {
    pub scores: Vec<ItemScore>,
    pub warnings: Vec<DegenerateInput>,
}

#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    best: u32,
    worst: u32,
    shown: u32,
}

pub fn score(records: &[ChoiceRecord], catalog: &Catalog) -> Result<ScoreOutput, MaxDiffError> {
    if records.is_empty() {
        return Err(MaxDiffError::EmptyRecords);
    }

    let tallies = tally(records, catalog)?;
    let mut warnings = Vec::new();
    let mut scores = Vec::with_capacity(catalog.len());

    for (item, t) in catalog.items().iter().zip(&tallies) {
        if t.shown == 0 {
            warnings.push(DegenerateInput::ZeroAppearances {
                label: item.label.clone(),
            });
            continue;
        }
        let net = net_score(t.best, t.worst, t.shown);
        let se = standard_error(t.best, t.worst, t.shown);
        scores.push(ItemScore {
            rank: 0,
            label: item.label.clone(),
            best_count: t.best,
            worst_count: t.worst,
            appearances: t.shown,
            score: net,
            se,
            ci_low: net - Z_95 * se,
            ci_high: net + Z_95 * se,
            utility: 0.0,
        });
    }

    scores.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.label.cmp(&b.label)));
    for (i, s) in scores.iter_mut().enumerate() {
        s.rank = i + 1;
    }

    if let Some(tie) = rescale_utilities(&mut scores) {
        warnings.push(DegenerateInput::AllTied { score: tie });
    }

    Ok(ScoreOutput { scores, warnings })
}

fn tally(records: &[ChoiceRecord], catalog: &Catalog) -> Result<Vec<Tally>, MaxDiffError> {
    let mut tallies = vec![Tally::default(); catalog.len()];
    for (idx, rec) in records.iter().enumerate() {
        if let Some(reason) = rec.check() {
            return Err(MaxDiffError::integrity(idx, reason));
        }
        for label in rec.choice_set.items() {
            let slot = catalog.index_of(label).ok_or_else(|| {
                MaxDiffError::integrity(idx, format!("item '{label}' is not in the catalog"))
            })?;
            tallies[slot].shown += 1;
            if *label == rec.best {
                tallies[slot].best += 1;
            }
            if *label == rec.worst {
                tallies[slot].worst += 1;
            }
        }
    }
    Ok(tallies)
}

pub fn net_score(best: u32, worst: u32, shown: u32) -> f64 {
    (best as f64 - worst as f64) / shown as f64
}

// Normal-approximation heuristic, not an exact binomial interval.
pub fn standard_error(best: u32, worst: u32, shown: u32) -> f64 {
    ((best + worst) as f64).sqrt() / shown as f64
}

// Returns the shared score when every item is tied.
pub fn rescale_utilities(scores: &mut [ItemScore]) -> Option<f64> {
    let (min, max) = scores
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
            (lo.min(s.score), hi.max(s.score))
        });
    if scores.is_empty() {
        return None;
    }
    let span = max - min;
    if span == 0.0 {
        for s in scores.iter_mut() {
            s.utility = TIED_UTILITY;
        }
        return Some(min);
    }
    for s in scores.iter_mut() {
        s.utility = 100.0 * (s.score - min) / span;
    }
    None
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_score.rs"]
mod tests;
