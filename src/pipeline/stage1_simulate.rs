use rand::Rng;
use rand::SeedableRng;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::seq::index;

use crate::error::MaxDiffError;
use crate::model::choice::{ChoiceRecord, ChoiceSet};
use crate::model::item::{Catalog, Item};
use crate::model::params::SimulationParams;

#[derive(Debug)]
pub struct Stage1Output {
    pub records: Vec<ChoiceRecord>,
}

pub fn run_stage1(
    params: &SimulationParams,
    catalog: &Catalog,
) -> Result<Stage1Output, MaxDiffError> {
    params.validate(catalog)?;

    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut records = Vec::with_capacity(params.expected_records());

    for respondent in 0..params.respondents {
        for set_id in 0..params.sets_per_respondent {
            let shown: Vec<&Item> = index::sample(&mut rng, catalog.len(), params.items_per_set)
                .into_iter()
                .map(|i| &catalog.items()[i])
                .collect();

            let best_pos = draw_weighted(&shown, |item| item.weight, &mut rng)?;
            let rest: Vec<&Item> = shown
                .iter()
                .enumerate()
                .filter(|(pos, _)| *pos != best_pos)
                .map(|(_, item)| *item)
                .collect();
            let worst_pos = draw_weighted(&rest, |item| 1.0 / item.weight, &mut rng)?;

            records.push(ChoiceRecord {
                respondent,
                set_id,
                choice_set: ChoiceSet::new(shown.iter().map(|item| item.label.clone())),
                best: shown[best_pos].label.clone(),
                worst: rest[worst_pos].label.clone(),
            });
        }
    }

    Ok(Stage1Output { records })
}

pub fn draw_weighted<T, F, R>(
    candidates: &[T],
    weight: F,
    rng: &mut R,
) -> Result<usize, MaxDiffError>
where
    F: Fn(&T) -> f64,
    R: Rng + ?Sized,
{
    let weights: Vec<f64> = candidates.iter().map(weight).collect();
    let dist = WeightedIndex::new(&weights)
        .map_err(|e| MaxDiffError::config(format!("cannot draw from weights {weights:?}: {e}")))?;
    Ok(dist.sample(rng))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_simulate.rs"]
mod tests;
