use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceSet {
    items: Vec<String>,
}

impl ChoiceSet {
    pub fn new<S: Into<String>>(items: impl IntoIterator<Item = S>) -> Self {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.items.iter().any(|item| item == label)
    }

    pub fn check(&self) -> Option<String> {
        if self.items.len() < 2 {
            return Some(format!(
                "choice set has {} item(s); at least 2 required",
                self.items.len()
            ));
        }
        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if !seen.insert(item.as_str()) {
                return Some(format!("choice set lists '{item}' more than once"));
            }
        }
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceRecord {
    pub respondent: u32,
    pub set_id: u32,
    pub choice_set: ChoiceSet,
    pub best: String,
    pub worst: String,
}

impl ChoiceRecord {
    pub fn check(&self) -> Option<String> {
        if let Some(reason) = self.choice_set.check() {
            return Some(reason);
        }
        if !self.choice_set.contains(&self.best) {
            return Some(format!("best item '{}' is not in its choice set", self.best));
        }
        if !self.choice_set.contains(&self.worst) {
            return Some(format!(
                "worst item '{}' is not in its choice set",
                self.worst
            ));
        }
        if self.best == self.worst {
            return Some(format!(
                "'{}' chosen as both best and worst",
                self.best
            ));
        }
        None
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/choice.rs"]
mod tests;
