//! Process-wide fact collection.
//!
//! The store is built once during bootstrap and shared behind an `Arc` for the
//! lifetime of the process. Nothing mutates it after construction, so request
//! handlers read it without locking.

use rand::Rng;

use crate::domain::fact::Fact;
use crate::errors::DomainError;

/// Chooses an index into a non-empty candidate slice.
pub trait FactPicker: Send + Sync {
    /// Returns an index in `0..len`. Callers guarantee `len >= 1`.
    fn pick_index(&self, len: usize) -> usize;
}

/// Uniform selection backed by the thread-local RNG; every call is independent.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomFactPicker;

impl FactPicker for RandomFactPicker {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FactStore {
    facts: Vec<Fact>,
}

impl FactStore {
    pub fn new(mut facts: Vec<Fact>) -> Self {
        facts.sort_by_key(|fact| fact.id);
        Self { facts }
    }

    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Distinct non-empty tags in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for tag in self.facts.iter().filter_map(|fact| fact.tag.as_deref()) {
            if !tag.is_empty() && !categories.contains(&tag) {
                categories.push(tag);
            }
        }
        categories
    }

    /// Facts eligible for a request filtered by `tag`.
    ///
    /// A tag that matches nothing behaves exactly like no tag at all: the whole
    /// store is returned.
    pub fn candidates(&self, tag: Option<&str>) -> Vec<&Fact> {
        if let Some(tag) = tag {
            let tagged: Vec<&Fact> = self.facts.iter().filter(|fact| fact.has_tag(tag)).collect();
            if !tagged.is_empty() {
                return tagged;
            }
        }

        self.facts.iter().collect()
    }

    pub fn pick<P>(&self, tag: Option<&str>, picker: &P) -> Result<&Fact, DomainError>
    where
        P: FactPicker + ?Sized,
    {
        let candidates = self.candidates(tag);
        if candidates.is_empty() {
            return Err(DomainError::NoFactsAvailable);
        }

        // Clamp so a misbehaving picker cannot index out of bounds.
        let index = picker.pick_index(candidates.len()).min(candidates.len() - 1);
        Ok(candidates[index])
    }
}
