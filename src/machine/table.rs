//! Forward transition table with its reverse index.

use crate::core::{InputToken, StateId};
use std::collections::BTreeMap;

/// Transitions keyed by source state, plus the reverse index keyed by
/// destination.
///
/// For every destination `d`, `reverse[d]` holds exactly the
/// `(source, input)` pairs whose forward entry targets `d`. Neither map is
/// ever mutated without the other, and empty rows or index entries are
/// pruned.
#[derive(Clone, Debug)]
pub(crate) struct TransitionTable<Id: StateId, In: InputToken> {
    forward: BTreeMap<Id, Vec<(In, Id)>>,
    reverse: BTreeMap<Id, Vec<(Id, In)>>,
}

impl<Id: StateId, In: InputToken> TransitionTable<Id, In> {
    pub(crate) fn new() -> Self {
        Self {
            forward: BTreeMap::new(),
            reverse: BTreeMap::new(),
        }
    }

    /// Destination for `(from, input)`, if mapped.
    pub(crate) fn lookup(&self, from: &Id, input: &In) -> Option<&Id> {
        self.forward
            .get(from)?
            .iter()
            .find(|(i, _)| i == input)
            .map(|(_, to)| to)
    }

    /// Outgoing `(input, destination)` pairs in insertion order.
    pub(crate) fn row(&self, from: &Id) -> &[(In, Id)] {
        self.forward.get(from).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Incoming `(source, input)` pairs in insertion order.
    pub(crate) fn incoming(&self, to: &Id) -> &[(Id, In)] {
        self.reverse.get(to).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sources with at least one outgoing transition, in id order.
    pub(crate) fn sources(&self) -> impl Iterator<Item = &Id> {
        self.forward.keys()
    }

    pub(crate) fn len(&self) -> usize {
        self.forward.values().map(Vec::len).sum()
    }

    /// Record `from --input--> to`. The caller has checked that
    /// `(from, input)` is unmapped.
    pub(crate) fn insert(&mut self, from: Id, input: In, to: Id) {
        debug_assert!(self.lookup(&from, &input).is_none());
        self.reverse
            .entry(to.clone())
            .or_default()
            .push((from.clone(), input.clone()));
        self.forward.entry(from).or_default().push((input, to));
    }

    /// Remove `from --input--> to`. Returns false, changing nothing, when
    /// `(from, input)` is unmapped or maps to a different destination.
    pub(crate) fn remove(&mut self, from: &Id, input: &In, to: &Id) -> bool {
        if self.lookup(from, input) != Some(to) {
            return false;
        }
        Self::drop_from_row(&mut self.forward, from, input);
        Self::drop_from_index(&mut self.reverse, to, from, input);
        true
    }

    /// Remove every transition into or out of `id`, returning how many
    /// were removed.
    pub(crate) fn remove_state(&mut self, id: &Id) -> usize {
        let mut removed = 0;

        if let Some(outgoing) = self.forward.remove(id) {
            for (input, to) in &outgoing {
                Self::drop_from_index(&mut self.reverse, to, id, input);
            }
            removed += outgoing.len();
        }

        if let Some(incoming) = self.reverse.remove(id) {
            // Self-loops already went with the outgoing row.
            for (from, input) in incoming.iter().filter(|(from, _)| from != id) {
                Self::drop_from_row(&mut self.forward, from, input);
                removed += 1;
            }
        }

        removed
    }

    fn drop_from_row(forward: &mut BTreeMap<Id, Vec<(In, Id)>>, from: &Id, input: &In) {
        if let Some(row) = forward.get_mut(from) {
            row.retain(|(i, _)| i != input);
            if row.is_empty() {
                forward.remove(from);
            }
        }
    }

    fn drop_from_index(
        reverse: &mut BTreeMap<Id, Vec<(Id, In)>>,
        to: &Id,
        from: &Id,
        input: &In,
    ) {
        if let Some(entry) = reverse.get_mut(to) {
            if let Some(pos) = entry.iter().position(|(f, i)| f == from && i == input) {
                entry.remove(pos);
            }
            if entry.is_empty() {
                reverse.remove(to);
            }
        }
    }

    /// Verify that the reverse index mirrors the forward table exactly.
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        let mut expected: BTreeMap<Id, Vec<(Id, In)>> = BTreeMap::new();
        for (from, row) in &self.forward {
            if row.is_empty() {
                return false;
            }
            for (input, to) in row {
                expected
                    .entry(to.clone())
                    .or_default()
                    .push((from.clone(), input.clone()));
            }
        }

        if expected.len() != self.reverse.len() {
            return false;
        }
        expected.iter().all(|(to, pairs)| {
            let actual = self.incoming(to);
            actual.len() == pairs.len() && pairs.iter().all(|p| actual.contains(p))
        })
    }
}
