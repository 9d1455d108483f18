// Copyright (c) The junit-weaver Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The working set of received-but-not-yet-reported events.

use crate::{SuiteEvent, SuiteEventKind};
use std::collections::HashSet;

/// A pending event, tagged with a unique id.
///
/// Removal is keyed by id rather than by structural equality, so two
/// structurally equal events never alias each other.
#[derive(Debug)]
struct PendingEntry {
    id: u64,
    event: SuiteEvent,
}

/// The set of events that have arrived but not yet been folded into a
/// report.
///
/// Events are held as a set rather than a queue: they are later filtered by
/// ordinal prefix, not consumed in global order.
#[derive(Debug, Default)]
pub(crate) struct PendingSet {
    next_id: u64,
    entries: Vec<PendingEntry>,
}

impl PendingSet {
    /// Adds an event to the set, returning the unique id assigned to it.
    pub(crate) fn insert(&mut self, event: SuiteEvent) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(PendingEntry { id, event });
        id
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Isolates the events of the suite closed by the terminating event with
    /// id `terminating_id`, removes them from the set, and returns them
    /// sorted by ordinal.
    ///
    /// The suite's generation is identified by the terminating event's
    /// ordinal prefix. An event whose ordinal parent equals that prefix is
    /// part of the suite's body; the event whose ordinal *is* the prefix is
    /// the opening SuiteStarting. Events of still-running nested suites have
    /// deeper ordinals and stay in the set, as do sibling suites at other
    /// prefixes.
    ///
    /// # Panics
    ///
    /// Panics if no SuiteStarting opens the generation, if another suite
    /// terminating event is unresolved at the same prefix, or if the
    /// terminating event's ordinal is empty. These indicate a defective
    /// upstream event source, not recoverable input.
    pub(crate) fn extract_suite(&mut self, terminating_id: u64) -> Vec<SuiteEvent> {
        let terminating = self
            .entries
            .iter()
            .find(|entry| entry.id == terminating_id)
            .unwrap_or_else(|| panic!("terminating event {terminating_id} is not pending"));
        assert!(
            terminating.event.kind.is_suite_terminating(),
            "event {} at ordinal {} does not terminate a suite",
            terminating.event.kind.name(),
            terminating.event.ordinal,
        );
        let terminating_ordinal = terminating.event.ordinal.clone();
        let prefix = terminating_ordinal.parent().unwrap_or_else(|| {
            panic!(
                "suite terminating event {} has an empty ordinal",
                terminating.event.kind.name()
            )
        });

        let mut selected: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| {
                entry.event.ordinal.parent().as_ref() == Some(&prefix)
                    || entry.event.ordinal == prefix
            })
            .map(|(index, _)| index)
            .collect();
        selected.sort_by(|&a, &b| {
            let (a, b) = (&self.entries[a], &self.entries[b]);
            a.event
                .ordinal
                .cmp(&b.event.ordinal)
                .then(a.id.cmp(&b.id))
        });

        // The opening boundary is the first SuiteStarting in generation
        // order; the closing boundary is the terminating event itself.
        let start_pos = selected
            .iter()
            .position(|&index| {
                matches!(
                    self.entries[index].event.kind,
                    SuiteEventKind::SuiteStarting { .. }
                )
            })
            .unwrap_or_else(|| {
                panic!("no SuiteStarting pending for suite closed at ordinal {terminating_ordinal}")
            });
        let end_pos = selected
            .iter()
            .position(|&index| self.entries[index].id == terminating_id)
            .expect("the terminating event belongs to its own generation");
        assert!(
            start_pos <= end_pos,
            "SuiteStarting at ordinal {} follows its terminating event at ordinal {}",
            self.entries[selected[start_pos]].event.ordinal,
            terminating_ordinal,
        );
        for &index in &selected[start_pos..end_pos] {
            let entry = &self.entries[index];
            assert!(
                !entry.event.kind.is_suite_terminating(),
                "unresolved {} at ordinal {} while closing the suite at ordinal {}",
                entry.event.kind.name(),
                entry.event.ordinal,
                terminating_ordinal,
            );
        }

        let interval: HashSet<u64> = selected[start_pos..=end_pos]
            .iter()
            .map(|&index| self.entries[index].id)
            .collect();
        let (mut extracted, remaining): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| interval.contains(&entry.id));
        self.entries = remaining;
        extracted.sort_by(|a, b| a.event.ordinal.cmp(&b.event.ordinal).then(a.id.cmp(&b.id)));
        extracted.into_iter().map(|entry| entry.event).collect()
    }
}
