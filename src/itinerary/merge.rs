//! Bulk reconciliation of day-shaped update records
//!
//! Two keying modes exist because array position is not stable across
//! reordering and the ordinal label is not stable across insertion or
//! deletion. Manual edits and single-day revisions match on the stable
//! identity; full-trip regeneration context matches on the ordinal label
//! because the external generator never sees identities. Label matching
//! carries the precondition that the updates cover existing labels
//! exactly; a mismatch is reported instead of silently dropped.

use indexmap::IndexMap;
use thiserror::Error;
use uuid::Uuid;

use crate::models::day::{Day, DayPayload};

/// Which field an update record is matched on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeKey {
    /// Stable day identity (manual edits, single-day revisions)
    Identity,
    /// Ordinal label (full-trip regeneration context)
    Label,
}

/// Counts reported by a bulk merge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Existing days replaced by a matching update
    pub matched: usize,
    /// Identity-keyed updates matching no existing day
    pub ignored: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MergeError {
    #[error("update record is missing its {0} key")]
    MissingKey(&'static str),

    #[error("duplicate update key: {0}")]
    DuplicateKey(String),

    #[error("{0} update record(s) matched no existing day label")]
    UnmatchedLabels(usize),
}

/// Merge update records into the existing sequence by the given key.
///
/// Each existing day with a matching update has its content replaced in
/// place; its identity and position never change. Existing days without
/// a match are untouched. Derived fields are not recomputed here; the
/// caller recomputes after the merge.
pub fn bulk_merge(
    days: &mut [Day],
    updates: Vec<DayPayload>,
    key: MergeKey,
) -> Result<MergeOutcome, MergeError> {
    let mut lookup: IndexMap<String, DayPayload> = IndexMap::with_capacity(updates.len());
    for update in updates {
        let k = match key {
            MergeKey::Identity => update
                .id
                .map(|id| id.to_string())
                .ok_or(MergeError::MissingKey("identity"))?,
            MergeKey::Label => update
                .label
                .clone()
                .ok_or(MergeError::MissingKey("label"))?,
        };
        if lookup.insert(k.clone(), update).is_some() {
            return Err(MergeError::DuplicateKey(k));
        }
    }

    let mut matched = 0;
    for day in days.iter_mut() {
        let k = match key {
            MergeKey::Identity => day.id.to_string(),
            MergeKey::Label => day.label.clone(),
        };
        if let Some(update) = lookup.shift_remove(&k) {
            apply_payload(day, update);
            matched += 1;
        }
    }

    let unmatched = lookup.len();
    if key == MergeKey::Label && unmatched > 0 {
        return Err(MergeError::UnmatchedLabels(unmatched));
    }
    Ok(MergeOutcome {
        matched,
        ignored: unmatched,
    })
}

/// Replace the whole sequence with freshly identified records.
///
/// Used by full-trip regeneration and trip setup from imported payloads:
/// the prior sequence's identities and length are irrelevant. Carried
/// identities are honored so re-imports stay stable; records without one
/// get a fresh identity.
pub fn replace_all(updates: Vec<DayPayload>) -> Vec<Day> {
    updates
        .into_iter()
        .map(|update| {
            let mut day = Day {
                id: update.id.unwrap_or_else(Uuid::new_v4),
                label: String::new(),
                date: chrono::NaiveDate::MIN,
                weekday: String::new(),
                title: String::new(),
                description: String::new(),
                location: String::new(),
                background_url: None,
                weather: None,
                tips: None,
                accommodation: None,
                pass_name: None,
                events: Vec::new(),
            };
            apply_payload(&mut day, update);
            day
        })
        .collect()
}

/// Copy an update's content onto a day, preserving the day's identity
/// and derived fields.
fn apply_payload(day: &mut Day, update: DayPayload) {
    day.title = update.title;
    day.description = update.description;
    day.location = update.location;
    day.background_url = update.background_url;
    day.weather = update.weather;
    day.tips = update.tips;
    day.accommodation = update.accommodation;
    day.pass_name = update.pass_name;
    day.events = update.events;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::reconciler::placeholder_sequence;
    use crate::models::enums::Season;
    use chrono::NaiveDate;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 23).unwrap()
    }

    fn sequence(n: u32) -> Vec<Day> {
        let mut days = placeholder_sequence(start(), n, Season::Winter);
        for (i, day) in days.iter_mut().enumerate() {
            day.title = format!("title-{}", i + 1);
        }
        days
    }

    fn payload(title: &str) -> DayPayload {
        DayPayload {
            id: None,
            label: None,
            date: None,
            weekday: None,
            title: title.to_string(),
            description: "updated".to_string(),
            location: "Kyoto".to_string(),
            background_url: None,
            weather: None,
            tips: Some("bring an umbrella".to_string()),
            accommodation: None,
            pass_name: None,
            events: Vec::new(),
        }
    }

    #[test]
    fn identity_merge_replaces_content_and_keeps_identity_and_position() {
        let mut days = sequence(3);
        let target = days[1].id;
        let mut update = payload("revised");
        update.id = Some(target);

        let outcome = bulk_merge(&mut days, vec![update], MergeKey::Identity).unwrap();
        assert_eq!(outcome, MergeOutcome { matched: 1, ignored: 0 });
        assert_eq!(days[1].id, target);
        assert_eq!(days[1].title, "revised");
        assert_eq!(days[1].location, "Kyoto");
        // Neighbors untouched.
        assert_eq!(days[0].title, "title-1");
        assert_eq!(days[2].title, "title-3");
    }

    #[test]
    fn identity_merge_ignores_unknown_identity() {
        let mut days = sequence(2);
        let before = days.clone();
        let mut update = payload("orphan");
        update.id = Some(Uuid::new_v4());

        let outcome = bulk_merge(&mut days, vec![update], MergeKey::Identity).unwrap();
        assert_eq!(outcome, MergeOutcome { matched: 0, ignored: 1 });
        assert_eq!(days, before);
    }

    #[test]
    fn identity_merge_requires_the_key() {
        let mut days = sequence(2);
        let err = bulk_merge(&mut days, vec![payload("no-id")], MergeKey::Identity).unwrap_err();
        assert_eq!(err, MergeError::MissingKey("identity"));
    }

    #[test]
    fn label_merge_matches_each_label_once() {
        let mut days = sequence(3);
        let ids: Vec<Uuid> = days.iter().map(|d| d.id).collect();
        let updates: Vec<DayPayload> = (1..=3)
            .map(|n| {
                let mut p = payload(&format!("generated-{n}"));
                p.label = Some(format!("Day {n}"));
                p
            })
            .collect();

        let outcome = bulk_merge(&mut days, updates, MergeKey::Label).unwrap();
        assert_eq!(outcome.matched, 3);
        for (i, day) in days.iter().enumerate() {
            assert_eq!(day.title, format!("generated-{}", i + 1));
            // Identities survive a label-keyed merge.
            assert_eq!(day.id, ids[i]);
        }
    }

    #[test]
    fn label_merge_reports_unmatched_updates() {
        let mut days = sequence(2);
        let mut stray = payload("stray");
        stray.label = Some("Day 9".to_string());
        let err = bulk_merge(&mut days, vec![stray], MergeKey::Label).unwrap_err();
        assert_eq!(err, MergeError::UnmatchedLabels(1));
    }

    #[test]
    fn duplicate_update_keys_are_rejected() {
        let mut days = sequence(2);
        let mut a = payload("a");
        a.label = Some("Day 1".to_string());
        let mut b = payload("b");
        b.label = Some("Day 1".to_string());
        let err = bulk_merge(&mut days, vec![a, b], MergeKey::Label).unwrap_err();
        assert_eq!(err, MergeError::DuplicateKey("Day 1".to_string()));
    }

    #[test]
    fn replace_all_yields_fresh_identities() {
        let old = sequence(3);
        let old_ids: Vec<Uuid> = old.iter().map(|d| d.id).collect();
        let updates: Vec<DayPayload> = (1..=5).map(|n| payload(&format!("new-{n}"))).collect();

        let days = replace_all(updates);
        assert_eq!(days.len(), 5);
        for day in &days {
            assert!(!old_ids.contains(&day.id));
        }
    }

    #[test]
    fn replace_all_honors_carried_identities() {
        let keep = Uuid::new_v4();
        let mut p = payload("kept");
        p.id = Some(keep);
        let days = replace_all(vec![p]);
        assert_eq!(days[0].id, keep);
    }
}
