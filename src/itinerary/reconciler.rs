//! Structural operations on the day sequence

use chrono::{Duration, NaiveDate};
use thiserror::Error;
use uuid::Uuid;

use crate::models::day::{Day, WeatherSnapshot};
use crate::models::enums::Season;

/// Background image used for freshly created placeholder days
const PLACEHOLDER_BACKGROUND: &str =
    "https://images.unsplash.com/photo-1469854523086-cc02fe5d8800?q=80&w=1000";

/// Errors from structural day-sequence operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReconcileError {
    /// A trip must keep at least one day
    #[error("a trip must keep at least one day")]
    LastDay,

    #[error("no day with identity {0}")]
    UnknownDay(Uuid),
}

/// Recompute every day's derived fields from its position.
///
/// The day at index `i` gets label `"Day i+1"`, date `start + i` days and
/// the matching abbreviated weekday. Idempotent; called after every
/// structural mutation and after any start-date change.
pub fn recompute(days: &mut [Day], start_date: NaiveDate) {
    for (index, day) in days.iter_mut().enumerate() {
        let date = start_date + Duration::days(index as i64);
        day.label = format!("Day {}", index + 1);
        day.date = date;
        day.weekday = date.format("%a").to_string();
    }
}

fn placeholder_day(season: Season) -> Day {
    Day {
        id: Uuid::new_v4(),
        label: String::new(),
        date: NaiveDate::MIN,
        weekday: String::new(),
        title: "Open day".to_string(),
        description: "Tap edit to plan this day".to_string(),
        location: "Japan".to_string(),
        background_url: Some(PLACEHOLDER_BACKGROUND.to_string()),
        weather: Some(WeatherSnapshot {
            icon: season.placeholder_icon(),
            temperature: "--°C".to_string(),
        }),
        tips: None,
        accommodation: None,
        pass_name: None,
        events: Vec::new(),
    }
}

/// Build a fresh placeholder sequence of `count` days (setup wizard, reset)
pub fn placeholder_sequence(start_date: NaiveDate, count: u32, season: Season) -> Vec<Day> {
    let mut days: Vec<Day> = (0..count).map(|_| placeholder_day(season)).collect();
    recompute(&mut days, start_date);
    days
}

/// Append one placeholder day at the end of the sequence.
///
/// Always succeeds; returns the new day's identity.
pub fn append(days: &mut Vec<Day>, start_date: NaiveDate, season: Season) -> Uuid {
    let day = placeholder_day(season);
    let id = day.id;
    days.push(day);
    recompute(days, start_date);
    id
}

/// Remove the day with the given identity.
///
/// Rejected with [`ReconcileError::LastDay`] when the sequence holds a
/// single day; the sequence is left unchanged in every error case.
pub fn remove(days: &mut Vec<Day>, start_date: NaiveDate, id: Uuid) -> Result<(), ReconcileError> {
    if days.len() <= 1 {
        return Err(ReconcileError::LastDay);
    }
    let index = days
        .iter()
        .position(|d| d.id == id)
        .ok_or(ReconcileError::UnknownDay(id))?;
    days.remove(index);
    recompute(days, start_date);
    Ok(())
}

/// Relocate `moved_id` to the position `target_id` currently occupies.
///
/// Splice semantics: the moved day is taken out and reinserted at the
/// target's pre-removal index. No-op when the identities are equal or
/// either is not found. Note the asymmetry for non-adjacent moves: a
/// single inverse call does not restore the original order, only moving
/// the day back to its original index does.
pub fn reorder(days: &mut Vec<Day>, start_date: NaiveDate, moved_id: Uuid, target_id: Uuid) {
    if moved_id == target_id {
        return;
    }
    let (Some(old_index), Some(new_index)) = (
        days.iter().position(|d| d.id == moved_id),
        days.iter().position(|d| d.id == target_id),
    ) else {
        return;
    };
    let day = days.remove(old_index);
    days.insert(new_index, day);
    recompute(days, start_date);
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn recompute_derives_labels_dates_and_weekdays() {
        let days = sequence(4);
        for (i, day) in days.iter().enumerate() {
            assert_eq!(day.label, format!("Day {}", i + 1));
            assert_eq!(day.date, start() + Duration::days(i as i64));
        }
        // 2026-01-23 is a Friday
        assert_eq!(days[0].weekday, "Fri");
        assert_eq!(days[1].weekday, "Sat");
        assert_eq!(days[2].weekday, "Sun");
        assert_eq!(days[3].weekday, "Mon");
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut days = sequence(3);
        let once = days.clone();
        recompute(&mut days, start());
        assert_eq!(days, once);
    }

    #[test]
    fn append_adds_placeholder_with_fresh_identity() {
        let mut days = sequence(2);
        let existing: Vec<Uuid> = days.iter().map(|d| d.id).collect();
        let id = append(&mut days, start(), Season::Winter);
        assert_eq!(days.len(), 3);
        assert_eq!(days[2].id, id);
        assert!(!existing.contains(&id));
        assert_eq!(days[2].label, "Day 3");
        assert_eq!(days[2].date, start() + Duration::days(2));
        assert_eq!(
            days[2].weather.as_ref().unwrap().icon,
            crate::models::enums::WeatherIcon::Snow
        );
    }

    #[test]
    fn remove_rejects_last_remaining_day() {
        let mut days = sequence(1);
        let id = days[0].id;
        let before = days.clone();
        assert_eq!(remove(&mut days, start(), id), Err(ReconcileError::LastDay));
        assert_eq!(days, before);
        assert_eq!(days.len(), 1);
    }

    #[test]
    fn remove_unknown_identity_leaves_sequence_unchanged() {
        let mut days = sequence(3);
        let before = days.clone();
        let ghost = Uuid::new_v4();
        assert_eq!(
            remove(&mut days, start(), ghost),
            Err(ReconcileError::UnknownDay(ghost))
        );
        assert_eq!(days, before);
    }

    #[test]
    fn remove_reindexes_remainder() {
        let mut days = sequence(3);
        let middle = days[1].id;
        remove(&mut days, start(), middle).unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].title, "title-1");
        assert_eq!(days[1].title, "title-3");
        assert_eq!(days[1].label, "Day 2");
        assert_eq!(days[1].date, start() + Duration::days(1));
    }

    #[test]
    fn reorder_moves_day_to_target_position() {
        // Start date 2026-01-23, 3 days; move Day 3 to the front.
        let mut days = sequence(3);
        let day1 = days[0].id;
        let day3 = days[2].id;
        reorder(&mut days, start(), day3, day1);

        assert_eq!(days[0].title, "title-3");
        assert_eq!(days[1].title, "title-1");
        assert_eq!(days[2].title, "title-2");
        // Labels and dates follow the slot, not the content.
        assert_eq!(days[0].label, "Day 1");
        assert_eq!(days[1].label, "Day 2");
        assert_eq!(days[2].label, "Day 3");
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2026, 1, 23).unwrap());
        assert_eq!(days[1].date, NaiveDate::from_ymd_opt(2026, 1, 24).unwrap());
        assert_eq!(days[2].date, NaiveDate::from_ymd_opt(2026, 1, 25).unwrap());
        // Identities travel with the content.
        assert_eq!(days[0].id, day3);
    }

    #[test]
    fn adjacent_reorder_round_trips() {
        let mut days = sequence(3);
        let before: Vec<Uuid> = days.iter().map(|d| d.id).collect();
        let (a, b) = (days[0].id, days[1].id);
        reorder(&mut days, start(), a, b);
        reorder(&mut days, start(), b, a);
        let after: Vec<Uuid> = days.iter().map(|d| d.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn reorder_is_noop_for_equal_or_unknown_identities() {
        let mut days = sequence(3);
        let before = days.clone();
        let (first, second) = (days[0].id, days[1].id);
        reorder(&mut days, start(), second, second);
        assert_eq!(days, before);
        reorder(&mut days, start(), Uuid::new_v4(), first);
        assert_eq!(days, before);
        reorder(&mut days, start(), first, Uuid::new_v4());
        assert_eq!(days, before);
    }
}
