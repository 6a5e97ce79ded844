//! Local timetable edits.
//!
//! The timetable lives in process memory; edits mutate it in place and are
//! pushed to the backend as a whole via `PUT /timetable`. Pushed
//! `timetable_updated` / `periods_updated` events replace entries wholesale.

use rollcall_types::{TimetableEntry, TimetableSlot};

/// Replaces one day's slots, creating the day entry if it is missing.
pub fn replace_day(entries: &mut Vec<TimetableEntry>, day: &str, slots: Vec<TimetableSlot>) {
    match entries.iter_mut().find(|e| e.day == day) {
        Some(entry) => entry.slots = slots,
        None => entries.push(TimetableEntry {
            day: day.to_string(),
            slots,
        }),
    }
}

/// Appends a slot to a day, creating the day entry if it is missing.
pub fn add_slot(entries: &mut Vec<TimetableEntry>, day: &str, slot: TimetableSlot) {
    match entries.iter_mut().find(|e| e.day == day) {
        Some(entry) => entry.slots.push(slot),
        None => entries.push(TimetableEntry {
            day: day.to_string(),
            slots: vec![slot],
        }),
    }
}

/// Removes the slot at `index` from a day. Returns the removed slot, or
/// `None` when the day or index does not exist.
pub fn remove_slot(
    entries: &mut [TimetableEntry],
    day: &str,
    index: usize,
) -> Option<TimetableSlot> {
    let entry = entries.iter_mut().find(|e| e.day == day)?;
    if index >= entry.slots.len() {
        return None;
    }
    Some(entry.slots.remove(index))
}

/// Overwrites the slot at `index` in a day. Returns `false` when the day or
/// index does not exist.
pub fn update_slot(
    entries: &mut [TimetableEntry],
    day: &str,
    index: usize,
    slot: TimetableSlot,
) -> bool {
    match entries
        .iter_mut()
        .find(|e| e.day == day)
        .and_then(|e| e.slots.get_mut(index))
    {
        Some(existing) => {
            *existing = slot;
            true
        }
        None => false,
    }
}
