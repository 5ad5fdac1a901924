use serde::Serialize;

use crate::models::{Slot, Weekday};

/// Sorts by weekday rank, then start time. The sort is stable, so slots
/// with equal keys keep the order the store returned them in.
pub fn sort_slots(slots: &mut [Slot]) {
    slots.sort_by_key(|slot| (slot.weekday.rank(), slot.start_time));
}

/// One day of a weekly timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimetableDay {
    pub weekday: Weekday,
    pub slots: Vec<Slot>,
}

/// Groups slots by weekday in rank order, dropping days with no sessions.
pub fn group_by_weekday(mut slots: Vec<Slot>) -> Vec<TimetableDay> {
    sort_slots(&mut slots);

    let mut days: Vec<TimetableDay> = Vec::new();
    for slot in slots {
        match days.last_mut() {
            Some(day) if day.weekday == slot.weekday => day.slots.push(slot),
            _ => days.push(TimetableDay {
                weekday: slot.weekday,
                slots: vec![slot],
            }),
        }
    }
    days
}
