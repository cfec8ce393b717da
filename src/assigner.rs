use crate::data::{
    Day, FacultyLoad, Room, ScheduleEntry, ScheduleSummary, SubjectFacultyPair, TimeLabel,
};
use crate::error::AssignError;
use itertools::Itertools;
use log::{debug, trace};
use rand::Rng;
use std::collections::HashSet;

/// Redraws allowed after the first room draw before a same-day repeat is accepted.
pub const ROOM_RETRY_LIMIT: usize = 10;

/// Fills every (day, time) slot with a random subject/faculty pair and room.
///
/// Slots are emitted day-major, then in time order, so the output has exactly
/// `days.len() * times.len()` entries. Rooms already used on the same day are
/// redrawn up to [`ROOM_RETRY_LIMIT`] times; after that the last draw is kept,
/// so a day may still repeat a room when the pool is smaller than its slot count.
///
/// Both pools must be non-empty. Empty `days` or `times` give an empty schedule.
pub fn generate_schedule<R: Rng>(
    days: &[Day],
    times: &[TimeLabel],
    subject_pool: &[SubjectFacultyPair],
    room_pool: &[Room],
    rng: &mut R,
) -> Result<Vec<ScheduleEntry>, AssignError> {
    if subject_pool.is_empty() {
        return Err(AssignError::EmptySubjectPool);
    }
    if room_pool.is_empty() {
        return Err(AssignError::EmptyRoomPool);
    }

    debug!(
        "Assigning {} slots from {} subjects and {} rooms",
        days.len() * times.len(),
        subject_pool.len(),
        room_pool.len()
    );

    let mut schedule = Vec::with_capacity(days.len() * times.len());
    for day in days {
        let mut used_rooms: HashSet<&str> = HashSet::new();
        for time in times {
            let pair = &subject_pool[rng.random_range(0..subject_pool.len())];

            let mut room = &room_pool[rng.random_range(0..room_pool.len())];
            let mut retries = 0;
            while used_rooms.contains(room.as_str()) && retries < ROOM_RETRY_LIMIT {
                room = &room_pool[rng.random_range(0..room_pool.len())];
                retries += 1;
            }
            if used_rooms.contains(room.as_str()) {
                trace!("{} {}: room {} repeated after {} retries", day, time, room, retries);
            }
            used_rooms.insert(room.as_str());

            schedule.push(ScheduleEntry {
                day: day.clone(),
                time: time.clone(),
                subject_name: pair.subject_name.clone(),
                faculty_name: pair.faculty_name.clone(),
                room: room.clone(),
            });
        }
    }

    Ok(schedule)
}

pub fn summarize(entries: &[ScheduleEntry]) -> ScheduleSummary {
    ScheduleSummary {
        total_slots: entries.len(),
        subjects: entries.iter().map(|e| &e.subject_name).unique().count(),
        faculty: entries.iter().map(|e| &e.faculty_name).unique().count(),
        rooms: entries.iter().map(|e| &e.room).unique().count(),
        faculty_load: faculty_load(entries),
    }
}

/// Slots per faculty member, busiest first. Ties keep first-appearance order.
pub fn faculty_load(entries: &[ScheduleEntry]) -> Vec<FacultyLoad> {
    let counts = entries.iter().map(|e| &e.faculty_name).counts();
    let mut load: Vec<FacultyLoad> = entries
        .iter()
        .map(|e| &e.faculty_name)
        .unique()
        .map(|faculty| FacultyLoad {
            faculty: faculty.clone(),
            slots: counts[faculty],
        })
        .collect();
    load.sort_by(|a, b| b.slots.cmp(&a.slots));
    load
}
