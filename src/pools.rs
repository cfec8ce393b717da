use crate::data::{Room, SubjectFacultyPair, TimeLabel, WORKING_DAYS};
use crate::error::AssignError;
use log::trace;

pub const MAX_CLASSES_PER_DAY: usize = 48;
pub const MAX_ROOMS: usize = 500;
pub const MAX_SLOTS: usize = 5_000;

/// Parses one `Subject :: Faculty` pair per line. `-` also separates the two halves.
pub fn parse_subject_lines(text: &str) -> Vec<SubjectFacultyPair> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let normalized = line.replace("::", "-");
            let mut parts = normalized.split('-').map(str::trim);
            let subject = parts.next().filter(|s| !s.is_empty()).unwrap_or("Subject");
            let faculty = parts.next().filter(|s| !s.is_empty()).unwrap_or("Faculty");
            SubjectFacultyPair::new(subject, faculty)
        })
        .collect()
}

pub fn parse_room_lines(text: &str) -> Vec<Room> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Grows or shrinks the room pool to `count`, naming new rooms `Room-{n}`.
/// A zero count leaves the pool as is.
pub fn resize_rooms(mut rooms: Vec<Room>, count: usize) -> Result<Vec<Room>, AssignError> {
    if count > MAX_ROOMS {
        return Err(AssignError::TooManyRooms {
            requested: count,
            max: MAX_ROOMS,
        });
    }
    if count == 0 {
        return Ok(rooms);
    }
    rooms.extend((rooms.len() + 1..=count).map(|n| format!("Room-{}", n)));
    rooms.truncate(count);
    trace!("Room pool resized to {}", rooms.len());
    Ok(rooms)
}

/// Grows or shrinks the period list to `count`. Padding labels are placeholders,
/// not real clock times.
pub fn resize_times(
    mut times: Vec<TimeLabel>,
    count: usize,
) -> Result<Vec<TimeLabel>, AssignError> {
    if count > MAX_CLASSES_PER_DAY {
        return Err(AssignError::TooManyClasses {
            requested: count,
            max: MAX_CLASSES_PER_DAY,
        });
    }
    if count == 0 {
        return Ok(times);
    }
    times.extend((times.len() + 1..=count).map(|n| format!("X{:02}:00-{:02}:00", n, n + 1)));
    times.truncate(count);
    trace!("Time slots resized to {}", times.len());
    Ok(times)
}

/// Rejects grids with more than [`MAX_SLOTS`] cells before any are allocated.
pub fn check_grid(days: usize, times: usize) -> Result<(), AssignError> {
    let requested = days.saturating_mul(times);
    if requested > MAX_SLOTS {
        return Err(AssignError::TooManySlots {
            requested,
            max: MAX_SLOTS,
        });
    }
    Ok(())
}

pub fn is_working_day(day: &str) -> bool {
    WORKING_DAYS.contains(&day)
}
