//! Fixed weekly-grid constants and label helpers.
//!
//! These values are part of the external contract: 6 teaching days,
//! 8 slots per day with slot 4 blocked for lunch, and 10 rooms split
//! into lecture rooms (0-4, labeled from 101) and lab rooms (5-9,
//! labeled from 201).

pub const NUM_DAYS: usize = 6;
pub const SLOTS_PER_DAY: usize = 8;
pub const LUNCH_SLOT: usize = 4;
pub const NUM_ROOMS: usize = 10;
/// Rooms at or above this index are lab rooms.
pub const FIRST_LAB_ROOM: usize = 5;

const LECTURE_ROOM_BASE: usize = 101;
const LAB_ROOM_BASE: usize = 201;

pub const DAYS: [&str; NUM_DAYS] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Human-readable time ranges for each slot index. Slot 4 is the lunch break.
pub const SLOT_TIMES: [&str; SLOTS_PER_DAY] = [
    "8:00 AM - 9:00 AM",
    "9:00 AM - 10:00 AM",
    "10:15 AM - 11:15 AM",
    "11:15 AM - 12:15 PM",
    "12:15 PM - 1:15 PM",
    "2:15 PM - 3:15 PM",
    "3:15 PM - 4:15 PM",
    "4:30 PM - 5:30 PM",
];

/// `"Lab 20x"` for lab rooms, `"Room 10x"` for lecture rooms.
pub fn room_label(room: usize) -> String {
    if room >= FIRST_LAB_ROOM {
        format!("Lab {}", room + LAB_ROOM_BASE)
    } else {
        format!("Room {}", room + LECTURE_ROOM_BASE)
    }
}

/// Timetable key for a (day, slot) cell, e.g. `"Monday-3"`.
pub fn slot_key(day: usize, slot: usize) -> String {
    format!("{}-{}", DAYS[day], slot)
}

/// `"Batch A"`, `"Batch B"`, ... by zero-based index. Indices past the
/// alphabet continue through the following code points; the handful of
/// invalid code points fall back to the numeric index.
pub fn batch_label(batch: usize) -> String {
    let letter = u32::try_from(batch)
        .ok()
        .and_then(|b| (u32::from(b'A')).checked_add(b))
        .and_then(char::from_u32);
    match letter {
        Some(c) => format!("Batch {c}"),
        None => format!("Batch {batch}"),
    }
}
