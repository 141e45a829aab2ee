//! Time Slot Utilities
//!
//! Half-hour time labels for the entry form's time picker.

/// Minutes between two consecutive slots
pub const SLOT_MINUTES: u32 = 30;

/// Number of slots in a day
pub const SLOTS_PER_DAY: usize = (24 * 60 / SLOT_MINUTES) as usize;

/// Lazy iterator over "HH:MM" labels from 00:00 to 23:30
#[derive(Debug, Clone, Default)]
pub struct TimeSlots {
    next: usize,
}

impl TimeSlots {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Iterator for TimeSlots {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.next >= SLOTS_PER_DAY {
            return None;
        }
        let minutes = self.next as u32 * SLOT_MINUTES;
        self.next += 1;
        Some(format!("{:02}:{:02}", minutes / 60, minutes % 60))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = SLOTS_PER_DAY - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TimeSlots {}

/// All time options, in display order
pub fn time_options() -> Vec<String> {
    TimeSlots::new().collect()
}
