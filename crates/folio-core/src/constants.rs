use std::time::Duration;

// Page-level tuning shared by the router and the page widgets.

// Sections
pub const DEFAULT_SECTION_ID: &str = "home";
pub const SKILLS_SECTION_ID: &str = "skills"; // always replays its animation on entry

// Router
pub const FOCUS_DELAY_MS: u64 = 60; // after the show class lands, before focus()

// Typing loop
pub const TYPE_DELAY_MS: u64 = 90;
pub const DELETE_DELAY_MS: u64 = 40;
pub const TYPING_PAUSE_MS: u64 = 1200; // hold on a fully typed phrase

// Skills
pub const SKILL_FILL_DELAY_MS: u64 = 150;
pub const SKILL_PCT_MAX: u8 = 100;

// Toast
pub const TOAST_MS: u64 = 3000;

pub const HERO_PHRASES: &[&str] = &[
    "Web Developer",
    "Backend Developer",
    "Database Developer",
    "UI/UX Designer",
    "OS Designer",
    "Hardcore Programmer",
];

#[inline]
pub fn focus_delay() -> Duration {
    Duration::from_millis(FOCUS_DELAY_MS)
}
