pub mod calendar;
pub mod countdown;
pub mod fasting;
pub mod header;
pub mod statusbar;
pub mod timetable;
