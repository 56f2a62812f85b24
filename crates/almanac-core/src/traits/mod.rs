mod calendar_engine;

pub use calendar_engine::ICalendarEngine;
