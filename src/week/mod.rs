pub use self::{
    definition::WeekDefinition,
    year_week::{WeekDates, YearWeek},
};

mod definition;
mod year_week;
