pub mod availability_modal;
pub mod calendar;
pub mod calendar_toolbar;
