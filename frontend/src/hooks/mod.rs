pub mod use_availability_form;
pub mod use_calendar;
pub mod use_delete_availability;
