use chrono::NaiveTime;

use crate::view::{CalendarView, SlotBounds};

/// Server message that is shown as a blocking alert instead of inline text
pub const AUTHORIZATION_ERROR: &str =
    "Error: You are not authorized to add availability for this team.";
pub const ADD_TRANSPORT_ERROR: &str = "An error occurred. Please try again.";
pub const DELETE_SUCCESS: &str = "Availability deleted successfully.";
pub const DELETE_FAILED: &str = "Error: Could not delete availability.";
pub const DELETE_TRANSPORT_ERROR: &str = "An error occurred while deleting the availability.";

/// How a delete reply's HTTP status is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStatusPolicy {
    /// Read the JSON body whatever the status; success needs status 200 and `success: true`
    ParseRegardless,
    /// Non-2xx is a transport failure and the body is never read
    RejectErrorStatus,
}

/// The two deployed flavours of the calendar page.
///
/// `Team` is the richer page embedded in a team workspace; `Simplified` is the
/// earlier global calendar. Their validation and reply handling differ on
/// purpose and are kept apart here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientVariant {
    Team { team_id: String },
    Simplified,
}

impl ClientVariant {
    pub fn team(team_id: impl Into<String>) -> Self {
        ClientVariant::Team {
            team_id: team_id.into(),
        }
    }

    /// Team variant when the container carries a non-blank team id
    pub fn from_team_id(team_id: Option<&str>) -> Self {
        match team_id.map(str::trim) {
            Some(id) if !id.is_empty() => Self::team(id),
            _ => ClientVariant::Simplified,
        }
    }

    pub fn team_id(&self) -> Option<&str> {
        match self {
            ClientVariant::Team { team_id } => Some(team_id.as_str()),
            ClientVariant::Simplified => None,
        }
    }

    pub fn rejects_past_slots(&self) -> bool {
        matches!(self, ClientVariant::Team { .. })
    }

    pub fn sends_accept_header(&self) -> bool {
        matches!(self, ClientVariant::Team { .. })
    }

    pub fn alerts_authorization_errors(&self) -> bool {
        matches!(self, ClientVariant::Team { .. })
    }

    pub fn delete_policy(&self) -> DeleteStatusPolicy {
        match self {
            ClientVariant::Team { .. } => DeleteStatusPolicy::ParseRegardless,
            ClientVariant::Simplified => DeleteStatusPolicy::RejectErrorStatus,
        }
    }

    pub fn initial_view(&self) -> CalendarView {
        match self {
            ClientVariant::Team { .. } => CalendarView::WeekTimeGrid,
            ClientVariant::Simplified => CalendarView::MonthGrid,
        }
    }

    /// Views offered by the toolbar switch
    pub fn available_views(&self) -> &'static [CalendarView] {
        match self {
            ClientVariant::Team { .. } => &[CalendarView::WeekTimeGrid, CalendarView::MonthGrid],
            ClientVariant::Simplified => &[CalendarView::MonthGrid],
        }
    }

    pub fn slot_bounds(&self) -> SlotBounds {
        let end_of_day = hms(23, 59, 59);
        match self {
            ClientVariant::Team { .. } => SlotBounds {
                min: hms(8, 0, 0),
                max: end_of_day,
            },
            ClientVariant::Simplified => SlotBounds {
                min: hms(0, 0, 0),
                max: end_of_day,
            },
        }
    }

    /// Date stored in the form draft for a clicked cell
    pub fn selected_date(&self, date_str: &str) -> String {
        match self {
            ClientVariant::Team { .. } => date_str.split('T').next().unwrap_or_default().to_string(),
            ClientVariant::Simplified => date_str.to_string(),
        }
    }

    pub fn delete_prompt(&self, title: &str) -> String {
        match self {
            ClientVariant::Team { .. } => {
                format!("Do you want to delete this availability for {}?", title)
            }
            ClientVariant::Simplified => {
                format!("Do you want to delete the availability for {}?", title)
            }
        }
    }
}

fn hms(hour: u32, min: u32, sec: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, sec).unwrap_or_default()
}
