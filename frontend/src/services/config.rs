use shared::ClientVariant;
use web_sys::Element;

/// Id of the element the calendar is mounted into
pub const CONTAINER_ID: &str = "calendar";

/// Per-calendar settings read from the container's data attributes.
///
/// `data-team-id` selects the team-scoped variant; without it the calendar
/// talks to the global endpoints. `data-api-base` prefixes every request and
/// defaults to the page's own origin.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarConfig {
    pub variant: ClientVariant,
    pub api_base: String,
}

impl CalendarConfig {
    pub fn from_element(element: &Element) -> Self {
        let team_id = element.get_attribute("data-team-id");
        Self {
            variant: ClientVariant::from_team_id(team_id.as_deref()),
            api_base: element.get_attribute("data-api-base").unwrap_or_default(),
        }
    }
}
