use chrono::{Datelike, Days, Months, NaiveDate, NaiveTime, Timelike};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarView {
    /// One week, one column per day, hourly rows
    WeekTimeGrid,
    /// Whole weeks covering one month
    MonthGrid,
}

impl CalendarView {
    pub fn label(&self) -> &'static str {
        match self {
            CalendarView::WeekTimeGrid => "week",
            CalendarView::MonthGrid => "month",
        }
    }
}

/// Visible time range of the week grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotBounds {
    pub min: NaiveTime,
    pub max: NaiveTime,
}

impl SlotBounds {
    /// Hour rows to draw. A partial last hour still gets a row.
    pub fn hours(&self) -> Vec<u32> {
        let end = if self.max.minute() == 0 && self.max.second() == 0 {
            self.max.hour()
        } else {
            self.max.hour() + 1
        };
        (self.min.hour()..end).collect()
    }
}

/// Which view is shown and which date it is anchored on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub view: CalendarView,
    pub focus: NaiveDate,
}

impl ViewState {
    pub fn new(view: CalendarView, focus: NaiveDate) -> Self {
        Self { view, focus }
    }

    pub fn previous(&mut self) {
        self.focus = match self.view {
            CalendarView::WeekTimeGrid => self.focus.checked_sub_days(Days::new(7)),
            CalendarView::MonthGrid => first_of_month(self.focus).checked_sub_months(Months::new(1)),
        }
        .unwrap_or(self.focus);
    }

    pub fn next(&mut self) {
        self.focus = match self.view {
            CalendarView::WeekTimeGrid => self.focus.checked_add_days(Days::new(7)),
            CalendarView::MonthGrid => first_of_month(self.focus).checked_add_months(Months::new(1)),
        }
        .unwrap_or(self.focus);
    }

    pub fn go_to(&mut self, date: NaiveDate) {
        self.focus = date;
    }

    pub fn switch_to(&mut self, view: CalendarView) {
        self.view = view;
    }

    /// Every day drawn by the current view, Sunday first
    pub fn visible_days(&self) -> Vec<NaiveDate> {
        let (first, last) = match self.view {
            CalendarView::WeekTimeGrid => {
                let start = week_start(self.focus);
                (start, start + Days::new(6))
            }
            CalendarView::MonthGrid => {
                let first = first_of_month(self.focus);
                let last = last_of_month(self.focus);
                let end = last + Days::new(6 - u64::from(last.weekday().num_days_from_sunday()));
                (week_start(first), end)
            }
        };

        first.iter_days().take_while(|day| *day <= last).collect()
    }

    /// Whether `date` belongs to the month in focus (month grid padding days do not)
    pub fn in_focus_month(&self, date: NaiveDate) -> bool {
        date.year() == self.focus.year() && date.month() == self.focus.month()
    }

    pub fn title(&self) -> String {
        match self.view {
            CalendarView::MonthGrid => self.focus.format("%B %Y").to_string(),
            CalendarView::WeekTimeGrid => {
                let start = week_start(self.focus);
                let end = start + Days::new(6);
                if start.year() != end.year() {
                    format!("{} - {}", start.format("%b %-d, %Y"), end.format("%b %-d, %Y"))
                } else if start.month() != end.month() {
                    format!("{} - {}", start.format("%b %-d"), end.format("%b %-d, %Y"))
                } else {
                    format!("{} - {}", start.format("%b %-d"), end.format("%-d, %Y"))
                }
            }
        }
    }
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_sunday()))
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// Value handed to the date-click handler for a cell
pub fn cell_date_str(date: NaiveDate, hour: Option<u32>) -> String {
    match hour {
        Some(hour) => format!("{}T{:02}:00:00", date.format("%Y-%m-%d"), hour),
        None => date.format("%Y-%m-%d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_starts_on_sunday() {
        // 2024-12-04 is a Wednesday
        let state = ViewState::new(CalendarView::WeekTimeGrid, ymd(2024, 12, 4));
        let days = state.visible_days();

        assert_eq!(days.len(), 7);
        assert_eq!(days[0], ymd(2024, 12, 1));
        assert_eq!(days[6], ymd(2024, 12, 7));
        assert_eq!(state.title(), "Dec 1 - 7, 2024");
    }

    #[test]
    fn test_week_title_across_boundaries() {
        let state = ViewState::new(CalendarView::WeekTimeGrid, ymd(2024, 12, 31));
        assert_eq!(state.title(), "Dec 29, 2024 - Jan 4, 2025");

        let state = ViewState::new(CalendarView::WeekTimeGrid, ymd(2024, 11, 28));
        assert_eq!(state.title(), "Nov 24 - 30, 2024");

        let state = ViewState::new(CalendarView::WeekTimeGrid, ymd(2024, 10, 29));
        assert_eq!(state.title(), "Oct 27 - Nov 2, 2024");
    }

    #[test]
    fn test_month_grid_covers_whole_weeks() {
        let state = ViewState::new(CalendarView::MonthGrid, ymd(2024, 12, 15));
        let days = state.visible_days();

        assert_eq!(days.first(), Some(&ymd(2024, 12, 1)));
        assert_eq!(days.last(), Some(&ymd(2025, 1, 4)));
        assert_eq!(days.len() % 7, 0);
        assert!(!state.in_focus_month(ymd(2025, 1, 4)));
        assert_eq!(state.title(), "December 2024");

        // February 2025 starts on a Saturday
        let state = ViewState::new(CalendarView::MonthGrid, ymd(2025, 2, 10));
        let days = state.visible_days();
        assert_eq!(days.first(), Some(&ymd(2025, 1, 26)));
        assert_eq!(days.last(), Some(&ymd(2025, 3, 1)));
    }

    #[test]
    fn test_navigation() {
        let mut state = ViewState::new(CalendarView::WeekTimeGrid, ymd(2024, 12, 4));
        state.next();
        assert_eq!(state.focus, ymd(2024, 12, 11));
        state.previous();
        state.previous();
        assert_eq!(state.focus, ymd(2024, 11, 27));

        state.switch_to(CalendarView::MonthGrid);
        state.next();
        assert_eq!(state.focus, ymd(2024, 12, 1));
        state.next();
        assert_eq!(state.focus, ymd(2025, 1, 1));
        state.previous();
        state.previous();
        assert_eq!(state.focus, ymd(2024, 11, 1));

        state.go_to(ymd(2024, 3, 9));
        assert_eq!(state.title(), "March 2024");
    }

    #[test]
    fn test_cell_date_str() {
        assert_eq!(cell_date_str(ymd(2024, 12, 4), Some(9)), "2024-12-04T09:00:00");
        assert_eq!(cell_date_str(ymd(2024, 12, 4), None), "2024-12-04");
    }
}
