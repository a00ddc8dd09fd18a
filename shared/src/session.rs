use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};

use crate::api::{AddAvailabilityRequest, ApiResponse, DeleteReply};
use crate::color::{ChannelSource, ColorAssigner};
use crate::event::{AvailabilityEvent, ColoredEvent};
use crate::form::AvailabilityForm;
use crate::generation::{Generation, GenerationCounter};
use crate::outcome::{interpret_add, interpret_delete, AddOutcome, DeleteOutcome};
use crate::validation::ValidationError;
use crate::variant::ClientVariant;
use crate::view::ViewState;

/// State of the last event fetch, drives the calendar's loading / error indicator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed(String),
}

/// An add request that passed validation and is ready to send
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAdd {
    pub generation: Generation,
    pub request: AddAvailabilityRequest,
}

/// A confirmed delete, ready to send
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDelete {
    pub generation: Generation,
    pub event_id: u64,
}

/// Everything one calendar instance remembers during a page session.
///
/// Every handler takes the event payload it reacts to and returns what the page
/// has to do next. Responses carry the generation they were issued with; a
/// response that is no longer the latest of its kind is dropped and the handler
/// returns `None`. Deletes are tracked per event, so a delete of one event never
/// supersedes a delete of another.
pub struct CalendarSession<S> {
    variant: ClientVariant,
    colors: ColorAssigner<S>,
    form: AvailabilityForm,
    view: ViewState,
    events: Vec<ColoredEvent>,
    load_state: LoadState,
    fetches: GenerationCounter,
    adds: GenerationCounter,
    deletes: HashMap<u64, GenerationCounter>,
}

impl<S: ChannelSource> CalendarSession<S> {
    pub fn new(variant: ClientVariant, source: S, today: NaiveDate) -> Self {
        let view = ViewState::new(variant.initial_view(), today);
        Self {
            variant,
            colors: ColorAssigner::new(source),
            form: AvailabilityForm::default(),
            view,
            events: Vec::new(),
            load_state: LoadState::Loading,
            fetches: GenerationCounter::default(),
            adds: GenerationCounter::default(),
            deletes: HashMap::new(),
        }
    }

    pub fn variant(&self) -> &ClientVariant {
        &self.variant
    }

    pub fn form(&self) -> &AvailabilityForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut AvailabilityForm {
        &mut self.form
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    pub fn events(&self) -> &[ColoredEvent] {
        &self.events
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn color_for(&mut self, owner: &str) -> String {
        self.colors.color_for(owner)
    }

    /// Attach each owner's session color
    pub fn annotate(&mut self, events: Vec<AvailabilityEvent>) -> Vec<ColoredEvent> {
        events
            .into_iter()
            .map(|event| {
                let color = self.colors.color_for(&event.owner);
                ColoredEvent { event, color }
            })
            .collect()
    }

    pub fn begin_fetch(&mut self) -> Generation {
        if self.events.is_empty() {
            self.load_state = LoadState::Loading;
        }
        self.fetches.issue()
    }

    /// Store a fetched snapshot. Returns false when the response was stale.
    pub fn complete_fetch(&mut self, generation: Generation, events: Vec<AvailabilityEvent>) -> bool {
        if !self.fetches.is_current(generation) {
            return false;
        }
        self.events = self.annotate(events);
        self.load_state = LoadState::Loaded;
        true
    }

    /// Record a failed fetch; the previous snapshot stays on screen
    pub fn fail_fetch(&mut self, generation: Generation, message: String) -> bool {
        if !self.fetches.is_current(generation) {
            return false;
        }
        self.load_state = LoadState::Failed(message);
        true
    }

    /// Date-click handler
    pub fn click_date(&mut self, date_str: &str) {
        let date = self.variant.selected_date(date_str);
        self.form.select_date(date);
    }

    /// Submit handler. On `Err` nothing must be sent.
    pub fn submit_form(&mut self, now: NaiveDateTime) -> Result<PendingAdd, ValidationError> {
        let request = self.form.submit(&self.variant, now)?;
        Ok(PendingAdd {
            generation: self.adds.issue(),
            request,
        })
    }

    pub fn finish_add<E>(
        &mut self,
        generation: Generation,
        reply: Result<ApiResponse, E>,
    ) -> Option<AddOutcome> {
        if !self.adds.is_current(generation) {
            return None;
        }
        let outcome = interpret_add(&self.variant, reply);
        self.form.resolve(&outcome);
        Some(outcome)
    }

    /// Event-click handler.
    ///
    /// `confirm` is asked with the prompt text; declining, or an event without an
    /// id, yields `None` and nothing is sent.
    pub fn request_delete<F>(&mut self, event: &AvailabilityEvent, confirm: F) -> Option<PendingDelete>
    where
        F: FnOnce(&str) -> bool,
    {
        let event_id = event.id?;
        if !confirm(&self.variant.delete_prompt(&event.title)) {
            return None;
        }
        Some(PendingDelete {
            generation: self.deletes.entry(event_id).or_default().issue(),
            event_id,
        })
    }

    /// Applies a delete reply unless a newer delete of the same event was issued since
    pub fn finish_delete<E>(
        &mut self,
        pending: PendingDelete,
        reply: Result<DeleteReply, E>,
    ) -> Option<DeleteOutcome> {
        let current = self
            .deletes
            .get(&pending.event_id)
            .is_some_and(|counter| counter.is_current(pending.generation));
        if !current {
            return None;
        }
        Some(interpret_delete(&self.variant, reply))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormPhase;
    use crate::test_support::{LcgChannels, ScriptedChannels};
    use crate::view::CalendarView;
    use chrono::Days;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 4).unwrap()
    }

    fn now() -> NaiveDateTime {
        today().and_hms_opt(12, 0, 0).unwrap()
    }

    fn event(id: Option<u64>, owner: &str) -> AvailabilityEvent {
        AvailabilityEvent {
            id,
            title: format!("{}'s Availability", owner),
            start: "2024-12-05T09:00:00".to_string(),
            end: "2024-12-05T10:00:00".to_string(),
            owner: owner.to_string(),
        }
    }

    fn team_session() -> CalendarSession<LcgChannels> {
        CalendarSession::new(ClientVariant::team("9"), LcgChannels::new(7), today())
    }

    #[test]
    fn test_initial_view_follows_variant() {
        assert_eq!(team_session().view().view, CalendarView::WeekTimeGrid);

        let simplified = CalendarSession::new(ClientVariant::Simplified, LcgChannels::new(1), today());
        assert_eq!(simplified.view().view, CalendarView::MonthGrid);
        assert_eq!(simplified.load_state(), &LoadState::Loading);
    }

    #[test]
    fn test_fetch_annotates_with_stable_colors() {
        let mut session = CalendarSession::new(
            ClientVariant::team("9"),
            ScriptedChannels::new(&[10, 120, 30, 200, 20, 90]),
            today(),
        );

        let generation = session.begin_fetch();
        assert!(session.complete_fetch(
            generation,
            vec![event(Some(1), "alice"), event(Some(2), "bob"), event(Some(3), "alice")]
        ));

        let colors: Vec<&str> = session.events().iter().map(|e| e.color.as_str()).collect();
        assert_eq!(colors, ["rgb(10, 120, 30)", "rgb(200, 20, 90)", "rgb(10, 120, 30)"]);
        assert_eq!(session.load_state(), &LoadState::Loaded);

        // a refetch must not draw new colors for known owners
        let generation = session.begin_fetch();
        assert!(session.complete_fetch(generation, vec![event(Some(4), "bob")]));
        assert_eq!(session.events()[0].color, "rgb(200, 20, 90)");
    }

    #[test]
    fn test_stale_fetch_is_discarded() {
        let mut session = team_session();
        let first = session.begin_fetch();
        let second = session.begin_fetch();

        assert!(session.complete_fetch(second, vec![event(Some(1), "alice")]));
        assert!(!session.complete_fetch(first, vec![]));
        assert_eq!(session.events().len(), 1);
        assert!(!session.fail_fetch(first, "late failure".to_string()));
        assert_eq!(session.load_state(), &LoadState::Loaded);
    }

    #[test]
    fn test_fetch_failure_keeps_previous_events() {
        let mut session = team_session();
        let generation = session.begin_fetch();
        session.complete_fetch(generation, vec![event(Some(1), "alice")]);

        let generation = session.begin_fetch();
        assert_eq!(session.load_state(), &LoadState::Loaded);
        assert!(session.fail_fetch(generation, "Failed to fetch events".to_string()));
        assert_eq!(session.events().len(), 1);
        assert_eq!(
            session.load_state(),
            &LoadState::Failed("Failed to fetch events".to_string())
        );
    }

    #[test]
    fn test_click_date_opens_form_with_date_only() {
        let mut session = team_session();
        session.click_date("2024-12-06T14:00:00");

        assert_eq!(session.form().phase(), FormPhase::DateSelected);
        assert_eq!(session.form().draft().date, "2024-12-06");
    }

    #[test]
    fn test_reversed_times_never_produce_a_request() {
        let mut session = team_session();
        session.click_date("2024-12-06");
        session.form_mut().set_start_time("10:00".to_string());
        session.form_mut().set_end_time("09:00".to_string());

        let result = session.submit_form(now());
        assert_eq!(result, Err(ValidationError::EndNotAfterStart));
        assert_eq!(
            session.form().draft().error.as_deref(),
            Some("End time must be after start time.")
        );
    }

    #[test]
    fn test_yesterday_rejected_only_by_team_variant() {
        let yesterday = (today() - Days::new(1)).format("%Y-%m-%d").to_string();

        let mut team = team_session();
        team.click_date(&yesterday);
        team.form_mut().set_start_time("09:00".to_string());
        team.form_mut().set_end_time("10:00".to_string());
        assert_eq!(team.submit_form(now()), Err(ValidationError::StartsInPast));

        let mut simplified = CalendarSession::new(ClientVariant::Simplified, LcgChannels::new(1), today());
        simplified.click_date(&yesterday);
        simplified.form_mut().set_start_time("09:00".to_string());
        simplified.form_mut().set_end_time("10:00".to_string());
        let pending = simplified.submit_form(now()).unwrap();
        assert_eq!(pending.request.date, yesterday);
    }

    #[test]
    fn test_add_success_closes_form() {
        let mut session = team_session();
        session.click_date("2024-12-06");
        session.form_mut().set_start_time("09:00".to_string());
        session.form_mut().set_end_time("10:00".to_string());

        let pending = session.submit_form(now()).unwrap();
        let outcome = session.finish_add::<String>(pending.generation, Ok(ApiResponse::ok()));

        assert_eq!(outcome, Some(AddOutcome::Saved));
        assert!(!session.form().is_open());
        assert_eq!(session.form().draft().error, None);
    }

    #[test]
    fn test_stale_add_reply_is_dropped() {
        let mut session = team_session();
        session.click_date("2024-12-06");
        session.form_mut().set_start_time("09:00".to_string());
        session.form_mut().set_end_time("10:00".to_string());
        let first = session.submit_form(now()).unwrap();
        let second = session.submit_form(now()).unwrap();

        assert_eq!(session.finish_add::<String>(first.generation, Ok(ApiResponse::ok())), None);
        assert!(session.form().is_submitting());
        assert_eq!(
            session.finish_add(second.generation, Err("offline")),
            Some(AddOutcome::InlineError("An error occurred. Please try again.".to_string()))
        );
    }

    #[test]
    fn test_declined_confirmation_sends_nothing() {
        let mut session = team_session();
        let mut asked = None;
        let pending = session.request_delete(&event(Some(5), "alice"), |prompt| {
            asked = Some(prompt.to_string());
            false
        });

        assert_eq!(pending, None);
        assert_eq!(
            asked.as_deref(),
            Some("Do you want to delete this availability for alice's Availability?")
        );
    }

    #[test]
    fn test_event_without_id_is_not_deletable() {
        let mut session = CalendarSession::new(ClientVariant::Simplified, LcgChannels::new(1), today());
        let pending = session.request_delete(&event(None, "bob"), |_| panic!("should not prompt"));
        assert_eq!(pending, None);
    }

    #[test]
    fn test_confirmed_delete_success() {
        let mut session = team_session();
        let pending = session.request_delete(&event(Some(5), "alice"), |_| true).unwrap();
        assert_eq!(pending.event_id, 5);

        let outcome = session.finish_delete::<String>(
            pending,
            Ok(DeleteReply {
                status: 200,
                body: ApiResponse::ok(),
            }),
        );
        assert_eq!(
            outcome,
            Some(DeleteOutcome::Deleted("Availability deleted successfully.".to_string()))
        );
    }

    #[test]
    fn test_deletes_of_different_events_both_resolve() {
        let mut session = team_session();
        let first = session.request_delete(&event(Some(1), "alice"), |_| true).unwrap();
        let second = session.request_delete(&event(Some(2), "bob"), |_| true).unwrap();

        let outcome = session.finish_delete::<String>(
            first,
            Ok(DeleteReply {
                status: 403,
                body: ApiResponse::failed("You do not have permission to delete this availability."),
            }),
        );
        assert_eq!(
            outcome,
            Some(DeleteOutcome::Failed(
                "Error: You do not have permission to delete this availability.".to_string()
            ))
        );

        let outcome = session.finish_delete::<String>(
            second,
            Ok(DeleteReply {
                status: 200,
                body: ApiResponse::ok(),
            }),
        );
        assert_eq!(
            outcome,
            Some(DeleteOutcome::Deleted("Availability deleted successfully.".to_string()))
        );
    }

    #[test]
    fn test_repeated_delete_of_same_event_drops_older_reply() {
        let mut session = team_session();
        let first = session.request_delete(&event(Some(5), "alice"), |_| true).unwrap();
        let second = session.request_delete(&event(Some(5), "alice"), |_| true).unwrap();

        assert_eq!(session.finish_delete(first, Err("offline")), None);
        assert_eq!(
            session.finish_delete(second, Err("offline")),
            Some(DeleteOutcome::Failed(
                "An error occurred while deleting the availability.".to_string()
            ))
        );
    }
}
