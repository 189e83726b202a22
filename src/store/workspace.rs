//! The application controller.
//!
//! [`Workspace`] owns the four store slots (calendars, events, selected week,
//! weekly limit), feeds them to the pure engine functions, and writes each
//! slot back whenever it changes. Collections are held as `Arc<[T]>` and
//! replaced wholesale, so callers can detect changes with `Arc::ptr_eq`.

use std::sync::Arc;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::calculation;
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Calendar, ShiftEvent, WeekSummary};

use super::kv::KeyValueStore;

/// A request to create a shift from a selected interval.
///
/// # Example
///
/// ```
/// use workaholic_engine::store::NewShift;
/// use chrono::NaiveDateTime;
///
/// let start = NaiveDateTime::parse_from_str("2024-05-02 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2024-05-02 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let shift = NewShift::new(start, end).with_title("Shift - SEAS").on_calendar("cal_seas");
/// assert_eq!(shift.calendar_id.as_deref(), Some("cal_seas"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShift {
    /// Interval start.
    pub start: NaiveDateTime,
    /// Interval end.
    pub end: NaiveDateTime,
    /// Optional base title; the hour annotation is appended.
    pub title: Option<String>,
    /// Explicit target calendar; falls back through the resolution chain.
    pub calendar_id: Option<String>,
}

impl NewShift {
    /// A shift with no title and no explicit calendar.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            start,
            end,
            title: None,
            calendar_id: None,
        }
    }

    /// Sets the base title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the explicit target calendar.
    pub fn on_calendar(mut self, calendar_id: impl Into<String>) -> Self {
        self.calendar_id = Some(calendar_id.into());
        self
    }
}

/// Reads and decodes one slot. `None` when the slot is empty, `Some(Err)` when
/// it holds something undecodable.
fn read_slot<S, T>(store: &S, key: &str) -> Option<Result<T, serde_json::Error>>
where
    S: KeyValueStore,
    T: DeserializeOwned,
{
    store.get(key).map(|raw| serde_json::from_str(&raw))
}

fn write_slot<S, T>(store: &mut S, key: &str, value: &T) -> EngineResult<()>
where
    S: KeyValueStore,
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|e| EngineError::Store {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    store.set(key, raw)
}

/// Keeps only positive limits; anything else means "no limit".
fn normalize_limit(limit: Option<Decimal>) -> Option<Decimal> {
    limit.filter(|l| *l > Decimal::ZERO)
}

/// Application state over a key-value store.
///
/// # Example
///
/// ```
/// use workaholic_engine::config::EngineConfig;
/// use workaholic_engine::store::{MemoryStore, NewShift, Workspace};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let dt = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let mut workspace = Workspace::open(MemoryStore::default(), EngineConfig::default(), dt("2024-05-06 12:00:00"))?;
/// assert_eq!(workspace.selected_week(), "2024-05-02");
///
/// let job = workspace.add_calendar("SEAS Office")?.unwrap();
/// workspace.create_event(NewShift::new(dt("2024-05-02 09:00:00"), dt("2024-05-02 17:00:00")).on_calendar(&job))?;
///
/// let summary = workspace.summary();
/// assert_eq!(summary.job_hours, Decimal::new(8, 0));
/// assert!(summary.warnings.is_empty());
/// # Ok::<(), workaholic_engine::error::EngineError>(())
/// ```
#[derive(Debug)]
pub struct Workspace<S: KeyValueStore> {
    store: S,
    config: Arc<EngineConfig>,
    calendars: Arc<[Calendar]>,
    events: Arc<[ShiftEvent]>,
    selected_week: String,
    weekly_limit: Option<Decimal>,
    active_calendar: Option<String>,
}

impl<S: KeyValueStore> Workspace<S> {
    /// Loads every slot from `store`, falling back to defaults.
    ///
    /// - calendars: absent, undecodable or empty → the personal calendar
    /// - events: absent or undecodable → empty
    /// - selected week: absent or malformed → the pay week containing `now`
    /// - weekly limit: absent → the configured default; `null` or
    ///   undecodable → no limit
    ///
    /// A stored week key is re-normalized to the start of its pay week, so a
    /// key written under a different week start still lines up. Nothing is
    /// written until the first change.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidConfig`] when `config` fails validation.
    pub fn open(store: S, config: EngineConfig, now: NaiveDateTime) -> EngineResult<Self> {
        config.validate()?;
        let keys = &config.storage_keys;
        let week_start = config.week_start_day_of_week;

        let calendars: Vec<Calendar> = match read_slot(&store, &keys.calendars) {
            Some(Ok(calendars)) => calendars,
            Some(Err(e)) => {
                warn!(key = %keys.calendars, error = %e, "Undecodable calendar slot, using defaults");
                Vec::new()
            }
            None => Vec::new(),
        };
        let calendars = if calendars.is_empty() {
            config.default_calendars()
        } else {
            calendars
        };

        let events: Vec<ShiftEvent> = match read_slot(&store, &keys.events) {
            Some(Ok(events)) => events,
            Some(Err(e)) => {
                warn!(key = %keys.events, error = %e, "Undecodable event slot, starting empty");
                Vec::new()
            }
            None => Vec::new(),
        };

        let stored_week = read_slot::<_, String>(&store, &keys.selected_week)
            .map(|slot| slot.ok().and_then(|key| calculation::parse_week_key(&key)));
        let selected_week = match stored_week {
            Some(Some(date)) => calculation::pay_week_start_date(date, week_start)
                .format(calculation::WEEK_KEY_FORMAT)
                .to_string(),
            Some(None) => {
                warn!(key = %keys.selected_week, "Malformed selected week, using current week");
                calculation::pay_week_key(now, week_start)
            }
            None => calculation::pay_week_key(now, week_start),
        };

        let weekly_limit = match read_slot::<_, Option<Decimal>>(&store, &keys.weekly_limit) {
            Some(Ok(limit)) => normalize_limit(limit),
            Some(Err(e)) => {
                warn!(key = %keys.weekly_limit, error = %e, "Weekly limit is not a number, disabling limit");
                None
            }
            None => config.default_weekly_limit_hours,
        };

        info!(
            calendars = calendars.len(),
            events = events.len(),
            selected_week = %selected_week,
            "Opened workspace"
        );

        Ok(Self {
            store,
            config: Arc::new(config),
            calendars: calendars.into(),
            events: events.into(),
            selected_week,
            weekly_limit,
            active_calendar: None,
        })
    }

    /// The configuration in use.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current calendar snapshot.
    pub fn calendars(&self) -> &Arc<[Calendar]> {
        &self.calendars
    }

    /// Current event snapshot.
    pub fn events(&self) -> &Arc<[ShiftEvent]> {
        &self.events
    }

    /// Events on enabled calendars.
    pub fn visible_events(&self) -> Vec<ShiftEvent> {
        calculation::visible_events(&self.events, &self.calendars)
    }

    /// Key of the selected pay week.
    pub fn selected_week(&self) -> &str {
        &self.selected_week
    }

    /// The weekly limit, if one is configured.
    pub fn weekly_limit(&self) -> Option<Decimal> {
        self.weekly_limit
    }

    /// Calendar new events land on when none is chosen explicitly.
    pub fn active_calendar(&self) -> Option<&str> {
        self.active_calendar.as_deref()
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the workspace, returning the backing store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn replace_calendars(&mut self, next: Vec<Calendar>) -> EngineResult<()> {
        if next.as_slice() == &*self.calendars {
            return Ok(());
        }
        write_slot(&mut self.store, &self.config.storage_keys.calendars, &next)?;
        self.calendars = next.into();
        Ok(())
    }

    fn replace_events(&mut self, next: Vec<ShiftEvent>) -> EngineResult<()> {
        if next.as_slice() == &*self.events {
            return Ok(());
        }
        write_slot(&mut self.store, &self.config.storage_keys.events, &next)?;
        self.events = next.into();
        Ok(())
    }

    /// Adds a job calendar, returning its id; `None` for a blank name.
    pub fn add_calendar(&mut self, name: &str) -> EngineResult<Option<String>> {
        let next = calculation::add_calendar(&self.calendars, name, &self.config.palette);
        if next.len() == self.calendars.len() {
            return Ok(None);
        }

        let id = next.last().map(|c| c.id.clone());
        self.replace_calendars(next)?;
        info!(calendar_id = ?id, "Calendar added");
        Ok(id)
    }

    /// Shows or hides a calendar's events.
    pub fn toggle_calendar(&mut self, calendar_id: &str) -> EngineResult<()> {
        let next = calculation::toggle_calendar(&self.calendars, calendar_id);
        self.replace_calendars(next)
    }

    /// Deletes a calendar and its events. The protected calendar is kept.
    pub fn delete_calendar(&mut self, calendar_id: &str) -> EngineResult<()> {
        let (calendars, events) =
            calculation::delete_calendar(&self.calendars, &self.events, calendar_id);
        if calendars.len() == self.calendars.len() {
            info!(calendar_id, "Calendar not deleted");
            return Ok(());
        }

        let removed_events = self.events.len() - events.len();
        // Events go first so a failed write never leaves orphans behind.
        self.replace_events(events)?;
        self.replace_calendars(calendars)?;
        if self.active_calendar.as_deref() == Some(calendar_id) {
            self.active_calendar = None;
        }
        info!(calendar_id, removed_events, "Calendar deleted");
        Ok(())
    }

    /// Changes a calendar's color and refreshes its events.
    pub fn recolor_calendar(&mut self, calendar_id: &str, color: &str) -> EngineResult<()> {
        let (calendars, events) =
            calculation::recolor_calendar(&self.calendars, &self.events, calendar_id, color)
                .ok_or_else(|| EngineError::CalendarNotFound {
                    calendar_id: calendar_id.to_string(),
                })?;
        self.replace_events(events)?;
        self.replace_calendars(calendars)
    }

    /// Sets or clears the calendar new events default to.
    pub fn set_active_calendar(&mut self, calendar_id: Option<&str>) -> EngineResult<()> {
        if let Some(id) = calendar_id {
            if !self.calendars.iter().any(|c| c.id == id) {
                return Err(EngineError::CalendarNotFound {
                    calendar_id: id.to_string(),
                });
            }
        }
        self.active_calendar = calendar_id.map(str::to_string);
        Ok(())
    }

    /// Creates a shift, returning its id.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NoCalendars`] when the calendar list is empty
    /// - [`EngineError::InvalidInterval`] when `end` is not after `start`
    pub fn create_event(&mut self, request: NewShift) -> EngineResult<String> {
        let calendar = calculation::resolve_target_calendar(
            &self.calendars,
            request.calendar_id.as_deref(),
            self.active_calendar.as_deref(),
        )
        .ok_or(EngineError::NoCalendars)?;

        let event = calculation::create_event(
            calendar,
            request.start,
            request.end,
            request.title.as_deref(),
        )?;
        let id = event.id.clone();

        let mut next = self.events.to_vec();
        next.push(event);
        self.replace_events(next)?;
        Ok(id)
    }

    /// Moves or resizes a shift.
    pub fn reinterval_event(
        &mut self,
        event_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> EngineResult<()> {
        let next =
            calculation::reinterval_event(&self.events, &self.calendars, event_id, start, end)?;
        self.replace_events(next)
    }

    /// Deletes a shift. Unknown ids are ignored.
    pub fn delete_event(&mut self, event_id: &str) -> EngineResult<()> {
        let next = calculation::delete_event(&self.events, event_id);
        self.replace_events(next)
    }

    fn replace_selected_week(&mut self, key: String) -> EngineResult<()> {
        if key == self.selected_week {
            return Ok(());
        }
        write_slot(
            &mut self.store,
            &self.config.storage_keys.selected_week,
            &key,
        )?;
        self.selected_week = key;
        Ok(())
    }

    /// Selects the pay week containing the date named by `key`.
    ///
    /// Any date is accepted and normalized to its week's first day.
    pub fn select_week(&mut self, key: &str) -> EngineResult<()> {
        let date = calculation::parse_week_key(key).ok_or_else(|| EngineError::InvalidWeekKey {
            key: key.to_string(),
        })?;
        let start = calculation::pay_week_start_date(date, self.config.week_start_day_of_week);
        self.replace_selected_week(start.format(calculation::WEEK_KEY_FORMAT).to_string())
    }

    /// Selects the pay week containing `instant` (e.g. "today").
    pub fn select_week_containing(&mut self, instant: NaiveDateTime) -> EngineResult<()> {
        let key = calculation::pay_week_key(instant, self.config.week_start_day_of_week);
        self.replace_selected_week(key)
    }

    /// Moves the selection `weeks` weeks forward (negative moves back).
    pub fn step_week(&mut self, weeks: i64) -> EngineResult<()> {
        let key = calculation::shift_week_key(&self.selected_week, weeks).ok_or_else(|| {
            EngineError::InvalidWeekKey {
                key: self.selected_week.clone(),
            }
        })?;
        self.replace_selected_week(key)
    }

    /// Sets the weekly limit; `None` or a non-positive value disables it.
    pub fn set_weekly_limit(&mut self, limit: Option<Decimal>) -> EngineResult<()> {
        let limit = normalize_limit(limit);
        write_slot(
            &mut self.store,
            &self.config.storage_keys.weekly_limit,
            &limit,
        )?;
        self.weekly_limit = limit;
        info!(limit = ?limit, "Weekly limit updated");
        Ok(())
    }

    /// Recomputes all weekly aggregates and warnings.
    pub fn summary(&self) -> WeekSummary {
        let summary = calculation::summarize_week(
            &self.events,
            &self.calendars,
            &self.selected_week,
            self.config.week_start_day_of_week,
            self.weekly_limit,
        );
        if !summary.warnings.is_empty() {
            warn!(
                weeks_over_limit = summary.warnings.len(),
                most_recent = %summary.warnings[0].week_key,
                "Weekly hour limit exceeded"
            );
        }
        summary
    }
}
