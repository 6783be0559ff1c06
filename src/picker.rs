//! Date-picker state machine.
//!
//! [`reduce`] is a pure `(state, event) -> state'` transition that keeps the
//! displayed triple valid for the active calendar. [`DatePicker`] wraps it
//! with the caller's `on_change` callback and builds the option lists a UI
//! shows.

use crate::{
    CalendarKind, CivilDate, ConfigError, DateError, Day, Month, PickerConfig, Year, days_in_month,
};

/// Error type for picker operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PickerError {
    /// The requested view is not a representable date.
    #[error(transparent)]
    InvalidView(#[from] DateError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// The triple shown by the picker plus the canonical date it stands for.
///
/// `(year, month, day)` is always valid for `kind` and converts to `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PickerState {
    kind:  CalendarKind,
    year:  Year,
    month: Month,
    day:   Day,
    value: CivilDate,
}

impl PickerState {
    /// Shows `value` in the `kind` calendar.
    ///
    /// # Errors
    /// Returns `PickerError::InvalidView` if `value` has no representation in `kind`.
    pub fn new(value: CivilDate, kind: CalendarKind) -> Result<Self, PickerError> {
        let (year, month, day) = value.in_calendar(kind)?;
        Ok(Self {
            kind,
            year: Year::new(year)?,
            month: Month::new(month)?,
            day: Day::new(day, kind, year, month)?,
            value,
        })
    }

    /// Replaces the triple, deriving the canonical date from it.
    fn edited(self, year: u16, month: u8, day: u8) -> Result<Self, PickerError> {
        let value = CivilDate::from_calendar(self.kind, year, month, day)?;
        Ok(Self {
            kind: self.kind,
            year: Year::new(year)?,
            month: Month::new(month)?,
            day: Day::new(day, self.kind, year, month)?,
            value,
        })
    }

    /// Moves to another year/month, pulling the day back to the month's last day if needed.
    fn clamped(self, year: u16, month: u8) -> Result<Self, PickerError> {
        let day = Day::clamped(self.day(), self.kind, year, month)?;
        self.edited(year, month, day.get())
    }

    pub const fn kind(&self) -> CalendarKind {
        self.kind
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// The canonical date currently shown
    pub const fn value(&self) -> CivilDate {
        self.value
    }

    /// Number of days in the displayed month
    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.kind, self.year.get(), self.month.get())
    }
}

/// Inputs to the picker state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickerEvent {
    /// The caller supplied a (new) canonical date.
    Synced(CivilDate),
    YearChanged(u16),
    MonthChanged(u8),
    DayChanged(u8),
    /// The display calendar was switched.
    KindChanged(CalendarKind),
}

/// Result of one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub state:   PickerState,
    /// Set when a user edit changed the canonical date
    pub emitted: Option<CivilDate>,
}

/// Applies `event` to `state`.
///
/// An event that would produce an unrepresentable date leaves the state
/// untouched and emits nothing.
pub fn reduce(state: PickerState, event: PickerEvent) -> Step {
    let (next, is_edit) = match event {
        PickerEvent::Synced(value) => (PickerState::new(value, state.kind), false),
        PickerEvent::KindChanged(kind) => (PickerState::new(state.value, kind), false),
        PickerEvent::YearChanged(year) => (state.clamped(year, state.month()), true),
        PickerEvent::MonthChanged(month) => (state.clamped(state.year(), month), true),
        PickerEvent::DayChanged(day) => (state.edited(state.year(), state.month(), day), true),
    };

    match next {
        Ok(next) => {
            log::trace!(
                "picker {event:?}: {} {:04}-{:02}-{:02} ({})",
                next.kind,
                next.year(),
                next.month(),
                next.day(),
                next.value
            );
            Step {
                state:   next,
                emitted: (is_edit && next.value != state.value).then_some(next.value),
            }
        },
        Err(err) => {
            log::debug!("dropping picker update {event:?}: {err}");
            Step {
                state,
                emitted: None,
            }
        },
    }
}

/// A selectable year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearOption {
    pub value:    u16,
    pub label:    String,
    pub selected: bool,
}

/// A selectable month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthOption {
    pub value:    u8,
    pub label:    String,
    pub selected: bool,
}

/// A selectable day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayOption {
    pub value:    u8,
    pub label:    String,
    pub selected: bool,
}

/// Everything a UI needs to draw the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOptions {
    pub kind:   CalendarKind,
    pub value:  CivilDate,
    pub years:  Vec<YearOption>,
    pub months: Vec<MonthOption>,
    pub days:   Vec<DayOption>,
}

/// A picker bound to a form field.
///
/// `on_change` receives every canonical date produced by a user edit, and
/// `None` when the field is cleared.
pub struct DatePicker<F>
where
    F: FnMut(Option<CivilDate>),
{
    config:    PickerConfig,
    state:     PickerState,
    /// Last value passed in by the caller
    external:  Option<CivilDate>,
    on_change: F,
}

impl<F> DatePicker<F>
where
    F: FnMut(Option<CivilDate>),
{
    /// Creates a picker showing `value` (today when `None`) in `kind`, or in
    /// the configured default calendar when `kind` is `None`.
    ///
    /// # Errors
    /// Returns `PickerError::Config` for an invalid configuration and
    /// `PickerError::InvalidView` if the initial date can't be shown.
    pub fn new(
        config: PickerConfig,
        value: Option<CivilDate>,
        kind: Option<CalendarKind>,
        on_change: F,
    ) -> Result<Self, PickerError> {
        config.validate()?;
        let kind = kind.unwrap_or(config.default_kind);
        let shown = match value {
            Some(date) => date,
            None => CivilDate::today()?,
        };
        let state = PickerState::new(shown, kind)?;
        Ok(Self {
            config,
            state,
            external: value,
            on_change,
        })
    }

    /// Brings the picker in line with the caller's current value and calendar,
    /// then returns the options to display.
    pub fn render(&mut self, value: Option<CivilDate>, kind: CalendarKind) -> PickerOptions {
        if value != self.external {
            self.external = value;
            match value.map_or_else(CivilDate::today, Ok) {
                Ok(date) => {
                    self.dispatch(PickerEvent::Synced(date));
                },
                Err(err) => log::debug!("cannot resolve today's date: {err}"),
            }
        }
        if kind != self.state.kind() {
            self.dispatch(PickerEvent::KindChanged(kind));
        }
        self.options()
    }

    pub fn select_year(&mut self, year: u16) -> Option<CivilDate> {
        self.dispatch(PickerEvent::YearChanged(year))
    }

    pub fn select_month(&mut self, month: u8) -> Option<CivilDate> {
        self.dispatch(PickerEvent::MonthChanged(month))
    }

    pub fn select_day(&mut self, day: u8) -> Option<CivilDate> {
        self.dispatch(PickerEvent::DayChanged(day))
    }

    /// Switches the display calendar; the canonical date is unchanged.
    pub fn set_kind(&mut self, kind: CalendarKind) {
        self.dispatch(PickerEvent::KindChanged(kind));
    }

    /// Tells the caller the field was cleared. The view keeps its last date.
    pub fn clear(&mut self) {
        (self.on_change)(None);
    }

    pub const fn state(&self) -> &PickerState {
        &self.state
    }

    pub const fn config(&self) -> &PickerConfig {
        &self.config
    }

    fn dispatch(&mut self, event: PickerEvent) -> Option<CivilDate> {
        let Step { state, emitted } = reduce(self.state, event);
        self.state = state;
        if let Some(date) = emitted {
            (self.on_change)(Some(date));
        }
        emitted
    }

    /// Options relative to today's date.
    pub fn options(&self) -> PickerOptions {
        let today = CivilDate::today().unwrap_or(self.state.value());
        self.options_at(today)
    }

    /// Options with the year window ending at `today`'s year in the active calendar.
    pub fn options_at(&self, today: CivilDate) -> PickerOptions {
        let kind = self.state.kind();
        let current_year = today
            .in_calendar(kind)
            .map_or(self.state.year(), |(year, _, _)| year);

        let mut years: Vec<u16> = (0..self.config.year_window)
            .map_while(|offset| current_year.checked_sub(offset))
            .filter(|&year| year > 0)
            .collect();
        // Keep the shown year selectable even when it's outside the window
        if !years.contains(&self.state.year()) {
            years.push(self.state.year());
        }

        let years = years
            .into_iter()
            .map(|year| YearOption {
                value:    year,
                label:    year.to_string(),
                selected: year == self.state.year(),
            })
            .collect();

        let months = (1..=12u8)
            .filter_map(|month| Month::new(month).ok())
            .map(|month| MonthOption {
                value:    month.get(),
                label:    self.config.month_labels.label(kind, month),
                selected: month.get() == self.state.month(),
            })
            .collect();

        let days = (1..=self.state.days_in_month())
            .map(|day| DayOption {
                value:    day,
                label:    day.to_string(),
                selected: day == self.state.day(),
            })
            .collect();

        PickerOptions {
            kind,
            value: self.state.value(),
            years,
            months,
            days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{civil, picker};
    use crate::MonthLabels;
    use std::cell::RefCell;

    fn view(state: &PickerState) -> (CalendarKind, u16, u8, u8) {
        (state.kind(), state.year(), state.month(), state.day())
    }

    #[test]
    fn test_new_shows_value_in_kind() {
        let state = picker(CalendarKind::Jalali, 2024, 3, 20);
        assert_eq!(view(&state), (CalendarKind::Jalali, 1403, 1, 1));
        assert_eq!(state.value(), civil(2024, 3, 20));

        let state = picker(CalendarKind::Gregorian, 2024, 3, 20);
        assert_eq!(view(&state), (CalendarKind::Gregorian, 2024, 3, 20));
    }

    #[test]
    fn test_new_rejects_unrepresentable_view() {
        let result = PickerState::new(civil(600, 1, 1), CalendarKind::Jalali);
        assert!(matches!(result, Err(PickerError::InvalidView(DateError::OutOfRange { .. }))));
    }

    #[test]
    fn test_month_change_clamps_day() {
        // Jalali 1402-06-31
        let state = picker(CalendarKind::Jalali, 2023, 9, 22);
        assert_eq!(view(&state), (CalendarKind::Jalali, 1402, 6, 31));

        let step = reduce(state, PickerEvent::MonthChanged(7));
        assert_eq!(view(&step.state), (CalendarKind::Jalali, 1402, 7, 30));
        assert_eq!(step.emitted, Some(civil(2023, 10, 22)));
        assert_eq!(step.state.value(), civil(2023, 10, 22));
    }

    #[test]
    fn test_year_change_clamps_leap_day() {
        struct TestCase {
            kind:        CalendarKind,
            start:       (u16, u8, u8),
            new_year:    u16,
            view:        (u16, u8, u8),
            emitted:     (u16, u8, u8),
            description: &'static str,
        }

        let cases = [
            TestCase {
                kind:        CalendarKind::Jalali,
                start:       (2025, 3, 20),
                new_year:    1402,
                view:        (1402, 12, 29),
                emitted:     (2024, 3, 19),
                description: "Esfand 30 into a common year",
            },
            TestCase {
                kind:        CalendarKind::Gregorian,
                start:       (2024, 2, 29),
                new_year:    2023,
                view:        (2023, 2, 28),
                emitted:     (2023, 2, 28),
                description: "February 29 into a common year",
            },
            TestCase {
                kind:        CalendarKind::Gregorian,
                start:       (2024, 2, 29),
                new_year:    2000,
                view:        (2000, 2, 29),
                emitted:     (2000, 2, 29),
                description: "February 29 into another leap year",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.start;
            let step = reduce(picker(case.kind, y, m, d), PickerEvent::YearChanged(case.new_year));
            let (vy, vm, vd) = case.view;
            let (ey, em, ed) = case.emitted;
            assert_eq!(
                view(&step.state),
                (case.kind, vy, vm, vd),
                "{}",
                case.description
            );
            assert_eq!(step.emitted, Some(civil(ey, em, ed)), "{}", case.description);
        }
    }

    #[test]
    fn test_day_change_emits() {
        let state = picker(CalendarKind::Jalali, 2023, 10, 22);
        let step = reduce(state, PickerEvent::DayChanged(15));
        assert_eq!(view(&step.state), (CalendarKind::Jalali, 1402, 7, 15));
        assert_eq!(step.emitted, Some(civil(2023, 10, 7)));
    }

    #[test]
    fn test_invalid_day_is_dropped() {
        let state = picker(CalendarKind::Jalali, 2023, 10, 22);
        let step = reduce(state, PickerEvent::DayChanged(31));
        assert_eq!(step.state, state);
        assert_eq!(step.emitted, None);

        let step = reduce(state, PickerEvent::DayChanged(0));
        assert_eq!(step.state, state);
        assert_eq!(step.emitted, None);
    }

    #[test]
    fn test_unrepresentable_edits_are_dropped() {
        let state = picker(CalendarKind::Jalali, 2023, 10, 22);
        for event in [
            PickerEvent::YearChanged(0),
            PickerEvent::YearChanged(9999),
            PickerEvent::MonthChanged(0),
            PickerEvent::MonthChanged(13),
        ] {
            let step = reduce(state, event);
            assert_eq!(step.state, state, "{event:?}");
            assert_eq!(step.emitted, None, "{event:?}");
        }
    }

    #[test]
    fn test_unchanged_edit_emits_nothing() {
        let state = picker(CalendarKind::Gregorian, 2024, 3, 20);
        let step = reduce(state, PickerEvent::DayChanged(20));
        assert_eq!(step.state, state);
        assert_eq!(step.emitted, None);
    }

    #[test]
    fn test_calendar_switch_identity() {
        let state = picker(CalendarKind::Gregorian, 2024, 3, 20);

        let jalali = reduce(state, PickerEvent::KindChanged(CalendarKind::Jalali));
        assert_eq!(view(&jalali.state), (CalendarKind::Jalali, 1403, 1, 1));
        assert_eq!(jalali.state.value(), civil(2024, 3, 20));
        assert_eq!(jalali.emitted, None);

        let back = reduce(jalali.state, PickerEvent::KindChanged(CalendarKind::Gregorian));
        assert_eq!(back.state, state);
        assert_eq!(back.emitted, None);
    }

    #[test]
    fn test_switch_after_clamp_uses_canonical_date() {
        // Clamp Jalali 1402-06-31 to 1402-07-30, then switch calendars
        let state = picker(CalendarKind::Jalali, 2023, 9, 22);
        let clamped = reduce(state, PickerEvent::MonthChanged(7)).state;
        let switched = reduce(clamped, PickerEvent::KindChanged(CalendarKind::Gregorian)).state;
        assert_eq!(view(&switched), (CalendarKind::Gregorian, 2023, 10, 22));
    }

    #[test]
    fn test_switch_to_unrepresentable_kind_is_dropped() {
        let state = picker(CalendarKind::Gregorian, 600, 1, 1);
        let step = reduce(state, PickerEvent::KindChanged(CalendarKind::Jalali));
        assert_eq!(step.state, state);
        assert_eq!(step.emitted, None);
    }

    #[test]
    fn test_sync_replaces_view_without_emitting() {
        let state = picker(CalendarKind::Jalali, 2024, 3, 20);
        let step = reduce(state, PickerEvent::Synced(civil(2023, 3, 21)));
        assert_eq!(view(&step.state), (CalendarKind::Jalali, 1402, 1, 1));
        assert_eq!(step.state.value(), civil(2023, 3, 21));
        assert_eq!(step.emitted, None);
    }

    #[test]
    fn test_date_picker_emits_once_per_edit() {
        let seen = RefCell::new(Vec::new());
        let mut date_picker = DatePicker::new(
            PickerConfig::default(),
            Some(civil(2023, 9, 22)),
            Some(CalendarKind::Jalali),
            |date| seen.borrow_mut().push(date),
        )
        .unwrap();

        assert_eq!(date_picker.select_month(7), Some(civil(2023, 10, 22)));
        assert_eq!(*seen.borrow(), vec![Some(civil(2023, 10, 22))]);

        // Same date again: nothing to report
        assert_eq!(date_picker.select_day(30), None);
        assert_eq!(seen.borrow().len(), 1);

        // Invalid day: dropped silently
        assert_eq!(date_picker.select_day(31), None);
        assert_eq!(seen.borrow().len(), 1);

        date_picker.set_kind(CalendarKind::Gregorian);
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(
            view(date_picker.state()),
            (CalendarKind::Gregorian, 2023, 10, 22)
        );

        date_picker.clear();
        assert_eq!(seen.borrow().last(), Some(&None));
    }

    #[test]
    fn test_render_syncs_value_and_kind() {
        let seen = RefCell::new(Vec::new());
        let mut date_picker = DatePicker::new(
            PickerConfig::default(),
            Some(civil(2024, 3, 20)),
            None,
            |date| seen.borrow_mut().push(date),
        )
        .unwrap();
        assert_eq!(date_picker.state().kind(), CalendarKind::Gregorian);

        let options = date_picker.render(Some(civil(2024, 3, 20)), CalendarKind::Jalali);
        assert_eq!(options.kind, CalendarKind::Jalali);
        assert_eq!(options.value, civil(2024, 3, 20));
        assert_eq!(view(date_picker.state()), (CalendarKind::Jalali, 1403, 1, 1));

        let options = date_picker.render(Some(civil(2023, 10, 22)), CalendarKind::Jalali);
        assert_eq!(options.value, civil(2023, 10, 22));
        assert_eq!(view(date_picker.state()), (CalendarKind::Jalali, 1402, 7, 30));

        assert!(seen.borrow().is_empty(), "rendering never reports a change");
    }

    #[test]
    fn test_render_without_value_shows_today() {
        let mut date_picker =
            DatePicker::new(PickerConfig::default(), Some(civil(2000, 1, 1)), None, |_| {}).unwrap();
        let before = CivilDate::today().unwrap();
        let options = date_picker.render(None, CalendarKind::Gregorian);
        let after = CivilDate::today().unwrap();
        assert!(before <= options.value && options.value <= after);
    }

    #[test]
    fn test_default_kind_from_config() {
        let config = PickerConfig {
            default_kind: CalendarKind::Jalali,
            ..PickerConfig::default()
        };
        let date_picker = DatePicker::new(config, Some(civil(2024, 3, 20)), None, |_| {}).unwrap();
        assert_eq!(date_picker.state().kind(), CalendarKind::Jalali);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = PickerConfig {
            year_window: 0,
            ..PickerConfig::default()
        };
        let result = DatePicker::new(config, Some(civil(2024, 3, 20)), None, |_| {});
        assert!(matches!(result, Err(PickerError::Config(ConfigError::EmptyYearWindow))));
    }

    #[test]
    fn test_options_in_jalali() {
        let date_picker = DatePicker::new(
            PickerConfig::default(),
            Some(civil(2023, 10, 22)),
            Some(CalendarKind::Jalali),
            |_| {},
        )
        .unwrap();

        let options = date_picker.options_at(civil(2026, 10, 19));
        assert_eq!(options.kind, CalendarKind::Jalali);

        // 100 years ending at Jalali 1405, newest first
        assert_eq!(options.years.len(), 100);
        assert_eq!(options.years[0].value, 1405);
        assert_eq!(options.years[99].value, 1306);
        let selected: Vec<u16> = options
            .years
            .iter()
            .filter(|year| year.selected)
            .map(|year| year.value)
            .collect();
        assert_eq!(selected, vec![1402]);

        assert_eq!(options.months.len(), 12);
        assert_eq!(options.months[0].label, "Farvardin");
        assert!(options.months[6].selected);

        assert_eq!(options.days.len(), 30);
        assert!(options.days[29].selected);
        assert_eq!(options.days[29].label, "30");
    }

    #[test]
    fn test_options_follow_month_length() {
        let mut date_picker = DatePicker::new(
            PickerConfig::default(),
            Some(civil(2025, 3, 20)),
            Some(CalendarKind::Jalali),
            |_| {},
        )
        .unwrap();
        assert_eq!(date_picker.options_at(civil(2025, 3, 20)).days.len(), 30);

        date_picker.select_year(1402);
        assert_eq!(date_picker.options_at(civil(2025, 3, 20)).days.len(), 29);
    }

    #[test]
    fn test_options_keep_selected_year_outside_window() {
        let config = PickerConfig {
            year_window: 10,
            month_labels: MonthLabels::Numeric,
            ..PickerConfig::default()
        };
        let date_picker = DatePicker::new(config, Some(civil(1990, 5, 1)), None, |_| {}).unwrap();

        let options = date_picker.options_at(civil(2024, 1, 1));
        assert_eq!(options.years.len(), 11);
        assert_eq!(options.years[0].value, 2024);
        assert_eq!(options.years[9].value, 2015);
        assert_eq!(options.years[10].value, 1990);
        assert!(options.years[10].selected);
        assert_eq!(options.months[4].label, "05");
    }

    #[test]
    fn test_year_window_stops_at_year_one() {
        let config = PickerConfig {
            year_window: 100,
            ..PickerConfig::default()
        };
        let date_picker = DatePicker::new(config, Some(civil(30, 1, 1)), None, |_| {}).unwrap();
        let options = date_picker.options_at(civil(30, 1, 1));
        assert_eq!(options.years.len(), 30);
        assert_eq!(options.years.last().map(|year| year.value), Some(1));
    }
}
