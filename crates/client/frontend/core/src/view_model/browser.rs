//! Event browser: filter form and the last query result.
use camtel_api::{EventFilter, EventKind, FilteredEvents};
use strum::{EnumIter, IntoEnumIterator};

use crate::format::{local_timestamp, parse_user_timestamp};

/// Inputs of the filter form, in focus order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumIter)]
pub enum FormField {
    #[default]
    Camera,
    EventType,
    Start,
    End,
    Limit,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::Camera => "Camera",
            FormField::EventType => "Type",
            FormField::Start => "From",
            FormField::End => "To",
            FormField::Limit => "Limit",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Camera => "Camera (optional)",
            FormField::EventType => "",
            FormField::Start | FormField::End => "YYYY-MM-DD[ HH:MM] (optional)",
            FormField::Limit => "Max results (optional)",
        }
    }

    /// Whether the field takes typed characters.
    pub fn is_text(self) -> bool {
        !matches!(self, FormField::EventType)
    }

    fn next(self) -> Self {
        FormField::iter()
            .cycle()
            .skip_while(|f| *f != self)
            .nth(1)
            .unwrap_or_default()
    }

    fn prev(self) -> Self {
        let fields: Vec<_> = FormField::iter().collect();
        let index = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(index + fields.len() - 1) % fields.len()]
    }
}

/// Edit applied to the focused text field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormEdit {
    Insert(char),
    Backspace,
    Clear,
}

/// Input that cannot be turned into a query.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("'{0}' is not a valid start time")]
    InvalidStart(String),

    #[error("'{0}' is not a valid end time")]
    InvalidEnd(String),

    #[error("Limit '{0}' must be a positive whole number")]
    InvalidLimit(String),

    #[error("End time is before start time")]
    EndBeforeStart,
}

/// Raw form contents as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterForm {
    pub camera: String,
    /// `None` means any type.
    pub event_type: Option<EventKind>,
    pub start: String,
    pub end: String,
    pub limit: String,
    pub focus: FormField,
}

impl FilterForm {
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Apply an edit to the focused field. Returns `false` when the focused
    /// field is not a text field.
    pub fn edit(&mut self, edit: FormEdit) -> bool {
        let Some(text) = self.text_mut(self.focus) else {
            return false;
        };

        match edit {
            FormEdit::Insert(ch) => text.push(ch),
            FormEdit::Backspace => {
                text.pop();
            }
            FormEdit::Clear => text.clear(),
        }
        true
    }

    /// Step through Any → Person → Vehicle → Any (or backwards).
    pub fn cycle_event_type(&mut self, forward: bool) {
        let options: Vec<Option<EventKind>> = std::iter::once(None)
            .chain(EventKind::iter().map(Some))
            .collect();
        let index = options
            .iter()
            .position(|o| *o == self.event_type)
            .unwrap_or(0);
        let next = if forward {
            (index + 1) % options.len()
        } else {
            (index + options.len() - 1) % options.len()
        };
        self.event_type = options[next];
    }

    pub fn event_type_label(&self) -> &'static str {
        match self.event_type {
            None => "Any type",
            Some(EventKind::Person) => "Persons",
            Some(EventKind::Vehicle) => "Vehicles",
        }
    }

    /// Current display value of a field.
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Camera => &self.camera,
            FormField::EventType => self.event_type_label(),
            FormField::Start => &self.start,
            FormField::End => &self.end,
            FormField::Limit => &self.limit,
        }
    }

    /// Build the request body. Blank fields are left out.
    pub fn to_filter(&self) -> Result<EventFilter, FormError> {
        let mut filter = EventFilter::new();

        let camera = self.camera.trim();
        if !camera.is_empty() {
            filter = filter.camera(camera);
        }

        if let Some(kind) = self.event_type {
            filter = filter.event_type(kind);
        }

        let start = self.start.trim();
        if !start.is_empty() {
            let parsed = parse_user_timestamp(start)
                .ok_or_else(|| FormError::InvalidStart(start.to_string()))?;
            filter = filter.start(parsed);
        }

        let end = self.end.trim();
        if !end.is_empty() {
            let parsed =
                parse_user_timestamp(end).ok_or_else(|| FormError::InvalidEnd(end.to_string()))?;
            filter = filter.end(parsed);
        }

        if let (Some(start), Some(end)) = (filter.start, filter.end) {
            if end < start {
                return Err(FormError::EndBeforeStart);
            }
        }

        let limit = self.limit.trim();
        if !limit.is_empty() {
            let parsed = limit
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| FormError::InvalidLimit(limit.to_string()))?;
            filter = filter.limit(parsed);
        }

        Ok(filter)
    }

    fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Camera => Some(&mut self.camera),
            FormField::EventType => None,
            FormField::Start => Some(&mut self.start),
            FormField::End => Some(&mut self.end),
            FormField::Limit => Some(&mut self.limit),
        }
    }
}

/// One line of the result list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultPill {
    pub id: String,
    pub kind: EventKind,
    pub camera: String,
    pub occurred_at: String,
}

impl ResultPill {
    pub fn text(&self) -> String {
        format!(
            "{} • {} • {}",
            self.kind.title(),
            self.camera,
            self.occurred_at
        )
    }
}

/// State of the event browser page.
#[derive(Clone, Debug, Default)]
pub struct EventBrowser {
    pub form: FilterForm,
    pub form_error: Option<FormError>,
    /// `None` until the first query completes.
    pub results: Option<Vec<ResultPill>>,
    /// Requests sent but not answered yet. Informational only; nothing
    /// prevents overlapping queries.
    pub pending: usize,
    /// Bumped every time the browser is reopened. Query results carry the
    /// value current when they were sent and are dropped on mismatch.
    pub generation: u64,
}

impl EventBrowser {
    /// Validate the form and hand back the filter to send.
    ///
    /// On invalid input the error is kept for display and nothing is sent.
    pub fn submit(&mut self) -> Option<EventFilter> {
        match self.form.to_filter() {
            Ok(filter) => {
                self.form_error = None;
                self.pending += 1;
                Some(filter)
            }
            Err(err) => {
                self.form_error = Some(err);
                None
            }
        }
    }

    /// A fresh browser for the next visit to the page.
    pub fn remount(&self) -> Self {
        Self {
            generation: self.generation.wrapping_add(1),
            ..Self::default()
        }
    }

    /// Replace the result list with a completed query.
    pub fn apply_results(&mut self, result: &FilteredEvents) {
        self.pending = self.pending.saturating_sub(1);

        let persons = result.person_events.iter().map(|e| ResultPill {
            id: e.id.clone(),
            kind: EventKind::Person,
            camera: e.camera.clone(),
            occurred_at: local_timestamp(&e.occurred_at),
        });
        let vehicles = result.vehicle_events.iter().map(|e| ResultPill {
            id: e.id.clone(),
            kind: EventKind::Vehicle,
            camera: e.camera.clone(),
            occurred_at: local_timestamp(&e.occurred_at),
        });

        self.results = Some(persons.chain(vehicles).collect());
    }

    /// A query failed; the previous result stays on screen.
    pub fn request_failed(&mut self) {
        self.pending = self.pending.saturating_sub(1);
    }
}
