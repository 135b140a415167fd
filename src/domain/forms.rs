//! Create-dialog drafts and their submission into typed records.
//!
//! A [`FormStateController`] owns at most one open [`Draft`]. Field values
//! are kept as the raw strings typed into the dialog and only parsed when the
//! dialog is submitted. Numeric fields are parsed permissively: the leading
//! numeric prefix is used and anything unparsable is coerced (`NaN` for
//! prices, `0` for quotas) rather than rejected. Coerced fields are reported
//! back in the [`Submission`] so the caller can warn about them.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use super::errors::{DomainError, DomainResult};
use super::models::{BillingCycle, NewPlan, NewUser, Role, StreamType};

/// Describes the fields of one kind of create dialog.
pub trait FormSchema: Sized {
    type Field: Copy + Eq + Hash + fmt::Debug + 'static;
    type Output;

    /// Fields in the order the dialog shows them.
    const FIELDS: &'static [Self::Field];

    fn label(field: Self::Field) -> &'static str;

    fn default_value(_field: Self::Field) -> &'static str {
        ""
    }

    /// Allowed values for selector fields; `None` for free text.
    fn choices(_field: Self::Field) -> Option<&'static [&'static str]> {
        None
    }

    fn build(draft: &Draft<Self>) -> DomainResult<Submission<Self::Output>>;
}

/// Raw, unparsed field values of an open dialog.
pub struct Draft<S: FormSchema> {
    values: HashMap<S::Field, String>,
}

impl<S: FormSchema> Draft<S> {
    pub fn new() -> Self {
        let values = S::FIELDS
            .iter()
            .map(|&field| (field, S::default_value(field).to_string()))
            .collect();
        Self { values }
    }

    pub fn get(&self, field: S::Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: S::Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl<S: FormSchema> Default for Draft<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: FormSchema> Clone for Draft<S> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
        }
    }
}

impl<S: FormSchema> fmt::Debug for Draft<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(S::FIELDS.iter().map(|&field| (field, self.get(field))))
            .finish()
    }
}

/// A record built from a draft, plus the fields whose input was coerced.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission<T> {
    pub record: T,
    pub coerced: Vec<&'static str>,
}

impl<T> Submission<T> {
    pub fn is_clean(&self) -> bool {
        self.coerced.is_empty()
    }
}

/// Drives one create dialog: Closed, then Open while editing, then Closed
/// again on submit or cancel.
///
/// # Examples
///
/// ```
/// use streamly_admin::domain::{FormStateController, UserField, UserForm};
///
/// let mut form: FormStateController<UserForm> = FormStateController::default();
/// form.open();
/// form.set_field(UserField::Name, "Test");
/// form.set_field(UserField::Email, "t@x.com");
/// let submission = form.submit().unwrap();
/// assert_eq!(submission.record.name, "Test");
/// assert!(!form.is_open());
/// ```
pub struct FormStateController<S: FormSchema> {
    draft: Option<Draft<S>>,
    focus: usize,
}

impl<S: FormSchema> Default for FormStateController<S> {
    fn default() -> Self {
        Self {
            draft: None,
            focus: 0,
        }
    }
}

impl<S: FormSchema> fmt::Debug for FormStateController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormStateController")
            .field("draft", &self.draft)
            .field("focus", &self.focus)
            .finish()
    }
}

impl<S: FormSchema> FormStateController<S> {
    /// Opens the dialog with a freshly defaulted draft.
    pub fn open(&mut self) {
        self.draft = Some(Draft::new());
        self.focus = 0;
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn draft(&self) -> Option<&Draft<S>> {
        self.draft.as_ref()
    }

    /// Stores a raw value. Returns `false` when no dialog is open.
    pub fn set_field(&mut self, field: S::Field, value: impl Into<String>) -> bool {
        match self.draft.as_mut() {
            Some(draft) => {
                draft.set(field, value);
                true
            }
            None => false,
        }
    }

    /// Clears the open draft back to its defaults.
    pub fn reset(&mut self) {
        if let Some(draft) = self.draft.as_mut() {
            draft.reset();
        }
        self.focus = 0;
    }

    /// Discards the draft and closes the dialog.
    pub fn cancel(&mut self) {
        self.draft = None;
        self.focus = 0;
    }

    /// Builds the record. On success the dialog closes; on error it stays
    /// open with the draft untouched.
    pub fn submit(&mut self) -> DomainResult<Submission<S::Output>> {
        let draft = self.draft.as_ref().ok_or(DomainError::DialogClosed)?;
        let submission = S::build(draft)?;
        self.cancel();
        Ok(submission)
    }

    pub fn focused_field(&self) -> Option<S::Field> {
        if self.is_open() {
            S::FIELDS.get(self.focus).copied()
        } else {
            None
        }
    }

    pub fn focus_next(&mut self) {
        if !S::FIELDS.is_empty() {
            self.focus = (self.focus + 1) % S::FIELDS.len();
        }
    }

    pub fn focus_previous(&mut self) {
        if !S::FIELDS.is_empty() {
            self.focus = (self.focus + S::FIELDS.len() - 1) % S::FIELDS.len();
        }
    }

    /// Appends a character to the focused text field. Selector fields
    /// ignore typed characters.
    pub fn type_char(&mut self, c: char) {
        let Some(field) = self.focused_field() else {
            return;
        };
        if S::choices(field).is_some() {
            return;
        }
        if let Some(draft) = self.draft.as_mut() {
            let mut value = draft.get(field).to_string();
            value.push(c);
            draft.set(field, value);
        }
    }

    pub fn backspace(&mut self) {
        let Some(field) = self.focused_field() else {
            return;
        };
        if S::choices(field).is_some() {
            return;
        }
        if let Some(draft) = self.draft.as_mut() {
            let mut value = draft.get(field).to_string();
            value.pop();
            draft.set(field, value);
        }
    }

    /// Moves a selector field to its next (or previous) allowed value.
    pub fn cycle_choice(&mut self, forward: bool) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let Some(choices) = S::choices(field) else {
            return;
        };
        if choices.is_empty() {
            return;
        }
        if let Some(draft) = self.draft.as_mut() {
            let next = match choices.iter().position(|c| *c == draft.get(field)) {
                Some(i) if forward => (i + 1) % choices.len(),
                Some(i) => (i + choices.len() - 1) % choices.len(),
                None => 0,
            };
            draft.set(field, choices[next]);
        }
    }
}

/// Parses the longest numeric prefix of `input` the way a browser's
/// `parseFloat` does. Returns `NaN` when there is no numeric prefix.
pub fn parse_float_prefix(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Parses the leading integer of `input` the way a browser's `parseInt`
/// does, or `None` when it does not start with digits.
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits: &str = &rest[..rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len())];
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

fn price_field(raw: &str, name: &'static str, coerced: &mut Vec<&'static str>) -> f64 {
    let exact = raw.trim().parse::<f64>().ok().filter(|v| v.is_finite());
    if exact.is_none() {
        coerced.push(name);
    }
    parse_float_prefix(raw)
}

fn quota_field(raw: &str, name: &'static str, coerced: &mut Vec<&'static str>) -> u32 {
    if raw.trim().parse::<u32>().is_err() {
        coerced.push(name);
    }
    parse_int_prefix(raw)
        .map(|v| v.clamp(0, u32::MAX as i64) as u32)
        .unwrap_or(0)
}

fn required(raw: &str, name: &'static str) -> DomainResult<String> {
    let value = raw.trim();
    if value.is_empty() {
        Err(DomainError::MissingField(name))
    } else {
        Ok(value.to_string())
    }
}

fn choice<T: std::str::FromStr>(raw: &str, name: &'static str) -> DomainResult<T> {
    raw.parse::<T>().map_err(|_| DomainError::InvalidChoice {
        field: name,
        value: raw.to_string(),
    })
}

/// Splits a comma- or newline-separated feature list, dropping blanks.
pub fn split_features(raw: &str) -> Vec<String> {
    raw.split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    Name,
    Email,
    Role,
}

/// The add-user dialog.
#[derive(Debug, Clone, Copy)]
pub struct UserForm;

impl FormSchema for UserForm {
    type Field = UserField;
    type Output = NewUser;

    const FIELDS: &'static [UserField] = &[UserField::Name, UserField::Email, UserField::Role];

    fn label(field: UserField) -> &'static str {
        match field {
            UserField::Name => "Name",
            UserField::Email => "Email",
            UserField::Role => "Role",
        }
    }

    fn default_value(field: UserField) -> &'static str {
        match field {
            UserField::Role => Role::User.as_str(),
            _ => "",
        }
    }

    fn choices(field: UserField) -> Option<&'static [&'static str]> {
        match field {
            UserField::Role => Some(Role::LABELS),
            _ => None,
        }
    }

    fn build(draft: &Draft<Self>) -> DomainResult<Submission<NewUser>> {
        let record = NewUser {
            name: required(draft.get(UserField::Name), "Name")?,
            email: draft.get(UserField::Email).trim().to_string(),
            role: choice(draft.get(UserField::Role), "Role")?,
        };
        Ok(Submission {
            record,
            coerced: Vec::new(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanField {
    Name,
    Price,
    BillingCycle,
    StreamType,
    MaxStreams,
    MaxViewers,
    Storage,
    Features,
}

/// The new-plan dialog.
#[derive(Debug, Clone, Copy)]
pub struct PlanForm;

impl FormSchema for PlanForm {
    type Field = PlanField;
    type Output = NewPlan;

    const FIELDS: &'static [PlanField] = &[
        PlanField::Name,
        PlanField::Price,
        PlanField::BillingCycle,
        PlanField::StreamType,
        PlanField::MaxStreams,
        PlanField::MaxViewers,
        PlanField::Storage,
        PlanField::Features,
    ];

    fn label(field: PlanField) -> &'static str {
        match field {
            PlanField::Name => "Name",
            PlanField::Price => "Price",
            PlanField::BillingCycle => "Billing",
            PlanField::StreamType => "Stream type",
            PlanField::MaxStreams => "Max streams",
            PlanField::MaxViewers => "Max viewers",
            PlanField::Storage => "Storage",
            PlanField::Features => "Features",
        }
    }

    fn default_value(field: PlanField) -> &'static str {
        match field {
            PlanField::BillingCycle => BillingCycle::Monthly.as_str(),
            PlanField::StreamType => StreamType::Rtmp.as_str(),
            _ => "",
        }
    }

    fn choices(field: PlanField) -> Option<&'static [&'static str]> {
        match field {
            PlanField::BillingCycle => Some(BillingCycle::LABELS),
            PlanField::StreamType => Some(StreamType::LABELS),
            _ => None,
        }
    }

    fn build(draft: &Draft<Self>) -> DomainResult<Submission<NewPlan>> {
        let name = required(draft.get(PlanField::Name), "Name")?;
        let billing_cycle = choice(draft.get(PlanField::BillingCycle), "Billing")?;
        let stream_type: StreamType = choice(draft.get(PlanField::StreamType), "Stream type")?;

        let mut coerced = Vec::new();
        let price = price_field(draft.get(PlanField::Price), "Price", &mut coerced);
        let max_streams =
            quota_field(draft.get(PlanField::MaxStreams), "Max streams", &mut coerced);
        let max_viewers =
            quota_field(draft.get(PlanField::MaxViewers), "Max viewers", &mut coerced);

        let record = NewPlan {
            name,
            price,
            billing_cycle,
            stream_types: vec![stream_type],
            max_streams,
            max_viewers,
            storage: draft.get(PlanField::Storage).trim().to_string(),
            features: split_features(draft.get(PlanField::Features)),
        };
        Ok(Submission { record, coerced })
    }
}
