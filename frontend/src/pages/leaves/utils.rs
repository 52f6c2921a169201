use crate::api::{ApiError, CreateLeaveRequest};
use chrono::NaiveDate;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LeaveFormState {
    leave_type: RwSignal<String>,
    start_date: RwSignal<String>,
    end_date: RwSignal<String>,
    reason: RwSignal<String>,
}

impl Default for LeaveFormState {
    fn default() -> Self {
        Self {
            leave_type: create_rw_signal("annual".to_string()),
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
            reason: create_rw_signal(String::new()),
        }
    }
}

impl LeaveFormState {
    pub fn leave_type_signal(&self) -> RwSignal<String> {
        self.leave_type
    }

    pub fn start_signal(&self) -> RwSignal<String> {
        self.start_date
    }

    pub fn end_signal(&self) -> RwSignal<String> {
        self.end_date
    }

    pub fn reason_signal(&self) -> RwSignal<String> {
        self.reason
    }

    pub fn reset(&self) {
        self.leave_type.set("annual".into());
        self.start_date.set(String::new());
        self.end_date.set(String::new());
        self.reason.set(String::new());
    }

    /// Inclusive day count of the selected range, or `None` while the form
    /// does not describe a valid range. Drives the approval preview.
    pub fn duration_days(&self) -> Option<i64> {
        let start = NaiveDate::parse_from_str(&self.start_date.get(), "%Y-%m-%d").ok()?;
        let end = NaiveDate::parse_from_str(&self.end_date.get(), "%Y-%m-%d").ok()?;
        if end < start {
            return None;
        }
        Some((end - start).num_days() + 1)
    }

    pub fn to_payload(self) -> Result<CreateLeaveRequest, ApiError> {
        let start = parse_date(
            &self.start_date.get(),
            "Enter the start date as YYYY-MM-DD.",
        )?;
        let end = parse_date(&self.end_date.get(), "Enter the end date as YYYY-MM-DD.")?;
        if end < start {
            return Err(ApiError::validation(
                "The end date must not be before the start date.",
            ));
        }
        Ok(CreateLeaveRequest {
            leave_type: self.leave_type.get(),
            start_date: start,
            end_date: end,
            reason: optional_string(self.reason.get()),
        })
    }
}

#[derive(Clone, Default)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<ApiError>,
}

impl MessageState {
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn set_error(&mut self, msg: ApiError) {
        self.error = Some(msg);
        self.success = None;
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }
}

fn parse_date(raw: &str, message: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| ApiError::validation(message))
}

fn optional_string(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
