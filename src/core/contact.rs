use super::constants::{MESSAGE_HIGHLIGHT_AFTER, MESSAGE_SOFT_LIMIT};
use serde::Serialize;
use smallvec::SmallVec;
use thiserror::Error;

/// (id, label) pairs offered as project type chips. The label is what gets
/// submitted.
pub const PROJECT_TYPE_OPTIONS: &[(&str, &str)] = &[
    ("uiux", "UI/UX Design"),
    ("automation", "Automation"),
    ("data", "Data Analysis"),
    ("fullstack", "Full Stack"),
    ("aiml", "AI & ML / Gen AI"),
];

pub const TIMELINE_OPTIONS: &[&str] = &["ASAP", "1-2 months", "2-3 months", "3-6 months", "Flexible"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("unknown timeline: {0}")]
    UnknownTimeline(String),
    #[error("unknown project type: {0}")]
    UnknownProjectType(String),
}

impl FormError {
    /// The bound field the error should be reported against, if any.
    pub fn field(&self) -> Option<FormField> {
        match self {
            FormError::MissingField(name) => FormField::from_name(name),
            FormError::InvalidEmail => Some(FormField::Email),
            FormError::UnknownTimeline(_) => Some(FormField::Timeline),
            FormError::UnknownProjectType(_) => None,
        }
    }
}

/// Text fields bound by `name` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Company,
    Timeline,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Company,
        FormField::Timeline,
        FormField::Message,
    ];

    pub fn from_name(name: &str) -> Option<FormField> {
        match name {
            "name" => Some(FormField::Name),
            "email" => Some(FormField::Email),
            "phone" => Some(FormField::Phone),
            "company" => Some(FormField::Company),
            "timeline" => Some(FormField::Timeline),
            "message" => Some(FormField::Message),
            _ => None,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Company => "company",
            FormField::Timeline => "timeline",
            FormField::Message => "message",
        }
    }

    #[inline]
    pub fn is_required(&self) -> bool {
        matches!(self, FormField::Name | FormField::Email | FormField::Message)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub timeline: String,
    pub project_types: SmallVec<[String; 5]>,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageCounter {
    pub chars: usize,
    pub limit: usize,
    pub highlighted: bool,
}

impl MessageCounter {
    pub fn label(&self) -> String {
        format!("{}/{}", self.chars, self.limit)
    }
}

impl ContactForm {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Company => &self.company,
            FormField::Timeline => &self.timeline,
            FormField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Company => &mut self.company,
            FormField::Timeline => &mut self.timeline,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Add the label if absent, remove it otherwise. Returns whether it is
    /// selected afterwards.
    pub fn toggle_project_type(&mut self, label: &str) -> bool {
        if let Some(pos) = self.project_types.iter().position(|t| t == label) {
            self.project_types.remove(pos);
            false
        } else {
            self.project_types.push(label.to_string());
            true
        }
    }

    #[inline]
    pub fn is_selected(&self, label: &str) -> bool {
        self.project_types.iter().any(|t| t == label)
    }

    pub fn reset(&mut self) {
        *self = ContactForm::default();
    }

    pub fn message_counter(&self) -> MessageCounter {
        let chars = self.message.chars().count();
        MessageCounter {
            chars,
            limit: MESSAGE_SOFT_LIMIT,
            highlighted: chars > MESSAGE_HIGHLIGHT_AFTER,
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        for field in FormField::ALL {
            if field.is_required() && self.field(field).trim().is_empty() {
                return Err(FormError::MissingField(field.name()));
            }
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        if !self.timeline.is_empty() && !TIMELINE_OPTIONS.contains(&self.timeline.as_str()) {
            return Err(FormError::UnknownTimeline(self.timeline.clone()));
        }
        if let Some(unknown) = self
            .project_types
            .iter()
            .find(|t| !PROJECT_TYPE_OPTIONS.iter().any(|(_, label)| label == *t))
        {
            return Err(FormError::UnknownProjectType(unknown.clone()));
        }
        Ok(())
    }

    /// JSON body posted to the form endpoint (camelCase keys).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Loose `local@domain.tld` check, roughly what `type="email"` enforces.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
