//! Form submission controller: validate, show busy state, hand the payload
//! to a transport, then restore the form and surface the outcome.

use serde::{Deserialize, Serialize};
use std::fmt;
use vitrina_core::validation::{validate_form, Field, FieldValue, FormReport};

/// How long a success banner stays before fading.
pub const MESSAGE_DISPLAY_MS: f64 = 5000.0;

/// Fade transition time before the banner node is removed.
pub const MESSAGE_FADE_MS: f64 = 300.0;

/// The kind of form being driven; picks the busy indicator, the simulated
/// latency, and the success copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormKind {
    /// Contact / enquiry form.
    Contact,
    /// Newsletter signup.
    Newsletter,
    /// Career application (with file upload).
    Career,
}

impl FormKind {
    /// Simulated network latency for this form.
    #[must_use]
    pub const fn submit_delay_ms(self) -> f64 {
        match self {
            Self::Contact => 1500.0,
            Self::Newsletter => 1000.0,
            Self::Career => 2000.0,
        }
    }

    /// Success banner copy.
    #[must_use]
    pub const fn success_message(self) -> &'static str {
        match self {
            Self::Contact => {
                "Your message has been sent successfully. We will get back to you soon!"
            }
            Self::Newsletter => "Thank you for subscribing to our newsletter!",
            Self::Career => "Your application has been submitted successfully!",
        }
    }

    /// What the submit control shows while sending.
    #[must_use]
    pub const fn busy_indicator(self) -> BusyIndicator {
        match self {
            Self::Newsletter => BusyIndicator::Label("Subscribing..."),
            Self::Contact | Self::Career => BusyIndicator::LoadingDots,
        }
    }

    /// Destination path the payload would be posted to.
    #[must_use]
    pub const fn destination(self) -> &'static str {
        match self {
            Self::Contact => "/api/contact",
            Self::Newsletter => "/api/newsletter",
            Self::Career => "/api/careers",
        }
    }
}

/// Busy state rendered on the submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BusyIndicator {
    /// Animated loading dots.
    LoadingDots,
    /// A replacement label.
    Label(&'static str),
}

/// Banner severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    /// Success banner; self-removes after [`MESSAGE_DISPLAY_MS`].
    Success,
    /// Error banner; stays until the next submission.
    Error,
}

/// Serialized form fields plus a destination, ready for a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormPayload {
    /// Where the submission would be posted.
    pub destination: String,
    /// Name/value pairs; file fields contribute the chosen file name.
    pub fields: Vec<(String, String)>,
}

impl FormPayload {
    /// Build a payload from validated fields.
    #[must_use]
    pub fn from_fields(kind: FormKind, fields: &[Field]) -> Self {
        let fields = fields
            .iter()
            .map(|f| {
                let value = match &f.value {
                    FieldValue::Text(text) => text.clone(),
                    FieldValue::File(meta) => {
                        meta.as_ref().map(|m| m.name.clone()).unwrap_or_default()
                    }
                };
                (f.name.clone(), value)
            })
            .collect();
        Self {
            destination: kind.destination().to_string(),
            fields,
        }
    }
}

/// Transport failure: a rejecting status or a network-level error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportError {
    /// The destination answered with a non-success status.
    Status(u16),
    /// The request never completed.
    Network(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(code) => write!(f, "request failed with status {code}"),
            Self::Network(reason) => write!(f, "request failed: {reason}"),
        }
    }
}

impl std::error::Error for TransportError {}

/// The collaborator that actually delivers a submission.
///
/// `send` begins delivery and returns the earliest time the caller should
/// poll; `poll` yields the outcome exactly once. A deployment supplies an
/// HTTP implementation behind this same contract.
pub trait Transport {
    /// Begin sending a payload. Returns the time (ms) to poll at.
    fn send(&mut self, payload: FormPayload, now_ms: f64) -> f64;

    /// Poll for a completed send. Returns `Some` exactly once per send.
    fn poll(&mut self, now_ms: f64) -> Option<Result<String, TransportError>>;
}

/// The shipped transport: waits out the form's fixed latency, then succeeds.
#[derive(Debug, Clone, Default)]
pub struct SimulatedTransport {
    in_flight: Option<(f64, FormPayload)>,
}

impl SimulatedTransport {
    /// Create an idle simulated transport.
    #[must_use]
    pub const fn new() -> Self {
        Self { in_flight: None }
    }
}

impl Transport for SimulatedTransport {
    fn send(&mut self, payload: FormPayload, now_ms: f64) -> f64 {
        let delay = match payload.destination.as_str() {
            "/api/newsletter" => FormKind::Newsletter.submit_delay_ms(),
            "/api/careers" => FormKind::Career.submit_delay_ms(),
            _ => FormKind::Contact.submit_delay_ms(),
        };
        let ready_at = now_ms + delay;
        self.in_flight = Some((ready_at, payload));
        ready_at
    }

    fn poll(&mut self, now_ms: f64) -> Option<Result<String, TransportError>> {
        match &self.in_flight {
            Some((ready_at, _)) if now_ms >= *ready_at => {
                self.in_flight = None;
                Some(Ok("ok".to_string()))
            }
            _ => None,
        }
    }
}

/// DOM mutations requested by the form controller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FormEffect {
    /// Remove every inline error node and error class.
    ClearErrors,
    /// Render inline errors from a validation report.
    ShowErrors(FormReport),
    /// Disable the submit control.
    DisableSubmit,
    /// Swap the submit control's label for a busy indicator.
    ShowBusy(BusyIndicator),
    /// Hand the payload to the transport.
    Send(FormPayload),
    /// Clear every field.
    ResetForm,
    /// Restore the submit control's label and enabled state.
    RestoreSubmit,
    /// Reset the custom file-input label to its placeholder.
    ResetFileLabel,
    /// Append a transient banner to the form.
    ShowMessage {
        /// Banner copy.
        text: String,
        /// Banner severity.
        kind: MessageKind,
    },
    /// Start the banner's fade-out transition.
    FadeMessage,
    /// Remove the banner node.
    RemoveMessage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
enum Phase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
enum BannerPhase {
    Showing { fade_at: f64 },
    Fading { remove_at: f64 },
}

/// Per-form submission state machine: `idle → submitting → idle`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormController {
    kind: FormKind,
    phase: Phase,
    banner: Option<BannerPhase>,
}

impl FormController {
    /// Create an idle controller for a form of the given kind.
    #[must_use]
    pub const fn new(kind: FormKind) -> Self {
        Self {
            kind,
            phase: Phase::Idle,
            banner: None,
        }
    }

    /// The form kind this controller drives.
    #[must_use]
    pub const fn kind(&self) -> FormKind {
        self.kind
    }

    /// Whether a submission is in flight.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Handle a submit attempt. Validation failure keeps the controller
    /// idle; success moves to submitting and hands the payload off.
    pub fn submit(&mut self, fields: &[Field]) -> Vec<FormEffect> {
        if self.phase == Phase::Submitting {
            return Vec::new();
        }
        let report = validate_form(fields);
        let mut effects = vec![FormEffect::ClearErrors];
        if !report.is_valid() {
            effects.push(FormEffect::ShowErrors(report));
            return effects;
        }
        self.phase = Phase::Submitting;
        effects.push(FormEffect::DisableSubmit);
        effects.push(FormEffect::ShowBusy(self.kind.busy_indicator()));
        effects.push(FormEffect::Send(FormPayload::from_fields(self.kind, fields)));
        effects
    }

    /// The transport finished. Restores the form and surfaces the outcome.
    pub fn complete(
        &mut self,
        result: Result<String, TransportError>,
        now_ms: f64,
    ) -> Vec<FormEffect> {
        if self.phase != Phase::Submitting {
            return Vec::new();
        }
        self.phase = Phase::Idle;
        let mut effects = Vec::new();
        match result {
            Ok(_) => {
                effects.push(FormEffect::ResetForm);
                if self.kind == FormKind::Career {
                    effects.push(FormEffect::ResetFileLabel);
                }
                effects.push(FormEffect::RestoreSubmit);
                effects.push(FormEffect::ShowMessage {
                    text: self.kind.success_message().to_string(),
                    kind: MessageKind::Success,
                });
                self.banner = Some(BannerPhase::Showing {
                    fade_at: now_ms + MESSAGE_DISPLAY_MS,
                });
            }
            Err(err) => {
                // The form keeps its values so the visitor can retry.
                effects.push(FormEffect::RestoreSubmit);
                effects.push(FormEffect::ShowMessage {
                    text: format!("Something went wrong: {err}. Please try again."),
                    kind: MessageKind::Error,
                });
                self.banner = None;
            }
        }
        effects
    }

    /// Advance the banner lifecycle.
    pub fn tick(&mut self, now_ms: f64) -> Vec<FormEffect> {
        match self.banner {
            Some(BannerPhase::Showing { fade_at }) if now_ms >= fade_at => {
                self.banner = Some(BannerPhase::Fading {
                    remove_at: fade_at + MESSAGE_FADE_MS,
                });
                vec![FormEffect::FadeMessage]
            }
            Some(BannerPhase::Fading { remove_at }) if now_ms >= remove_at => {
                self.banner = None;
                vec![FormEffect::RemoveMessage]
            }
            _ => Vec::new(),
        }
    }

    /// The next deadline the controller is waiting on, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<f64> {
        match self.banner {
            Some(BannerPhase::Showing { fade_at }) => Some(fade_at),
            Some(BannerPhase::Fading { remove_at }) => Some(remove_at),
            None => None,
        }
    }
}
