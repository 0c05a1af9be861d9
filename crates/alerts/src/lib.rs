//! Email alert delivery.
//!
//! Renders alert decisions into plain-text emails and delivers them over
//! SMTP, best-effort per recipient.

pub mod mailer;
pub mod message;

pub use mailer::{AlertError, Mailer, SmtpSettings};
pub use message::{render_alert, AlertMessage};
