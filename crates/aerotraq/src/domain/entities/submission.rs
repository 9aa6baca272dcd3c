//! Submission - what the intake workflow needs from an application

use chrono::NaiveDate;

use crate::domain::value_objects::Email;
use crate::ports::Fields;

/// A validated application ready to be stored
pub trait Submission: Send + Sync {
    /// Column compared against `email()` during the duplicate check
    fn email_column(&self) -> &'static str;

    /// Address that must be unique within the target table
    fn email(&self) -> &Email;

    /// Map onto the remote table's column names
    fn to_fields(&self, submitted_on: NaiveDate) -> Fields;
}
