//! Summary of a successfully submitted enquiry

use serde::Serialize;
use std::fmt;

/// Values captured on a valid submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnquirySummary {
    pub name: String,
    pub email: String,
    pub contact: String,
    pub category: String,
    pub method: String,
    pub message: String,
}

impl fmt::Display for EnquirySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Congratulations...!!")?;
        writeln!(f)?;
        writeln!(f, "Name                : {}", self.name)?;
        writeln!(f, "Email               : {}", self.email)?;
        writeln!(f, "Contact Number      : {}", self.contact)?;
        writeln!(f, "Category of Inquiry : {}", self.category)?;
        writeln!(f, "Preferred Method    : {}", self.method)?;
        write!(f, "Message             : {}", self.message)
    }
}
