//! Simulated nudge message composition and receipts.
//!
//! A nudge is a friendly reminder the dashboard pretends to send. Nothing is
//! ever delivered; composing one just picks a wording that fits the
//! employee's current compliance state and returns a receipt for the session
//! log.

use serde::{Deserialize, Serialize};

use crate::roster::Employee;

/// Wording variant chosen from the employee's compliance state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NudgeTone {
    /// Task done; congratulate instead of reminding.
    Congratulation,
    /// Deadline has passed.
    Urgent,
    /// Deadline is close (within seven days).
    Reminder,
    /// Plenty of time left; light encouragement.
    Encouragement,
}

/// Record of one simulated send. `delivered` stays `false` forever; no real
/// delivery path exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NudgeReceipt {
    pub employee_id: String,
    pub employee_name: String,
    pub tone: NudgeTone,
    pub message: String,
    pub delivered: bool,
}

/// Pick the wording variant for an employee.
pub fn choose_tone(employee: &Employee) -> NudgeTone {
    if employee.completed {
        NudgeTone::Congratulation
    } else if employee.is_overdue() {
        NudgeTone::Urgent
    } else if employee.due_in_days <= 7 {
        NudgeTone::Reminder
    } else {
        NudgeTone::Encouragement
    }
}

/// Compose a simulated nudge for an employee.
pub fn compose_nudge(employee: &Employee) -> NudgeReceipt {
    let tone = choose_tone(employee);
    let message = match tone {
        NudgeTone::Congratulation => format!(
            "Nice work, {} — your compliance task is complete. Keep it up!",
            employee.name
        ),
        NudgeTone::Urgent => format!(
            "Hi {}, your compliance task is {} days overdue. Please complete it today.",
            employee.name,
            -employee.due_in_days
        ),
        NudgeTone::Reminder => format!(
            "Hi {}, your compliance task is due in {} days. A few minutes now saves a scramble later.",
            employee.name, employee.due_in_days
        ),
        NudgeTone::Encouragement => format!(
            "Hi {}, friendly heads-up: your compliance task is due in {} days.",
            employee.name, employee.due_in_days
        ),
    };
    NudgeReceipt {
        employee_id: employee.id.clone(),
        employee_name: employee.name.clone(),
        tone,
        message,
        delivered: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Department;

    fn emp(completed: bool, due_in_days: i32) -> Employee {
        Employee {
            id: "feed0001".into(),
            name: "Legal_Emp_4".into(),
            department: Department::Legal,
            completed,
            points: 6,
            due_in_days,
            completion_pct: None,
        }
    }

    #[test]
    fn tone_from_state() {
        assert_eq!(choose_tone(&emp(true, -5)), NudgeTone::Congratulation);
        assert_eq!(choose_tone(&emp(false, -5)), NudgeTone::Urgent);
        assert_eq!(choose_tone(&emp(false, 3)), NudgeTone::Reminder);
        assert_eq!(choose_tone(&emp(false, 7)), NudgeTone::Reminder);
        assert_eq!(choose_tone(&emp(false, 30)), NudgeTone::Encouragement);
    }

    #[test]
    fn receipt_is_never_delivered() {
        let receipt = compose_nudge(&emp(false, 2));
        assert!(!receipt.delivered);
        assert_eq!(receipt.employee_id, "feed0001");
    }

    #[test]
    fn urgent_message_reports_positive_day_count() {
        let receipt = compose_nudge(&emp(false, -12));
        assert_eq!(receipt.tone, NudgeTone::Urgent);
        assert!(receipt.message.contains("12 days overdue"));
    }

    #[test]
    fn message_addresses_employee_by_name() {
        let receipt = compose_nudge(&emp(false, 20));
        assert!(receipt.message.contains("Legal_Emp_4"));
    }
}
