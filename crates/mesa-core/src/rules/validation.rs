//! Booking request validation
//!
//! Pure functions returning the crate error taxonomy. The rules encode the
//! restaurant's booking constraints: required contact fields, a plausible
//! email shape, a bookable party size, one of the fixed service slots, and
//! no dates in the past.

use crate::errors::{MesaError, Result};
use crate::model::reservation::ReservationRequest;
use chrono::NaiveDate;

/// Smallest bookable party
pub const MIN_GUESTS: u32 = 1;

/// Largest bookable party
pub const MAX_GUESTS: u32 = 20;

/// The restaurant's service slots: lunch and dinner, half-hour steps
pub const SERVICE_SLOTS: [&str; 10] = [
    "13:00", "13:30", "14:00", "14:30", "15:00", "20:00", "20:30", "21:00", "21:30", "22:00",
];

/// Validate a booking request against all rules
pub fn validate_request(request: &ReservationRequest, today: NaiveDate) -> Result<()> {
    require_non_empty("name", &request.name)?;
    require_non_empty("email", &request.email)?;
    require_non_empty("phone", &request.phone)?;
    validate_email(request.email.trim())?;
    validate_guests(request.guests)?;
    validate_time_slot(&request.time)?;
    validate_date(request.date, today)?;
    Ok(())
}

/// Reject empty or whitespace-only required fields
fn require_non_empty(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MesaError::MissingField { field });
    }
    Ok(())
}

/// Check that an email has a plausible shape
///
/// Exactly one `@`, a non-empty local part, and a domain containing a dot.
/// Deliverability is the mail provider's problem, not ours.
pub fn validate_email(email: &str) -> Result<()> {
    let invalid = || MesaError::InvalidEmail {
        value: email.to_string(),
    };

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err(invalid()),
    };
    if local.is_empty() || domain.len() < 3 || !domain.contains('.') {
        return Err(invalid());
    }
    if domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid());
    }
    Ok(())
}

/// Check the party size against the bookable range
pub fn validate_guests(guests: u32) -> Result<()> {
    if !(MIN_GUESTS..=MAX_GUESTS).contains(&guests) {
        return Err(MesaError::InvalidGuestCount {
            guests,
            min: MIN_GUESTS,
            max: MAX_GUESTS,
        });
    }
    Ok(())
}

/// Check the requested time against the fixed service slots
pub fn validate_time_slot(time: &str) -> Result<()> {
    if !SERVICE_SLOTS.contains(&time) {
        return Err(MesaError::InvalidTimeSlot {
            time: time.to_string(),
        });
    }
    Ok(())
}

/// Reject dates before `today`
pub fn validate_date(date: NaiveDate, today: NaiveDate) -> Result<()> {
    if date < today {
        return Err(MesaError::DateInPast {
            date: date.to_string(),
        });
    }
    Ok(())
}

/// Trim notes; empty notes become `None`
pub fn normalize_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ReservationRequest {
        ReservationRequest {
            name: "Xoán Pondal".to_string(),
            email: "xoan@example.com".to_string(),
            phone: "+34 600 333 444".to_string(),
            date: NaiveDate::from_ymd_opt(2030, 8, 2).unwrap(),
            time: "14:00".to_string(),
            guests: 2,
            notes: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(validate_request(&request(), today()).is_ok());
    }

    #[test]
    fn test_blank_required_fields_are_rejected() {
        let mut req = request();
        req.phone = "   ".to_string();
        assert_eq!(
            validate_request(&req, today()).unwrap_err(),
            MesaError::MissingField { field: "phone" }
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("first.last@mail.example.org").is_ok());
        for bad in ["plainaddress", "a@@b.co", "@b.co", "a@nodot", "a@.co", "a@co."] {
            assert!(
                matches!(validate_email(bad), Err(MesaError::InvalidEmail { .. })),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_guest_bounds() {
        assert!(validate_guests(MIN_GUESTS).is_ok());
        assert!(validate_guests(MAX_GUESTS).is_ok());
        assert!(matches!(
            validate_guests(0),
            Err(MesaError::InvalidGuestCount { .. })
        ));
        assert!(matches!(
            validate_guests(MAX_GUESTS + 1),
            Err(MesaError::InvalidGuestCount { .. })
        ));
    }

    #[test]
    fn test_time_must_be_a_service_slot() {
        assert!(validate_time_slot("21:30").is_ok());
        for bad in ["17:00", "21:15", "9pm", ""] {
            assert!(
                matches!(
                    validate_time_slot(bad),
                    Err(MesaError::InvalidTimeSlot { .. })
                ),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_past_dates_are_rejected_today_is_fine() {
        assert!(validate_date(today(), today()).is_ok());
        let yesterday = today().pred_opt().unwrap();
        assert!(matches!(
            validate_date(yesterday, today()),
            Err(MesaError::DateInPast { .. })
        ));
    }

    #[test]
    fn test_normalize_notes() {
        assert_eq!(normalize_notes(None), None);
        assert_eq!(normalize_notes(Some("  ".to_string())), None);
        assert_eq!(
            normalize_notes(Some(" shellfish allergy ".to_string())),
            Some("shellfish allergy".to_string())
        );
    }
}
