//! Message composition
//!
//! Builds the four reservation emails from a reservation record and the
//! restaurant identity. Bodies are small HTML fragments; the exact markup
//! is presentation, not contract.

use crate::message::{Message, RestaurantIdentity};
use mesa_core::model::reservation::{Reservation, DEFAULT_REJECTION_REASON};

/// Notification to the restaurant about a new booking request
pub fn operator_notification(identity: &RestaurantIdentity, r: &Reservation) -> Message {
    let mut html = format!(
        "<h2>New reservation request</h2>\
         <p><strong>Customer:</strong> {}</p>\
         <p><strong>Email:</strong> {}</p>\
         <p><strong>Phone:</strong> {}</p>\
         <p><strong>Date:</strong> {}</p>\
         <p><strong>Time:</strong> {}</p>\
         <p><strong>Guests:</strong> {}</p>",
        r.name, r.email, r.phone, r.date, r.time, r.guests
    );
    if let Some(notes) = &r.notes {
        html.push_str(&format!("<p><strong>Notes:</strong> {}</p>", notes));
    }

    Message {
        to: identity.operator_email.clone(),
        subject: format!(
            "New reservation: {} - {} guests - {} {}",
            r.name, r.guests, r.date, r.time
        ),
        html,
    }
}

/// Acknowledgement to the customer that the request was received
pub fn customer_acknowledgement(identity: &RestaurantIdentity, r: &Reservation) -> Message {
    Message {
        to: r.email.clone(),
        subject: format!("Reservation request received - {}", identity.name),
        html: format!(
            "<h2>Thank you for your reservation request</h2>\
             <p>Dear {},</p>\
             <p>We have received your reservation request with the following details:</p>\
             <ul><li>Date: {}</li><li>Time: {}</li><li>Guests: {}</li></ul>\
             <p>You will receive a confirmation email shortly.</p>\
             <p>{}</p>",
            r.name, r.date, r.time, r.guests, identity.name
        ),
    }
}

/// Confirmation to the customer after staff approve
pub fn customer_approval(identity: &RestaurantIdentity, r: &Reservation) -> Message {
    Message {
        to: r.email.clone(),
        subject: format!("Reservation confirmed - {}", identity.name),
        html: format!(
            "<h2>Your reservation is confirmed</h2>\
             <p>Dear {},</p>\
             <p>We are pleased to confirm your table for {} on {} at {}.</p>\
             <p>We look forward to welcoming you.</p>\
             <p>{}</p>",
            r.name, r.guests, r.date, r.time, identity.name
        ),
    }
}

/// Notice to the customer after staff reject, including the reason
pub fn customer_rejection(identity: &RestaurantIdentity, r: &Reservation) -> Message {
    let reason = r
        .rejection_reason
        .as_deref()
        .unwrap_or(DEFAULT_REJECTION_REASON);

    Message {
        to: r.email.clone(),
        subject: format!("About your reservation request - {}", identity.name),
        html: format!(
            "<h2>We cannot accommodate your reservation</h2>\
             <p>Dear {},</p>\
             <p>Unfortunately we are unable to take your reservation for {} at {}.</p>\
             <p>Reason: {}</p>\
             <p>We hope to welcome you on another occasion.</p>\
             <p>{}</p>",
            r.name, r.date, r.time, reason, identity.name
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mesa_core::model::reservation::ReservationRequest;

    fn identity() -> RestaurantIdentity {
        RestaurantIdentity {
            name: "Riba da Cheda".to_string(),
            operator_email: "bookings@ribadacheda.example".to_string(),
        }
    }

    fn reservation(notes: Option<&str>) -> Reservation {
        let request = ReservationRequest {
            name: "Carmen Souto".to_string(),
            email: "carmen@example.com".to_string(),
            phone: "+34 600 111 222".to_string(),
            date: NaiveDate::from_ymd_opt(2031, 7, 20).unwrap(),
            time: "21:30".to_string(),
            guests: 5,
            notes: notes.map(str::to_string),
        };
        Reservation::from_request(request, NaiveDate::from_ymd_opt(2031, 1, 1).unwrap()).unwrap()
    }

    #[test]
    fn test_operator_notification_carries_all_fields() {
        let message = operator_notification(&identity(), &reservation(Some("birthday dinner")));

        assert_eq!(message.to, "bookings@ribadacheda.example");
        assert_eq!(
            message.subject,
            "New reservation: Carmen Souto - 5 guests - 2031-07-20 21:30"
        );
        for needle in [
            "Carmen Souto",
            "carmen@example.com",
            "+34 600 111 222",
            "2031-07-20",
            "21:30",
            "birthday dinner",
        ] {
            assert!(message.html.contains(needle), "missing {needle:?}");
        }
    }

    #[test]
    fn test_operator_notification_omits_absent_notes() {
        let message = operator_notification(&identity(), &reservation(None));
        assert!(!message.html.contains("Notes"));
    }

    #[test]
    fn test_acknowledgement_goes_to_the_customer() {
        let message = customer_acknowledgement(&identity(), &reservation(None));
        assert_eq!(message.to, "carmen@example.com");
        assert!(message.subject.contains("Riba da Cheda"));
        assert!(message.html.contains("confirmation email shortly"));
    }

    #[test]
    fn test_rejection_includes_reason() {
        let mut r = reservation(None);
        r.reject(Some("Kitchen closed for a private event".to_string()))
            .unwrap();

        let message = customer_rejection(&identity(), &r);
        assert!(message
            .html
            .contains("Kitchen closed for a private event"));
    }

    #[test]
    fn test_rejection_falls_back_to_default_reason() {
        let mut r = reservation(None);
        r.reject(None).unwrap();

        let message = customer_rejection(&identity(), &r);
        assert!(message.html.contains(DEFAULT_REJECTION_REASON));
    }
}
