//! Outbound message model

/// A composed transactional email, ready for a transport
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// Recipient address
    pub to: String,

    /// Subject line
    pub subject: String,

    /// HTML body
    pub html: String,
}

/// Who the emails speak for and where operator notifications go
#[derive(Debug, Clone)]
pub struct RestaurantIdentity {
    /// Restaurant name used in subjects and sign-offs
    pub name: String,

    /// Address that receives new-reservation notifications
    pub operator_email: String,
}
