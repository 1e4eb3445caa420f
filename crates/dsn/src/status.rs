/*
 * Mailgate secure mail gateway
 *
 * Copyright (C) 2003 - viridIT SAS
 * Licensed under the Elastic License 2.0
 *
 * You should have received a copy of the Elastic License 2.0 along with
 * this program. If not, see https://www.elastic.co/licensing/elastic-license.
 *
 */

//! Enhanced mail system status codes.
//!
//! ```text
//! status-code = class "." subject "." detail
//! class       = "2"/"4"/"5"
//! subject     = 1*3digit
//! detail      = 1*3digit
//! ```
//!
//! <https://www.rfc-editor.org/rfc/rfc3463#section-2>

/// Success.
pub const SUCCESS: u16 = 2;
/// Persistent transient failure.
pub const TRANSIENT: u16 = 4;
/// Permanent failure.
pub const PERMANENT: u16 = 5;
/// Other or undefined status.
pub const UNDEFINED: u16 = 0;

/// Other undefined status.
pub const UNDEFINED_STATUS: &str = "0.0";
/// Delivery time expired.
pub const NETWORK_EXPIRED: &str = "4.7";
/// Delivery time expired for a processed notification.
pub const NETWORK_EXPIRED_PROCESSED: &str = "4.71";
/// Delivery time expired for a dispatched notification.
pub const NETWORK_EXPIRED_DISPATCHED: &str = "4.72";

/// A formatted status code, as written in the `Status` field of a
/// per-recipient report block.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, fake::Dummy)]
pub struct Status(pub String);

impl Status {
    /// Format a `class.subject.detail` status code.
    ///
    /// The components are joined as-is: callers are trusted to pass
    /// values within the grammar bounds, including the class constants
    /// [`SUCCESS`], [`TRANSIENT`], [`PERMANENT`] and [`UNDEFINED`].
    #[must_use]
    pub fn new(class: u16, subject: u16, detail: u16) -> Self {
        Self(format!("{class}.{subject}.{detail}"))
    }

    /// Format a `class.detail` status code from an already formatted
    /// detail, e.g. the well known delay codes [`NETWORK_EXPIRED`],
    /// [`NETWORK_EXPIRED_PROCESSED`] and [`NETWORK_EXPIRED_DISPATCHED`].
    /// The detail string is passed through unchanged.
    #[must_use]
    pub fn from_detail(class: u16, detail: &str) -> Self {
        Self(format!("{class}.{detail}"))
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[case(Status::new(PERMANENT, 1, 1), "5.1.1")]
    #[case(Status::new(SUCCESS, 0, 0), "2.0.0")]
    #[case(Status::new(TRANSIENT, 4, 7), "4.4.7")]
    #[case(Status::from_detail(TRANSIENT, "7"), NETWORK_EXPIRED)]
    #[case(Status::from_detail(UNDEFINED, "0"), UNDEFINED_STATUS)]
    fn formatting(#[case] status: Status, #[case] expected: &str) {
        pretty_assertions::assert_eq!(status.0, expected);
        pretty_assertions::assert_eq!(status.to_string(), expected);
    }

    // The builder does not bound its inputs, pre-formatted edge case
    // values must pass through unchanged.
    #[test]
    fn out_of_range_components_pass_through() {
        pretty_assertions::assert_eq!(Status::new(3, 1000, 1000).0, "3.1000.1000");
        pretty_assertions::assert_eq!(Status::from_detail(TRANSIENT, "71").0, NETWORK_EXPIRED_PROCESSED);
        pretty_assertions::assert_eq!(Status::from_detail(TRANSIENT, "72").0, NETWORK_EXPIRED_DISPATCHED);
    }

    #[test]
    fn serialize_as_string() {
        pretty_assertions::assert_eq!(
            serde_json::to_string(&Status::new(SUCCESS, 0, 0)).unwrap(),
            "\"2.0.0\""
        );
    }
}
