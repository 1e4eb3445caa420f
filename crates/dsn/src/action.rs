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

/// Action performed by the reporting MTA as a result of its attempt to
/// deliver the message to one recipient.
///
/// The rendered token is the literal `Action` field value and must stay
/// stable, remote systems track delivery with it.
///
/// <https://www.rfc-editor.org/rfc/rfc3464#section-2.3.3>
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::IntoStaticStr,
    serde_with::SerializeDisplay,
    fake::Dummy,
)]
#[strum(serialize_all = "lowercase")]
pub enum Action {
    /// The message could not be delivered and delivery attempts have been
    /// abandoned. No further notification should be expected.
    Failed,
    /// The message could not be delivered or relayed yet, but attempts
    /// continue. Additional notifications may follow.
    Delayed,
    /// The message reached the recipient address. Does not imply the
    /// message has been read. Terminal for this recipient.
    Delivered,
    /// The message has been relayed or gatewayed into an environment that
    /// does not accept responsibility for generating DSNs upon successful
    /// delivery.
    Relayed,
    /// The message reached the recipient address and was forwarded beyond
    /// it to multiple additional addresses. Unlike [`Action::Delivered`],
    /// further `failed` or `delayed` notifications may follow.
    Expanded,
}

impl Action {
    /// No further notification will be issued for the recipient.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Failed | Self::Delivered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};

    #[rstest::rstest]
    #[case(Action::Failed, "failed")]
    #[case(Action::Delayed, "delayed")]
    #[case(Action::Delivered, "delivered")]
    #[case(Action::Relayed, "relayed")]
    #[case(Action::Expanded, "expanded")]
    fn tokens(#[case] action: Action, #[case] token: &str) {
        pretty_assertions::assert_eq!(action.to_string(), token);
        pretty_assertions::assert_eq!(Into::<&'static str>::into(action), token);
    }

    #[rstest::rstest]
    #[case(Action::Failed, true)]
    #[case(Action::Delayed, false)]
    #[case(Action::Delivered, true)]
    #[case(Action::Relayed, false)]
    #[case(Action::Expanded, false)]
    fn terminal_states(#[case] action: Action, #[case] expected: bool) {
        pretty_assertions::assert_eq!(action.is_terminal(), expected);
    }

    #[test]
    fn serialize_as_token() {
        pretty_assertions::assert_eq!(
            serde_json::to_string(&Action::Delivered).unwrap(),
            "\"delivered\""
        );
    }

    #[test]
    fn rendering_is_stable() {
        let action: Action = Faker.fake();
        pretty_assertions::assert_eq!(action.to_string(), action.to_string());
    }
}
