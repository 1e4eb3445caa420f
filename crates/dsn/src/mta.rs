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

/// Type of the name identifying an MTA in the `Reporting-MTA` field.
///
/// For an SMTP server on an Internet host, the MTA name is the domain
/// name of that host and the "dns" MTA-name-type is used. The RFC
/// reserves other name types, a new one only needs its variant here.
///
/// <https://www.rfc-editor.org/rfc/rfc3464#section-2.1.2>
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
pub enum MtaNameType {
    /// The domain name of an Internet host.
    Dns,
}
