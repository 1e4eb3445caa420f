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

//! Field names of a `message/delivery-status` body part.
//!
//! The literals below are written verbatim on the wire and some
//! consumers compare them case-sensitively, they must never be renamed.
//!
//! <https://www.rfc-editor.org/rfc/rfc3464#section-2.3>

/// Recipient address the per-recipient block describes.
pub const FINAL_RECIPIENT: &str = "Final-Recipient";
/// Action performed by the reporting MTA, see [`crate::Action`].
pub const ACTION: &str = "Action";
/// Transport-independent status code, see [`crate::Status`].
pub const STATUS: &str = "Status";
/// MTA that attempted the delivery, see [`crate::MtaNameType`].
pub const REPORTING_MTA: &str = "Reporting-MTA";
/// Not part of RFC 3464. Correlates the report with the original
/// outbound message.
pub const ORIGINAL_MESSAGE_ID: &str = "X-Original-Message-ID";

/// Address type label prefixed to [`FINAL_RECIPIENT`] values.
/// <https://www.rfc-editor.org/rfc/rfc3464#section-2.3.2>
pub const ADDRESS_TYPE_MAIL: &str = "rfc822";
