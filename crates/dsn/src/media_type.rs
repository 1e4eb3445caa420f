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

//! Media types of a delivery status report.
//!
//! <https://www.rfc-editor.org/rfc/rfc6522>

/// Base media type of a report message. Shared by every report kind,
/// the `report-type` parameter carries the actual discriminator.
pub const REPORT_MESSAGE: &str = "multipart/report";

/// Full content type of a delivery status report.
pub const DSN_REPORT: &str = "multipart/report; report-type=delivery-status";

/// Content type of the machine readable part of the report.
/// <https://www.rfc-editor.org/rfc/rfc3464#section-2.1>
pub const DSN_DELIVERY_STATUS: &str = "message/delivery-status";

/// Name of the discriminating parameter of [`REPORT_MESSAGE`].
pub const REPORT_TYPE: &str = "report-type";

/// [`REPORT_TYPE`] value indicating a DSN message.
pub const REPORT_TYPE_VALUE_DELIVERY: &str = "delivery-status";
