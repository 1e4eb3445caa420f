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

use crate::media_type;
use mailgate_mime::Mime;

/// Check whether the entity is a delivery status report.
///
/// `multipart/report` alone is a generic envelope shared with other
/// report kinds (disposition notifications among others), the
/// `report-type` parameter is the discriminator and both are required.
///
/// An absent entity is not a report: callers filter streams of optional
/// entities through this predicate without an existence check, `None`
/// yields `false` and the call never fails. A missing or malformed
/// content type yields `false` as well, flagging it is up to the
/// ingestion parser.
#[must_use]
pub fn is_report(entity: Option<&Mime>) -> bool {
    entity
        .and_then(Mime::content_type)
        .map_or(false, |content_type| {
            content_type.is_media_type(media_type::REPORT_MESSAGE)
                && content_type.has_parameter(
                    media_type::REPORT_TYPE,
                    media_type::REPORT_TYPE_VALUE_DELIVERY,
                )
        })
}
