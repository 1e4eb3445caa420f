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

//! Delivery status notification vocabulary and classification.
//!
//! Everything needed to recognize an incoming DSN and to fill the
//! `message/delivery-status` part of an outgoing one: the action and
//! MTA-name-type tokens, the enhanced status code builder, the field
//! names and the report classifier.
//!
//! All of it is pure and stateless, report bodies themselves are
//! assembled and parsed by the generation and ingestion pipelines.
//!
//! <https://www.rfc-editor.org/rfc/rfc3464>

pub mod action;
pub mod fields;
pub mod media_type;
pub mod mta;
pub mod report;
pub mod status;

pub use action::Action;
pub use mta::MtaNameType;
pub use report::is_report;
pub use status::Status;
