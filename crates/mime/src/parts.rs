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

use super::Mime;

/// Type of a Mime part.
/// https://www.rfc-editor.org/rfc/rfc2045#section-5
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum Part {
    /// Text content type.
    Text(Vec<String>),
    /// HTML content type.
    Html(Vec<String>),
    /// Any other content type that is not text nor HTML.
    Binary(Vec<String>),
    /// Multipart content type.
    Multipart(Multipart),
}

/// Boundary separated parts.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Multipart {
    /// https://www.rfc-editor.org/rfc/rfc2046#section-5
    pub preamble: String,
    ///
    pub parts: Vec<Mime>,
    /// https://www.rfc-editor.org/rfc/rfc2046#section-5
    pub epilogue: String,
}
