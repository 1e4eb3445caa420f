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

//! MIME entity model shared by the gateway pipelines.
//!
//! Entities are built by the ingestion parser and read by the
//! classification and reporting code. This crate only models the
//! entities and their `Content-Type` parameters, it does not parse
//! whole messages.

/// Errors raised by the parser.
pub mod errors;
/// Mime headers definition.
pub mod headers;
/// Mime parts definition.
pub mod parts;

pub use errors::{ParserError, ParserResult};
pub use headers::{Arg, Header};
pub use parts::{Multipart, Part};

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

/// <https://www.rfc-editor.org/rfc/rfc2045>
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Mime {
    /// Mime part headers.
    pub headers: Vec<Header>,
    /// Content of the mime part.
    pub part: Part,
}

impl Mime {
    /// Get the parsed `Content-Type` header of the current mime part,
    /// if there is any.
    #[must_use]
    pub fn content_type(&self) -> Option<&Header> {
        self.headers
            .iter()
            .find(|header| header.name.eq_ignore_ascii_case(CONTENT_TYPE_HEADER))
    }

    /// Extract a boundary from the Content-Type header field
    /// if the current mime part is multipart.
    #[must_use]
    pub fn boundary(&self) -> Option<&str> {
        self.content_type()
            .and_then(|header| header.arg("boundary").map(Arg::value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_entity() -> Mime {
        Mime {
            headers: vec![
                "MIME-Version: 1.0".parse().unwrap(),
                "Content-Type: multipart/report; report-type=delivery-status; boundary=\"RAA14128.773615765/example.com\""
                    .parse()
                    .unwrap(),
            ],
            part: Part::Multipart(Multipart {
                parts: vec![
                    Mime {
                        headers: vec!["Content-Type: text/plain".parse().unwrap()],
                        part: Part::Text(vec!["Your message could not be delivered.\r\n".into()]),
                    },
                    Mime {
                        headers: vec!["Content-Type: message/delivery-status".parse().unwrap()],
                        part: Part::Binary(vec![
                            "Reporting-MTA: dns; mailgate.example.com\r\n".into(),
                        ]),
                    },
                ],
                ..Multipart::default()
            }),
        }
    }

    #[test]
    fn content_type_lookup() {
        let entity = report_entity();

        pretty_assertions::assert_eq!(
            entity.content_type().unwrap().body(),
            "multipart/report"
        );
        pretty_assertions::assert_eq!(
            entity.boundary().unwrap(),
            "RAA14128.773615765/example.com"
        );
    }

    #[test]
    fn content_type_header_name_is_case_insensitive() {
        let entity = Mime {
            headers: vec![Header::new_unchecked(
                "content-type",
                " text/plain",
                vec![" charset=us-ascii".parse().unwrap()],
            )],
            part: Part::Text(vec![]),
        };

        pretty_assertions::assert_eq!(entity.content_type().unwrap().body(), "text/plain");
        pretty_assertions::assert_eq!(
            entity.content_type().unwrap().arg("charset").unwrap().value(),
            "us-ascii"
        );
    }

    #[test]
    fn headerless_entity() {
        let entity = Mime {
            headers: vec![],
            part: Part::Text(vec![]),
        };

        assert!(entity.content_type().is_none());
        assert!(entity.boundary().is_none());
    }
}
