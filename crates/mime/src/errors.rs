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

/// Errors raised by the parser.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    /// A header line must contain a colon between its name and body.
    #[error("invalid header line: {0:?}")]
    InvalidHeader(String),
    /// A header parameter must be a `name=value` pair.
    #[error("invalid header parameter: {0:?}")]
    InvalidArgument(String),
}

/// Result emitted by the parser.
pub type ParserResult<T> = Result<T, ParserError>;
