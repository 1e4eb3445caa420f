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

use crate::ParserError;

/// Header of a mime section.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Header {
    ///
    pub name: String,
    ///
    body: String,
    /// parameter ordering does not matter.
    args: Vec<Arg>,
}

/// Argument of an header.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Arg {
    /// Raw name of the parameter.
    name: String,
    /// Value of the argument, that can be wrapped in quotes.
    value: String,
}

impl Header {
    /// Create a new header, but without adding a newline to the body
    /// and folding it automatically.
    pub fn new_unchecked(name: impl Into<String>, body: impl Into<String>, args: Vec<Arg>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
            args,
        }
    }

    /// Get the body of the trimmed header.
    #[must_use]
    pub fn body(&self) -> &str {
        self.body.trim()
    }

    /// Find an argument in the current header.
    #[must_use]
    pub fn arg(&self, needle: &str) -> Option<&Arg> {
        self.args
            .iter()
            .find(|arg| arg.name().eq_ignore_ascii_case(needle))
    }

    /// Compare the header body against a media type.
    /// Media types are case-insensitive, see <https://www.rfc-editor.org/rfc/rfc2045#section-5.1>.
    #[must_use]
    pub fn is_media_type(&self, media_type: &str) -> bool {
        self.body().eq_ignore_ascii_case(media_type)
    }

    /// Check that the header carries the parameter `needle` with the value `value`.
    /// Both sides of the comparison ignore ASCII case, quotes are excluded.
    #[must_use]
    pub fn has_parameter(&self, needle: &str, value: &str) -> bool {
        self.arg(needle)
            .map_or(false, |arg| arg.value().eq_ignore_ascii_case(value))
    }
}

impl std::str::FromStr for Header {
    type Err = ParserError;

    /// Parse a whole header line, e.g.
    /// `Content-Type: multipart/report; report-type=delivery-status`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((name, rest)) = s.split_once(':') else {
            return Err(ParserError::InvalidHeader(s.to_string()));
        };

        // Cut the body using the ";" separator into a vector of "arg=value" strings.
        let mut args = rest.split(';');
        let body = args.next().unwrap_or_default().to_string();
        let args = args
            .filter(|arg| !arg.trim().is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Arg>, _>>()?;

        Ok(Self {
            name: name.trim().to_string(),
            body,
            args,
        })
    }
}

impl std::fmt::Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)?;
        f.write_str(":")?;
        f.write_str(&self.body)?;

        for arg in &self.args {
            f.write_fmt(format_args!(";{}={}", arg.name, arg.raw_value()))?;
        }

        Ok(())
    }
}

impl std::str::FromStr for Arg {
    type Err = ParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((name, value)) = s.split_once('=') else {
            return Err(ParserError::InvalidArgument(s.to_string()));
        };

        Ok(Self {
            name: name.to_string(),
            value: value.to_string(),
        })
    }
}

impl Arg {
    /// Get the trimmed name of the argument.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.trim()
    }

    /// Get the trimmed value of the argument, without any wrapping quotes.
    /// We can't use a simple `trim` like the `Arg::name()` method
    /// because quotes are not WSPs.
    #[must_use]
    pub fn value(&self) -> &str {
        let value = self.value.trim();
        match (value.find('"'), value.rfind('"')) {
            (Some(start), Some(end)) if start < end => &value[start + 1..end],
            _ => value,
        }
    }

    /// Get the full value of the argument, with quotes and other characters.
    #[must_use]
    pub fn raw_value(&self) -> &str {
        &self.value
    }
}
