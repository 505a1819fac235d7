// Decode/report step: turn a raw response body into one of the schemas and
// render it. A body that does not fit its schema is never fatal. The failure
// is captured as a `DecodeDiagnostic` and whatever still matches is kept.

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::error::Category;
use serde_json::Value;
use serde_path_to_error::{Path, Segment};
use tracing::{debug, warn};

use crate::models::{AvailabilityRecord, CatalogEntry, Document, ProductDetail, Schema};

/// Coarse kind of a decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// Not well-formed JSON.
    Syntax,
    /// Body ended in the middle of a value.
    Eof,
    /// Well-formed JSON of the wrong shape.
    Data,
    Io,
}

impl From<Category> for DecodeErrorKind {
    fn from(category: Category) -> Self {
        match category {
            Category::Syntax => DecodeErrorKind::Syntax,
            Category::Eof => DecodeErrorKind::Eof,
            Category::Data => DecodeErrorKind::Data,
            Category::Io => DecodeErrorKind::Io,
        }
    }
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DecodeErrorKind::Syntax => "syntax error",
            DecodeErrorKind::Eof => "unexpected end of input",
            DecodeErrorKind::Data => "schema mismatch",
            DecodeErrorKind::Io => "io error",
        })
    }
}

/// What went wrong while decoding a body, with enough context to spot an
/// upstream contract change: the error, where it happened and the raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeDiagnostic {
    pub kind: DecodeErrorKind,
    pub message: String,
    /// JSON path of the offending value, e.g. `[0].price`.
    pub path: Option<String>,
    pub line: usize,
    pub column: usize,
    /// Bytes read up to and including the offending byte. Only set for
    /// syntax and end-of-input errors.
    pub offset: Option<usize>,
    pub body: String,
}

impl DecodeDiagnostic {
    fn new(err: &serde_json::Error, path: Option<&Path>, body: &[u8]) -> Self {
        let kind = DecodeErrorKind::from(err.classify());
        let offset = matches!(kind, DecodeErrorKind::Syntax | DecodeErrorKind::Eof)
            .then(|| byte_offset(body, err.line(), err.column()));
        let path = path.filter(|p| p.iter().next().is_some()).map(Path::to_string);

        DecodeDiagnostic {
            kind,
            message: err.to_string(),
            path,
            line: err.line(),
            column: err.column(),
            offset,
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }
}

impl fmt::Display for DecodeDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error decoding response ({}): {}", self.kind, self.message)?;
        if let Some(offset) = self.offset {
            writeln!(f, "syntax error at byte offset {offset}")?;
        }
        if let Some(path) = &self.path {
            writeln!(f, "at {path}")?;
        }
        write!(f, "response: {}", self.body)
    }
}

/// Line/column (1-based, as reported by serde_json) to a byte count.
fn byte_offset(body: &[u8], line: usize, column: usize) -> usize {
    let line_start: usize = body
        .split(|b| *b == b'\n')
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum();
    line_start + column
}

/// A decoded value and, if the strict decode failed, why.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub value: T,
    pub diagnostic: Option<DecodeDiagnostic>,
}

/// Decode `body` into `T`.
///
/// On failure the value is salvaged: when the body is well-formed JSON, the
/// value the error points at is removed and decoding is retried, so every
/// field that does match survives and the rest take their zero value. A body
/// that is not JSON at all yields `T::default()`.
pub fn decode<T>(body: &[u8]) -> Decoded<T>
where
    T: DeserializeOwned + Default,
{
    let err = match strict(body) {
        Ok(value) => return Decoded { value, diagnostic: None },
        Err(err) => err,
    };
    warn!(kind = %err.kind, path = ?err.path, "response does not match schema");

    Decoded {
        value: salvage(body),
        diagnostic: Some(err),
    }
}

fn strict<T: DeserializeOwned>(body: &[u8]) -> Result<T, DecodeDiagnostic> {
    let mut de = serde_json::Deserializer::from_slice(body);
    let value = serde_path_to_error::deserialize(&mut de)
        .map_err(|err| DecodeDiagnostic::new(err.inner(), Some(err.path()), body))?;
    de.end().map_err(|err| DecodeDiagnostic::new(&err, None, body))?;
    Ok(value)
}

fn salvage<T>(body: &[u8]) -> T
where
    T: DeserializeOwned + Default,
{
    let Ok(mut tree) = serde_json::from_slice::<Value>(body) else {
        return T::default();
    };
    loop {
        let err = match serde_path_to_error::deserialize::<_, T>(&tree) {
            Ok(value) => return value,
            Err(err) => err,
        };
        debug!(path = %err.path(), "dropping mismatched value");
        if !prune(&mut tree, err.path()) {
            return T::default();
        }
    }
}

/// Remove the value at `path` from `tree`. Returns false when the path is
/// empty or does not resolve, i.e. nothing more can be salvaged.
fn prune(tree: &mut Value, path: &Path) -> bool {
    let segments: Vec<&Segment> = path.iter().collect();
    let Some((last, parents)) = segments.split_last() else {
        return false;
    };

    let mut node = tree;
    for segment in parents {
        node = match (node, segment) {
            (Value::Object(map), Segment::Map { key }) => match map.get_mut(key) {
                Some(child) => child,
                None => return false,
            },
            (Value::Array(items), Segment::Seq { index }) => match items.get_mut(*index) {
                Some(child) => child,
                None => return false,
            },
            _ => return false,
        };
    }

    match (node, last) {
        (Value::Object(map), Segment::Map { key }) => map.remove(key).is_some(),
        (Value::Array(items), Segment::Seq { index }) if *index < items.len() => {
            items.remove(*index);
            true
        }
        _ => false,
    }
}

/// Decoded document plus the diagnostic of a failed strict decode.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub document: Document,
    pub diagnostic: Option<DecodeDiagnostic>,
}

impl Report {
    /// Indented JSON, keys in schema declaration order.
    pub fn render(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.document)
    }

    pub fn is_partial(&self) -> bool {
        self.diagnostic.is_some()
    }
}

/// Decode `body` against `schema`.
pub fn decode_document(schema: Schema, body: &[u8]) -> Report {
    fn wrap<T>(decoded: Decoded<T>, f: impl FnOnce(T) -> Document) -> Report {
        Report {
            document: f(decoded.value),
            diagnostic: decoded.diagnostic,
        }
    }

    match schema {
        Schema::Catalog => wrap(decode::<Vec<CatalogEntry>>(body), Document::Catalog),
        Schema::Availability => wrap(decode::<AvailabilityRecord>(body), Document::Availability),
        Schema::ProductDetail => wrap(decode::<ProductDetail>(body), |p| Document::ProductDetail(Box::new(p))),
    }
}
