//! Minimal Postman-style collection structures.
//!
//! Node shape is decided during deserialization (see `de.rs`): anything
//! carrying an `item` array is a folder, anything else carrying `request` is
//! a request, and whatever is left over is kept as
//! [`CollectionNode::Unclassified`].

use serde::Deserialize;
use serde_json::Value;

/// Root of an exported collection. Only `info` and `item` are read; auth,
/// variables, events and the rest are accepted and ignored.
#[derive(Debug, Deserialize)]
pub struct Collection {
    #[serde(default)]
    pub info: Option<Value>,
    pub item: Vec<CollectionNode>,
}

/// One entry of an `item` array. A node with both `item` and `request` is a
/// folder.
#[derive(Debug)]
pub enum CollectionNode {
    Folder(Folder),
    Request(RequestItem),
    Unclassified,
}

#[derive(Debug)]
pub struct Folder {
    pub name: String,
    pub item: Vec<CollectionNode>,
}

#[derive(Debug)]
pub struct RequestItem {
    pub name: String,
    pub request: RequestSpec,
}

/// Postman accepts a bare URL string in place of the request object.
#[derive(Debug)]
pub enum RequestSpec {
    Url(String),
    Detailed(RequestDetails),
    /// `null`, numbers, arrays: a request with no usable URL.
    Other,
}

#[derive(Debug, Default)]
pub struct RequestDetails {
    pub method: Option<String>,
    pub url: Option<RequestUrl>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum RequestUrl {
    Plain(String),
    Structured(StructuredUrl),
    /// Numbers, booleans, arrays: nothing usable.
    Other,
}

#[derive(Debug, PartialEq, Eq)]
pub struct StructuredUrl {
    pub raw: Option<String>,
}

impl RequestUrl {
    /// `None` for `null`.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(url) => Some(RequestUrl::Plain(url)),
            Value::Object(mut fields) => {
                let raw = match fields.remove("raw") {
                    Some(Value::String(raw)) => Some(raw),
                    _ => None,
                };
                Some(RequestUrl::Structured(StructuredUrl { raw }))
            }
            _ => Some(RequestUrl::Other),
        }
    }

    /// Text form of the URL; empty when there is none.
    pub fn resolve(&self) -> &str {
        match self {
            RequestUrl::Plain(url) => url,
            RequestUrl::Structured(s) => s.raw.as_deref().unwrap_or(""),
            RequestUrl::Other => "",
        }
    }
}

impl RequestItem {
    pub fn url(&self) -> &str {
        match &self.request {
            RequestSpec::Url(url) => url,
            RequestSpec::Detailed(d) => d.url.as_ref().map(RequestUrl::resolve).unwrap_or(""),
            RequestSpec::Other => "",
        }
    }

    /// HTTP method as written in the export, if any.
    pub fn method(&self) -> Option<&str> {
        match &self.request {
            RequestSpec::Detailed(d) => d.method.as_deref(),
            RequestSpec::Url(_) | RequestSpec::Other => None,
        }
    }
}

impl Collection {
    pub fn name(&self) -> Option<&str> {
        self.info_field("name")
    }

    /// Schema URL, which carries the export format version.
    pub fn schema(&self) -> Option<&str> {
        self.info_field("schema")
    }

    fn info_field(&self, key: &str) -> Option<&str> {
        self.info.as_ref()?.get(key)?.as_str()
    }
}
