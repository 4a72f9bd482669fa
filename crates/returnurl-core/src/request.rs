use std::collections::HashMap;

/// The value of a single named request field.
///
/// Form and query decoders may produce structured values (e.g. `ru[]=a`);
/// those arrive as [`FieldValue::List`] and are never treated as a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Scalar(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Returns the value if it is a scalar.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            FieldValue::Scalar(value) => Some(value),
            FieldValue::List(_) => None,
        }
    }

    /// An empty string or an empty list.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Scalar(value) => value.is_empty(),
            FieldValue::List(values) => values.is_empty(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Scalar(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Scalar(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        FieldValue::List(values)
    }
}

/// Read access to the fields of an inbound request.
///
/// `form` covers the submitted body (POST) and `query` the query string
/// (GET). `url` is the URL of the current request as the client sees it,
/// typically path plus query.
pub trait RequestFields {
    fn form(&self, name: &str) -> Option<FieldValue>;

    fn query(&self, name: &str) -> Option<FieldValue>;

    fn url(&self) -> Option<&str>;
}

impl<T: RequestFields + ?Sized> RequestFields for &T {
    fn form(&self, name: &str) -> Option<FieldValue> {
        (**self).form(name)
    }

    fn query(&self, name: &str) -> Option<FieldValue> {
        (**self).query(name)
    }

    fn url(&self) -> Option<&str> {
        (**self).url()
    }
}

/// No request context: every lookup is absent.
impl<T: RequestFields> RequestFields for Option<T> {
    fn form(&self, name: &str) -> Option<FieldValue> {
        self.as_ref()?.form(name)
    }

    fn query(&self, name: &str) -> Option<FieldValue> {
        self.as_ref()?.query(name)
    }

    fn url(&self) -> Option<&str> {
        self.as_ref()?.url()
    }
}

/// An owned snapshot of request fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestData {
    form: HashMap<String, FieldValue>,
    query: HashMap<String, FieldValue>,
    url: Option<String>,
}

impl RequestData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the current request URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Adds a form (body) field.
    pub fn with_form(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.form.insert(name.into(), value.into());
        self
    }

    /// Adds a query string field.
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    pub fn insert_form(&mut self, name: impl Into<String>, value: FieldValue) {
        self.form.insert(name.into(), value);
    }

    pub fn insert_query(&mut self, name: impl Into<String>, value: FieldValue) {
        self.query.insert(name.into(), value);
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = Some(url.into());
    }
}

impl RequestFields for RequestData {
    fn form(&self, name: &str) -> Option<FieldValue> {
        self.form.get(name).cloned()
    }

    fn query(&self, name: &str) -> Option<FieldValue> {
        self.query.get(name).cloned()
    }

    fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}
