use serde::{Deserialize, Serialize};

/// The two request types a host may send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Invoke,
    Query,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::Invoke => "invoke",
            RequestKind::Query => "query",
        }
    }

    /// Unrecognized types yield `None`; the type string stays on the request
    /// so it can be echoed back in the response.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "invoke" => Some(RequestKind::Invoke),
            "query" => Some(RequestKind::Query),
            _ => None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub uuid: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "functionName")]
    pub function_name: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Request {
    pub fn new<I, S>(kind: RequestKind, function_name: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Request {
            uuid: uuid::Uuid::new_v4().to_string(),
            kind: kind.as_str().to_string(),
            function_name: function_name.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn invoke<I, S>(function_name: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(RequestKind::Invoke, function_name, args)
    }

    pub fn query<I, S>(function_name: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(RequestKind::Query, function_name, args)
    }

    pub fn request_kind(&self) -> Option<RequestKind> {
        RequestKind::parse(&self.kind)
    }

    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }
}

/// A response always echoes the request's uuid and type. An empty `error`
/// marks success.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub uuid: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, with = "serde_bytes")]
    pub data: Option<Vec<u8>>,
    #[serde(default)]
    pub error: String,
}

impl Response {
    pub fn success(request: &Request, data: Option<Vec<u8>>) -> Self {
        Response {
            uuid: request.uuid.clone(),
            kind: request.kind.clone(),
            data,
            error: String::new(),
        }
    }

    pub fn error(request: &Request, err: impl std::fmt::Display) -> Self {
        Response {
            uuid: request.uuid.clone(),
            kind: request.kind.clone(),
            data: None,
            error: err.to_string(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_empty()
    }
}
