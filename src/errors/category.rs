use std::fmt;

/// Built-in error categories carried in the `error` key of a rest error body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Malformed or invalid client input
    BadRequest,

    /// Requested resource does not exist
    NotFound,

    /// Caller could not be authenticated
    Unauthorized,

    /// Unexpected failure inside the service
    InternalServerError,
}

impl Category {
    /// Every built-in category, in declaration order
    pub const ALL: [Category; 4] = [
        Self::BadRequest,
        Self::NotFound,
        Self::Unauthorized,
        Self::InternalServerError,
    ];

    /// Wire label for this category
    pub fn label(&self) -> &'static str {
        match self {
            Self::BadRequest => "bad request",
            Self::NotFound => "not found",
            Self::Unauthorized => "unauthorized",
            Self::InternalServerError => "internal server error",
        }
    }

    /// Get HTTP status code for this category
    pub fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::Unauthorized => 401,
            Self::InternalServerError => 500,
        }
    }

    /// Look up a built-in category by its exact wire label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
