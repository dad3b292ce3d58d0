//! The closed set of HTTP methods a route may accept.
//!
//! # Design Decisions
//! - Only GET, POST, PUT and DELETE can be registered
//! - Matching is case-sensitive, like the request line itself
//! - A route's allowed methods are stored as a bit set (cheap membership test)

use std::fmt;
use std::str::FromStr;

use axum::http;

use crate::routing::error::RouteError;

/// A registrable HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Every method a route may declare, in canonical order.
    pub const ALL: [Method; 4] = [Method::Get, Method::Post, Method::Put, Method::Delete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Method::Get => 0b0001,
            Method::Post => 0b0010,
            Method::Put => 0b0100,
            Method::Delete => 0b1000,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Method {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Returned when a string names a method outside the enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMethod(pub String);

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            other => Err(UnknownMethod(other.to_string())),
        }
    }
}

impl TryFrom<&http::Method> for Method {
    type Error = UnknownMethod;

    fn try_from(method: &http::Method) -> Result<Self, Self::Error> {
        method.as_str().parse()
    }
}

/// Set of methods a route accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MethodSet(u8);

impl MethodSet {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, method: Method) {
        self.0 |= method.bit();
    }

    pub fn contains(&self, method: Method) -> bool {
        self.0 & method.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Validate method names for the route at `path`.
    ///
    /// Fails on the first name outside the enumeration. An empty list is
    /// accepted; the method gate then rejects every request to the route.
    pub fn parse<I, M>(path: &str, methods: I) -> Result<Self, RouteError>
    where
        I: IntoIterator<Item = M>,
        M: AsRef<str>,
    {
        let mut set = MethodSet::new();
        for method in methods {
            let method = method.as_ref();
            let parsed: Method = method.parse().map_err(|_| RouteError::UnsupportedMethod {
                method: method.to_string(),
                path: path.to_string(),
            })?;
            set.insert(parsed);
        }
        Ok(set)
    }

    /// Membership test against a raw request method.
    ///
    /// Methods outside the enumeration (HEAD, PATCH, ...) are never allowed.
    pub fn allows(&self, method: &http::Method) -> bool {
        Method::try_from(method).is_ok_and(|m| self.contains(m))
    }

    pub fn iter(&self) -> impl Iterator<Item = Method> + '_ {
        Method::ALL.into_iter().filter(|m| self.contains(*m))
    }
}

impl FromIterator<Method> for MethodSet {
    fn from_iter<I: IntoIterator<Item = Method>>(iter: I) -> Self {
        let mut set = MethodSet::new();
        for method in iter {
            set.insert(method);
        }
        set
    }
}

impl fmt::Display for MethodSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, method) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(method.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_methods() {
        for method in Method::ALL {
            assert_eq!(method.as_str().parse::<Method>(), Ok(method));
        }
    }

    #[test]
    fn test_parse_rejects_other_methods() {
        assert!("PATCH".parse::<Method>().is_err());
        assert!("get".parse::<Method>().is_err()); // Case sensitive
        assert!("".parse::<Method>().is_err());
    }

    #[test]
    fn test_method_set_membership() {
        let set: MethodSet = [Method::Get, Method::Put].into_iter().collect();
        assert!(set.contains(Method::Get));
        assert!(set.contains(Method::Put));
        assert!(!set.contains(Method::Post));

        assert!(set.allows(&http::Method::GET));
        assert!(!set.allows(&http::Method::POST));
        assert!(!set.allows(&http::Method::HEAD));
        assert_eq!(set.to_string(), "GET, PUT");
    }
}
