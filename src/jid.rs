use std::{fmt, str::FromStr};

use thiserror::Error;
use xmpubsub_error::{ErrorExt, StatusCode};

/// Ошибка разбора адреса.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JidError {
    #[error("address has an empty domain: '{0}'")]
    EmptyDomain(String),

    #[error("address has an empty node before '@': '{0}'")]
    EmptyNode(String),

    #[error("address has an empty resource after '/': '{0}'")]
    EmptyResource(String),
}

impl ErrorExt for JidError {
    fn status_code(&self) -> StatusCode {
        StatusCode::InvalidAddress
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Адрес XMPP: `node@domain/resource`.
///
/// Пустой адрес (`Jid::empty()`) обозначает собственный сервер
/// пользователя. Части `node` и `domain` приводятся к нижнему регистру,
/// `resource` сравнивается как есть.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Jid {
    node: String,
    domain: String,
    resource: String,
}

impl Jid {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(
        node: &str,
        domain: &str,
        resource: &str,
    ) -> Self {
        Self {
            node: node.to_ascii_lowercase(),
            domain: domain.to_ascii_lowercase(),
            resource: resource.to_string(),
        }
    }

    /// Разбирает атрибут `from`/`to`; отсутствующий атрибут даёт пустой адрес.
    pub fn from_attr(value: Option<&str>) -> Result<Self, JidError> {
        value.map_or_else(|| Ok(Self::empty()), str::parse)
    }

    pub fn node(&self) -> &str {
        &self.node
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    pub fn is_bare(&self) -> bool {
        self.resource.is_empty()
    }

    /// Адрес без ресурса.
    pub fn bare(&self) -> Self {
        Self {
            node: self.node.clone(),
            domain: self.domain.clone(),
            resource: String::new(),
        }
    }

    /// Адрес, состоящий только из домена.
    pub fn domain_jid(&self) -> Self {
        Self {
            node: String::new(),
            domain: self.domain.clone(),
            resource: String::new(),
        }
    }
}

impl FromStr for Jid {
    type Err = JidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::empty());
        }

        let (rest, resource) = match s.split_once('/') {
            Some((_, "")) => return Err(JidError::EmptyResource(s.to_string())),
            Some((rest, resource)) => (rest, resource),
            None => (s, ""),
        };

        let (node, domain) = match rest.split_once('@') {
            Some(("", _)) => return Err(JidError::EmptyNode(s.to_string())),
            Some((node, domain)) => (node, domain),
            None => ("", rest),
        };

        if domain.is_empty() {
            return Err(JidError::EmptyDomain(s.to_string()));
        }

        Ok(Self::new(node, domain, resource))
    }
}

impl fmt::Display for Jid {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if !self.node.is_empty() {
            write!(f, "{}@", self.node)?;
        }
        write!(f, "{}", self.domain)?;
        if !self.resource.is_empty() {
            write!(f, "/{}", self.resource)?;
        }
        Ok(())
    }
}
