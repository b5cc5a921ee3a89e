use std::{borrow::Cow, fmt};

/// Квалифицированное имя XML: пространство имён + локальное имя.
///
/// Константы протокола объявляются через [`QName::from_static`] без
/// аллокаций; имена, пришедшие из сети, хранятся как `Cow::Owned`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QName {
    namespace: Cow<'static, str>,
    local: Cow<'static, str>,
}

impl QName {
    pub const fn from_static(
        namespace: &'static str,
        local: &'static str,
    ) -> Self {
        Self {
            namespace: Cow::Borrowed(namespace),
            local: Cow::Borrowed(local),
        }
    }

    pub fn new(
        namespace: impl Into<Cow<'static, str>>,
        local: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            local: local.into(),
        }
    }

    /// Имя без пространства имён (так именуются атрибуты станз).
    pub fn local(local: impl Into<Cow<'static, str>>) -> Self {
        Self::new("", local)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn local_part(&self) -> &str {
        &self.local
    }

    pub fn has_namespace(&self) -> bool {
        !self.namespace.is_empty()
    }
}

/// Формат Кларка: `{namespace}local`.
impl fmt::Display for QName {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if self.has_namespace() {
            write!(f, "{{{}}}{}", self.namespace, self.local)
        } else {
            write!(f, "{}", self.local)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Тест проверяет, что статическое и динамическое имя с одинаковым
    /// содержимым равны.
    #[test]
    fn test_static_and_owned_are_equal() {
        const IQ: QName = QName::from_static("jabber:client", "iq");
        let owned = QName::new(String::from("jabber:client"), String::from("iq"));
        assert_eq!(IQ, owned);
    }

    #[test]
    fn test_different_namespace_not_equal() {
        let a = QName::from_static("http://jabber.org/protocol/pubsub", "items");
        let b = QName::from_static("http://jabber.org/protocol/pubsub#event", "items");
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_clark_notation() {
        let name = QName::from_static("jabber:client", "message");
        assert_eq!(name.to_string(), "{jabber:client}message");
        assert_eq!(QName::local("node").to_string(), "node");
    }
}
