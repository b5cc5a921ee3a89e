use std::fmt::{self, Write};

use super::{Element, Node, NS_XML};

/// Сериализует элемент. Объявление `xmlns` выводится только там, где
/// пространство имён отличается от родительского; атрибутам с собственным
/// пространством имён назначаются префиксы `a0`, `a1`, ..., кроме
/// встроенного `xml:` (`xml:lang`).
impl fmt::Display for Element {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write_element(f, self, "")
    }
}

impl Element {
    /// Сериализует элемент внутри потока, где `default_ns` уже объявлено
    /// (например, `jabber:client` для станз клиента).
    pub fn to_xml_in(
        &self,
        default_ns: &str,
    ) -> String {
        let mut out = String::new();
        // Запись в String не возвращает ошибок.
        let _ = write_element(&mut out, self, default_ns);
        out
    }
}

fn write_element<W: Write>(
    out: &mut W,
    el: &Element,
    parent_ns: &str,
) -> fmt::Result {
    let name = el.name();
    out.write_char('<')?;
    out.write_str(name.local_part())?;
    if name.namespace() != parent_ns {
        out.write_str(" xmlns=\"")?;
        write_escaped(out, name.namespace(), true)?;
        out.write_char('"')?;
    }

    let mut prefix = 0usize;
    for (key, value) in el.attrs() {
        if key.namespace() == NS_XML {
            write!(out, " xml:{}=\"", key.local_part())?;
        } else if key.has_namespace() {
            write!(out, " xmlns:a{prefix}=\"")?;
            write_escaped(out, key.namespace(), true)?;
            write!(out, "\" a{prefix}:{}=\"", key.local_part())?;
            prefix += 1;
        } else {
            write!(out, " {}=\"", key.local_part())?;
        }
        write_escaped(out, value, true)?;
        out.write_char('"')?;
    }

    if el.children().is_empty() {
        return out.write_str("/>");
    }

    out.write_char('>')?;
    for child in el.children() {
        match child {
            Node::Element(child) => write_element(out, child, name.namespace())?,
            Node::Text(text) => write_escaped(out, text, false)?,
        }
    }
    write!(out, "</{}>", name.local_part())
}

fn write_escaped<W: Write>(
    out: &mut W,
    text: &str,
    in_attr: bool,
) -> fmt::Result {
    for ch in text.chars() {
        match ch {
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '"' if in_attr => out.write_str("&quot;")?,
            '\'' if in_attr => out.write_str("&apos;")?,
            _ => out.write_char(ch)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::xml::{
        Element, QName, NS_CLIENT, NS_XML, QN_ID, QN_IQ, QN_NODE, QN_PUBSUB, QN_PUBSUB_ITEMS,
        QN_TYPE,
    };

    /// Тест проверяет точную форму исходящего запроса списка элементов.
    #[test]
    fn test_items_query_wire_shape() {
        let iq = Element::builder(QN_IQ)
            .attr(QN_TYPE, "get")
            .attr(QN_ID, "7")
            .child(
                Element::builder(QN_PUBSUB)
                    .child(Element::builder(QN_PUBSUB_ITEMS).attr(QN_NODE, "news").build())
                    .build(),
            )
            .build();

        assert_eq!(
            iq.to_xml_in(NS_CLIENT),
            "<iq type=\"get\" id=\"7\"><pubsub xmlns=\"http://jabber.org/protocol/pubsub\">\
             <items node=\"news\"/></pubsub></iq>"
        );
        assert!(iq.to_string().starts_with("<iq xmlns=\"jabber:client\" "));
    }

    #[test]
    fn test_escaping() {
        let el = Element::builder(QName::from_static("urn:test", "note"))
            .attr(QName::local("title"), "a \"b\" & <c>")
            .text("x < y & 'z'")
            .build();
        assert_eq!(
            el.to_string(),
            "<note xmlns=\"urn:test\" title=\"a &quot;b&quot; &amp; &lt;c&gt;\">\
             x &lt; y &amp; 'z'</note>"
        );
    }

    #[test]
    fn test_namespaced_attribute_gets_prefix() {
        let el = Element::builder(QName::from_static("urn:test", "x"))
            .attr(QName::from_static("urn:ext", "flag"), "1")
            .build();
        assert_eq!(
            el.to_string(),
            "<x xmlns=\"urn:test\" xmlns:a0=\"urn:ext\" a0:flag=\"1\"/>"
        );
    }

    /// Тест проверяет, что `xml:lang` пишется со встроенным префиксом, без
    /// объявления зарезервированного пространства имён.
    #[test]
    fn test_xml_namespace_attribute_uses_builtin_prefix() {
        let el = Element::builder(QName::from_static("urn:test", "body"))
            .attr(QName::from_static(NS_XML, "lang"), "ru")
            .attr(QName::from_static("urn:ext", "flag"), "1")
            .text("привет")
            .build();
        assert_eq!(
            el.to_string(),
            "<body xmlns=\"urn:test\" xml:lang=\"ru\" xmlns:a0=\"urn:ext\" a0:flag=\"1\">\
             привет</body>"
        );
    }
}
