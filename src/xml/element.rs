use super::QName;

/// Дочерний узел элемента.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }
}

/// Элемент XML-дерева: имя, атрибуты в порядке добавления и дочерние узлы
/// в порядке документа.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: QName,
    attrs: Vec<(QName, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: QName) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn builder(name: QName) -> ElementBuilder {
        ElementBuilder {
            element: Self::new(name),
        }
    }

    pub fn name(&self) -> &QName {
        &self.name
    }

    /// Значение атрибута или `None`, если атрибута нет.
    pub fn attr(
        &self,
        name: &QName,
    ) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attr(
        &self,
        name: &QName,
    ) -> bool {
        self.attr(name).is_some()
    }

    /// Устанавливает атрибут; существующее значение заменяется на месте.
    pub fn set_attr(
        &mut self,
        name: QName,
        value: impl Into<String>,
    ) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&QName, &str)> {
        self.attrs.iter().map(|(k, v)| (k, v.as_str()))
    }

    pub fn add_child(
        &mut self,
        child: Element,
    ) {
        self.children.push(Node::Element(child));
    }

    pub fn add_text(
        &mut self,
        text: impl Into<String>,
    ) {
        self.children.push(Node::Text(text.into()));
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Прямые дочерние элементы в порядке документа (текст пропускается).
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Первый прямой дочерний элемент с указанным именем.
    pub fn first_named(
        &self,
        name: &QName,
    ) -> Option<&Element> {
        self.elements().find(|el| el.name() == name)
    }

    /// Все прямые дочерние элементы с указанным именем.
    pub fn named<'a>(
        &'a self,
        name: &'a QName,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.elements().filter(move |el| el.name() == name)
    }

    /// Конкатенация прямых текстовых узлов.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(t) => Some(t.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }
}

/// Построитель элемента.
///
/// ```
/// use xmpubsub::xml::{Element, QN_ID, QN_PUBSUB_EVENT_ITEM};
///
/// let item = Element::builder(QN_PUBSUB_EVENT_ITEM).attr(QN_ID, "1").build();
/// assert_eq!(item.attr(&QN_ID), Some("1"));
/// ```
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    pub fn attr(
        mut self,
        name: QName,
        value: impl Into<String>,
    ) -> Self {
        self.element.set_attr(name, value);
        self
    }

    pub fn child(
        mut self,
        child: Element,
    ) -> Self {
        self.element.add_child(child);
        self
    }

    pub fn children(
        mut self,
        children: impl IntoIterator<Item = Element>,
    ) -> Self {
        for child in children {
            self.element.add_child(child);
        }
        self
    }

    pub fn text(
        mut self,
        text: impl Into<String>,
    ) -> Self {
        self.element.add_text(text);
        self
    }

    pub fn build(self) -> Element {
        self.element
    }
}

impl From<ElementBuilder> for Element {
    fn from(builder: ElementBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::{
        QN_ID, QN_NODE, QN_PUBSUB_EVENT_ITEM, QN_PUBSUB_EVENT_ITEMS, QN_PUBSUB_EVENT_RETRACT,
        QN_TYPE,
    };

    fn items() -> Element {
        Element::builder(QN_PUBSUB_EVENT_ITEMS)
            .attr(QN_NODE, "weather")
            .text("\n  ")
            .child(Element::builder(QN_PUBSUB_EVENT_ITEM).attr(QN_ID, "1").build())
            .child(
                Element::builder(QN_PUBSUB_EVENT_RETRACT)
                    .attr(QN_ID, "2")
                    .build(),
            )
            .child(Element::builder(QN_PUBSUB_EVENT_ITEM).attr(QN_ID, "3").build())
            .build()
    }

    #[test]
    fn test_attr_lookup() {
        let el = items();
        assert_eq!(el.attr(&QN_NODE), Some("weather"));
        assert!(el.has_attr(&QN_NODE));
        assert_eq!(el.attr(&QN_TYPE), None);
    }

    /// Тест проверяет, что `set_attr` заменяет значение, не дублируя атрибут.
    #[test]
    fn test_set_attr_replaces() {
        let mut el = Element::new(QN_PUBSUB_EVENT_ITEM);
        el.set_attr(QN_ID, "a");
        el.set_attr(QN_ID, "b");
        assert_eq!(el.attr(&QN_ID), Some("b"));
        assert_eq!(el.attrs().count(), 1);
    }

    /// Тест проверяет, что `elements` пропускает текст и сохраняет порядок
    /// документа.
    #[test]
    fn test_elements_skip_text_in_order() {
        let el = items();
        assert_eq!(el.children().len(), 4);
        let ids: Vec<_> = el.elements().filter_map(|c| c.attr(&QN_ID)).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_first_named_and_named() {
        let el = items();
        let first = el.first_named(&QN_PUBSUB_EVENT_ITEM).unwrap();
        assert_eq!(first.attr(&QN_ID), Some("1"));
        assert_eq!(el.named(&QN_PUBSUB_EVENT_ITEM).count(), 2);
        assert!(el.first_named(&QN_NODE).is_none());
    }

    #[test]
    fn test_text_concatenation() {
        let el = Element::builder(QN_PUBSUB_EVENT_ITEM)
            .text("sunny")
            .child(Element::new(QN_PUBSUB_EVENT_RETRACT))
            .text(", 21C")
            .build();
        assert_eq!(el.text(), "sunny, 21C");
    }
}
