use crate::{
    jid::Jid,
    xml::{Element, QN_FROM, QN_ID, QN_IQ, QN_TYPE, STR_ERROR, STR_RESULT},
};

/// Проверяет, что станза пришла от `target`.
///
/// Пустой `target` означает собственный сервер клиента: сервер может
/// представляться как своим доменом, так и голым адресом пользователя.
/// Отсутствующий `from` эквивалентен пустому адресу; неразборчивый `from`
/// не совпадает ни с чем.
pub fn match_stanza_from(
    stanza: &Element,
    target: &Jid,
    own_jid: &Jid,
) -> bool {
    let Ok(from) = Jid::from_attr(stanza.attr(&QN_FROM)) else {
        return false;
    };

    if from == *target {
        return true;
    }
    if !target.is_empty() {
        return false;
    }
    from == own_jid.domain_jid() || from == own_jid.bare()
}

/// Проверяет, что станза является ответом (`result` или `error`) на IQ с
/// идентификатором `id`, отправленный на `target`.
pub fn match_response_iq(
    stanza: &Element,
    target: &Jid,
    id: &str,
    own_jid: &Jid,
) -> bool {
    if stanza.name() != &QN_IQ {
        return false;
    }
    if stanza.attr(&QN_ID) != Some(id) {
        return false;
    }
    if !matches!(stanza.attr(&QN_TYPE), Some(STR_RESULT) | Some(STR_ERROR)) {
        return false;
    }
    match_stanza_from(stanza, target, own_jid)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::xml::{QN_MESSAGE, STR_GET};

    fn jid(s: &str) -> Jid {
        s.parse().unwrap()
    }

    fn from(addr: Option<&str>) -> Element {
        let mut el = Element::new(QN_MESSAGE);
        if let Some(addr) = addr {
            el.set_attr(QN_FROM, addr);
        }
        el
    }

    #[rstest]
    #[case(Some("pubsub.example.com"), true)]
    #[case(Some("PubSub.Example.com"), true)]
    #[case(Some("evil.example.com"), false)]
    #[case(Some("pubsub.example.com/res"), false)]
    #[case(Some("@broken"), false)]
    #[case(None, false)]
    fn test_match_explicit_target(
        #[case] sender: Option<&str>,
        #[case] expected: bool,
    ) {
        let target = jid("pubsub.example.com");
        let own = jid("john@site.com/phone");
        assert_eq!(match_stanza_from(&from(sender), &target, &own), expected);
    }

    /// Тест проверяет правила для пустой цели (собственный сервер).
    #[rstest]
    #[case(None, true)]
    #[case(Some("site.com"), true)]
    #[case(Some("john@site.com"), true)]
    #[case(Some("john@site.com/phone"), false)]
    #[case(Some("other.com"), false)]
    fn test_match_empty_target(
        #[case] sender: Option<&str>,
        #[case] expected: bool,
    ) {
        let own = jid("john@site.com/phone");
        assert_eq!(match_stanza_from(&from(sender), &Jid::empty(), &own), expected);
    }

    #[rstest]
    #[case(STR_RESULT, "5", true)]
    #[case(STR_ERROR, "5", true)]
    #[case(STR_GET, "5", false)]
    #[case(STR_RESULT, "6", false)]
    fn test_match_response_iq(
        #[case] iq_type: &str,
        #[case] id: &str,
        #[case] expected: bool,
    ) {
        let target = jid("pubsub.example.com");
        let own = jid("john@site.com");
        let iq = Element::builder(QN_IQ)
            .attr(QN_TYPE, iq_type)
            .attr(QN_ID, id)
            .attr(QN_FROM, "pubsub.example.com")
            .build();
        assert_eq!(match_response_iq(&iq, &target, "5", &own), expected);
    }

    #[test]
    fn test_match_response_requires_iq() {
        let target = jid("pubsub.example.com");
        let msg = Element::builder(QN_MESSAGE)
            .attr(QN_TYPE, STR_RESULT)
            .attr(QN_ID, "5")
            .attr(QN_FROM, "pubsub.example.com")
            .build();
        assert!(!match_response_iq(&msg, &target, "5", &Jid::empty()));
    }
}
