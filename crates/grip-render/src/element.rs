use grip_style::{DeclarationParser, StyleParser};

use crate::capabilities::ServiceContainer;

/// Parses declarations with a host `div`, or the built-in parser when the
/// host cannot create elements.
pub(crate) struct ElementStyleParser<'a> {
    services: &'a dyn ServiceContainer,
}

impl<'a> ElementStyleParser<'a> {
    pub(crate) fn new(services: &'a dyn ServiceContainer) -> Self {
        Self { services }
    }
}

impl StyleParser for ElementStyleParser<'_> {
    fn parse(&self, text: &str) -> Vec<(String, String)> {
        match self.services.create_element("div") {
            Some(mut element) => {
                element.set_style(text);
                element.style_declarations()
            }
            None => DeclarationParser.parse(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::{NoServices, StyledElement};
    use std::cell::RefCell;

    struct FakeElement<'a> {
        tags: &'a RefCell<Vec<String>>,
        css: String,
    }

    impl StyledElement for FakeElement<'_> {
        fn set_style(&mut self, css_text: &str) {
            self.css = css_text.to_string();
        }

        fn style_declarations(&self) -> Vec<(String, String)> {
            self.tags.borrow_mut().push(format!("read:{}", self.css));
            vec![("color".to_string(), "engine-red".to_string())]
        }
    }

    struct Host {
        tags: RefCell<Vec<String>>,
    }

    impl ServiceContainer for Host {
        fn create_element(&self, tag: &str) -> Option<Box<dyn StyledElement + '_>> {
            self.tags.borrow_mut().push(tag.to_string());
            Some(Box::new(FakeElement {
                tags: &self.tags,
                css: String::new(),
            }))
        }
    }

    #[test]
    fn uses_host_element_when_available() {
        let host = Host {
            tags: RefCell::new(Vec::new()),
        };
        let parsed = ElementStyleParser::new(&host).parse("color: red");
        assert_eq!(parsed, vec![("color".to_string(), "engine-red".to_string())]);
        assert_eq!(
            *host.tags.borrow(),
            vec!["div".to_string(), "read:color: red".to_string()]
        );
    }

    #[test]
    fn falls_back_to_builtin_parser() {
        let parsed = ElementStyleParser::new(&NoServices).parse("color: red; top: 0");
        assert_eq!(
            parsed,
            vec![
                ("color".to_string(), "red".to_string()),
                ("top".to_string(), "0".to_string()),
            ]
        );
    }
}
