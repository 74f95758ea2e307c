//! Framework-free text elements
//!
//! A [`TextElement`] is the plain record a UI layer needs to render a piece
//! of text in a variant: a tag, class names, inline declarations and extra
//! attributes. Nothing here knows about any particular framework.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use typescale_core::{Result, TypescaleError, TypographyContext};

/// The HTML element a text node renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextTag {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    P,
    Span,
    Div,
    Label,
    Small,
    Strong,
    Em,
    Blockquote,
    Code,
}

impl TextTag {
    pub const ALL: [TextTag; 15] = [
        Self::H1,
        Self::H2,
        Self::H3,
        Self::H4,
        Self::H5,
        Self::H6,
        Self::P,
        Self::Span,
        Self::Div,
        Self::Label,
        Self::Small,
        Self::Strong,
        Self::Em,
        Self::Blockquote,
        Self::Code,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::P => "p",
            Self::Span => "span",
            Self::Div => "div",
            Self::Label => "label",
            Self::Small => "small",
            Self::Strong => "strong",
            Self::Em => "em",
            Self::Blockquote => "blockquote",
            Self::Code => "code",
        }
    }

    /// Default element for a variant name: headings map to themselves,
    /// a few well-known names to their element, anything else to `p`
    pub fn for_variant(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "caption" | "small" | "fine-print" => Self::Small,
            "label" | "overline" => Self::Label,
            "quote" | "blockquote" => Self::Blockquote,
            "code" | "mono" => Self::Code,
            other => other.parse().unwrap_or(Self::P),
        }
    }
}

impl fmt::Display for TextTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextTag {
    type Err = TypescaleError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == wanted)
            .ok_or_else(|| TypescaleError::Config(format!("Unsupported text element: {s}")))
    }
}

/// A render-ready description of one text element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextElement {
    pub tag: TextTag,
    pub variant: Option<String>,
    pub class_names: Vec<String>,
    /// Inline declarations, variant first, overrides replacing in place
    pub style: IndexMap<String, String>,
    pub attributes: IndexMap<String, String>,
}

impl TextElement {
    pub fn builder(context: &TypographyContext) -> TextElementBuilder<'_> {
        TextElementBuilder::new(context)
    }

    /// `class` attribute value, or `None` with no classes
    pub fn class_attribute(&self) -> Option<String> {
        (!self.class_names.is_empty()).then(|| self.class_names.join(" "))
    }

    /// `style` attribute value, e.g. `font-size: 16px; font-weight: 700;`
    pub fn style_attribute(&self) -> Option<String> {
        if self.style.is_empty() {
            return None;
        }
        Some(
            self.style
                .iter()
                .map(|(property, value)| format!("{property}: {value};"))
                .collect::<Vec<_>>()
                .join(" "),
        )
    }

    /// Render as HTML with `content` escaped as text
    pub fn to_html(&self, content: &str) -> String {
        let mut html = format!("<{}", self.tag);
        if let Some(class) = self.class_attribute() {
            html.push_str(&format!(" class=\"{}\"", escape_html(&class)));
        }
        if let Some(style) = self.style_attribute() {
            html.push_str(&format!(" style=\"{}\"", escape_html(&style)));
        }
        for (name, value) in &self.attributes {
            html.push_str(&format!(" {name}=\"{}\"", escape_html(value)));
        }
        html.push_str(&format!(">{}</{}>", escape_html(content), self.tag));
        html
    }
}

/// Builds a [`TextElement`] against a [`TypographyContext`]
#[derive(Debug)]
pub struct TextElementBuilder<'a> {
    context: &'a TypographyContext,
    variant: Option<String>,
    tag: Option<TextTag>,
    inline: bool,
    class_names: Vec<String>,
    overrides: Vec<(String, String)>,
    attributes: IndexMap<String, String>,
}

impl<'a> TextElementBuilder<'a> {
    pub fn new(context: &'a TypographyContext) -> Self {
        Self {
            context,
            variant: None,
            tag: None,
            inline: true,
            class_names: Vec::new(),
            overrides: Vec::new(),
            attributes: IndexMap::new(),
        }
    }

    pub fn variant(mut self, name: impl Into<String>) -> Self {
        self.variant = Some(name.into());
        self
    }

    /// Render as this element instead of the variant's default
    pub fn tag(mut self, tag: TextTag) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Skip inline declarations and rely on the `.text-<variant>` class
    pub fn class_only(mut self) -> Self {
        self.inline = false;
        self
    }

    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.class_names.push(name.into());
        self
    }

    /// Set one declaration, replacing the variant's value for the property
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.push((property.into(), value.into()));
        self
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Fails only when the variant is not defined
    pub fn build(self) -> Result<TextElement> {
        let mut style = IndexMap::new();
        let mut class_names = Vec::with_capacity(self.class_names.len() + 1);

        if let Some(name) = &self.variant {
            let styles = self.context.variant(name)?;
            class_names.push(format!("text-{name}"));
            if self.inline {
                for (property, value) in styles.declarations() {
                    style.insert(property.to_string(), value.to_string());
                }
            }
        }
        class_names.extend(self.class_names);
        for (property, value) in self.overrides {
            style.insert(property, value);
        }

        let tag = self.tag.unwrap_or_else(|| {
            self.variant
                .as_deref()
                .map_or(TextTag::Span, TextTag::for_variant)
        });

        Ok(TextElement {
            tag,
            variant: self.variant,
            class_names,
            style,
            attributes: self.attributes,
        })
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use typescale_core::TypographyConfig;

    fn context() -> TypographyContext {
        let config = TypographyConfig::from_json_str(
            r#"{
                "scale": { "type": "modular", "base": 16, "ratio": 1.25 },
                "fonts": { "heading": { "name": "Inter", "files": { "700": "/inter.woff2" } } },
                "variants": {
                    "h1": { "fontSize": "5xl", "fontWeight": 700, "fontFamily": "heading" },
                    "caption": { "fontSize": "sm", "letterSpacing": "wide" },
                    "body": { "fontSize": "base", "lineHeight": 1.5 }
                }
            }"#,
        )
        .unwrap();
        TypographyContext::with_validation(config, true).unwrap()
    }

    #[test]
    fn test_default_tags() {
        assert_eq!(TextTag::for_variant("h1"), TextTag::H1);
        assert_eq!(TextTag::for_variant("H3"), TextTag::H3);
        assert_eq!(TextTag::for_variant("caption"), TextTag::Small);
        assert_eq!(TextTag::for_variant("body"), TextTag::P);
        assert!("marquee".parse::<TextTag>().is_err());
    }

    #[test]
    fn test_variant_element() {
        let context = context();
        let element = TextElement::builder(&context).variant("h1").build().unwrap();
        assert_eq!(element.tag, TextTag::H1);
        assert_eq!(element.class_names, ["text-h1"]);
        assert_eq!(element.style["font-size"], "61.04px");
        assert_eq!(element.style["font-weight"], "700");
        assert!(element.style["font-family"].starts_with("Inter"));
    }

    #[test]
    fn test_overrides_replace_in_place() {
        let context = context();
        let element = TextElement::builder(&context)
            .variant("body")
            .tag(TextTag::Span)
            .style("line-height", "2")
            .style("color", "red")
            .class("lead")
            .build()
            .unwrap();
        assert_eq!(element.tag, TextTag::Span);
        assert_eq!(
            element.style_attribute().unwrap(),
            "font-size: 16px; line-height: 2; color: red;"
        );
        assert_eq!(element.class_attribute().unwrap(), "text-body lead");
    }

    #[test]
    fn test_class_only_has_no_inline_style() {
        let context = context();
        let element = TextElement::builder(&context)
            .variant("caption")
            .class_only()
            .build()
            .unwrap();
        assert_eq!(element.tag, TextTag::Small);
        assert!(element.style_attribute().is_none());
    }

    #[test]
    fn test_unknown_variant() {
        let context = context();
        let result = TextElement::builder(&context).variant("h7").build();
        assert!(matches!(result, Err(TypescaleError::UnknownVariant(name)) if name == "h7"));
    }

    #[test]
    fn test_to_html_escapes() {
        let context = context();
        let element = TextElement::builder(&context)
            .variant("body")
            .attribute("data-testid", "intro")
            .build()
            .unwrap();
        assert_eq!(
            element.to_html("Fish & <Chips>"),
            "<p class=\"text-body\" style=\"font-size: 16px; line-height: 1.5;\" \
             data-testid=\"intro\">Fish &amp; &lt;Chips&gt;</p>"
        );
    }
}
