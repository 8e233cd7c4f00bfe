//! URI template expansion engine
//!
//! Substitutes scalar parameters into a parsed template. Variables missing
//! from the mapping are skipped; an expression with no defined variables
//! expands to nothing.

use std::fmt;
use std::str::FromStr;

use urltpl_domain::{TemplateParams, TemplateSyntaxError};

use super::parser::{Expression, Modifier, TemplatePart, parse_template};

/// RFC 3986 `reserved` characters kept as-is by `+` and `#` expressions.
const RESERVED: &str = ":/?#[]@!$&'()*+,;=";

/// A parsed URI template, reusable across expansions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriTemplate {
    source: String,
    parts: Vec<TemplatePart>,
}

impl UriTemplate {
    /// Parses a template.
    ///
    /// # Errors
    ///
    /// Returns `TemplateSyntaxError` for unterminated or malformed expressions.
    pub fn parse(template: &str) -> Result<Self, TemplateSyntaxError> {
        Ok(Self {
            source: template.to_string(),
            parts: parse_template(template)?,
        })
    }

    /// The original template text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The parsed parts in template order.
    #[must_use]
    pub fn parts(&self) -> &[TemplatePart] {
        &self.parts
    }

    /// Returns true if the template contains at least one expression.
    #[must_use]
    pub fn has_expressions(&self) -> bool {
        self.expressions().next().is_some()
    }

    /// Variable names referenced by the template, in order of appearance.
    #[must_use]
    pub fn variable_names(&self) -> Vec<&str> {
        self.expressions()
            .flat_map(|expr| expr.variables.iter().map(|v| v.name.as_str()))
            .collect()
    }

    /// Expands the template with `params`.
    ///
    /// # Examples
    ///
    /// ```
    /// use urltpl_application::template::UriTemplate;
    /// use urltpl_domain::TemplateParams;
    ///
    /// let template = UriTemplate::parse("https://x.test/test{?foo,bar}").unwrap();
    /// let params = TemplateParams::new().with("foo", "foo").with("bar", "bar");
    /// assert_eq!(template.expand(&params), "https://x.test/test?foo=foo&bar=bar");
    /// ```
    #[must_use]
    pub fn expand(&self, params: &TemplateParams) -> String {
        let mut out = String::with_capacity(self.source.len());
        for part in &self.parts {
            match part {
                TemplatePart::Literal(text) => out.push_str(text),
                TemplatePart::Expression(expr) => expand_expression(expr, params, &mut out),
            }
        }
        out
    }

    fn expressions(&self) -> impl Iterator<Item = &Expression> {
        self.parts.iter().filter_map(|part| match part {
            TemplatePart::Expression(expr) => Some(expr),
            TemplatePart::Literal(_) => None,
        })
    }
}

impl fmt::Display for UriTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for UriTemplate {
    type Err = TemplateSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parses `template` and expands it with `params` in one step.
///
/// # Errors
///
/// Returns `TemplateSyntaxError` for unterminated or malformed expressions.
pub fn expand(template: &str, params: &TemplateParams) -> Result<String, TemplateSyntaxError> {
    UriTemplate::parse(template).map(|t| t.expand(params))
}

fn expand_expression(expr: &Expression, params: &TemplateParams, out: &mut String) {
    let op = expr.operator;
    let mut first = true;

    for var in &expr.variables {
        let Some(value) = params.get(&var.name) else {
            continue;
        };

        out.push_str(if first { op.first() } else { op.separator() });
        first = false;

        let text = value.as_text();
        let text = match var.modifier {
            Modifier::Prefix(n) => text.chars().take(usize::from(n)).collect(),
            Modifier::None | Modifier::Explode => text,
        };

        if op.named() {
            out.push_str(&var.name);
            if text.is_empty() {
                out.push_str(op.if_empty());
                continue;
            }
            out.push('=');
        }

        if op.allow_reserved() {
            encode_reserved(&text, out);
        } else {
            out.push_str(&urlencoding::encode(&text));
        }
    }

    tracing::trace!(expression = ?expr.span, defined = !first, "expanded template expression");
}

/// Encodes everything outside `unreserved` and `reserved`, leaving existing
/// `%XX` triplets intact.
fn encode_reserved(text: &str, out: &mut String) {
    let bytes = text.as_bytes();
    let mut buf = [0_u8; 4];

    for (i, c) in text.char_indices() {
        let keep = c.is_ascii_alphanumeric()
            || matches!(c, '-' | '.' | '_' | '~')
            || RESERVED.contains(c)
            || (c == '%'
                && bytes
                    .get(i + 1..i + 3)
                    .is_some_and(|h| h.iter().all(u8::is_ascii_hexdigit)));

        if keep {
            out.push(c);
        } else {
            out.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }
}
