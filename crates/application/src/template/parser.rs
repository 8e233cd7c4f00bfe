//! URI template parser
//!
//! Splits a template into literal runs and `{...}` expressions, recording the
//! operator, variable list and byte span of each expression.

use std::ops::Range;

use urltpl_domain::{SyntaxErrorReason, TemplateSyntaxError};

/// Largest prefix length accepted by a `:N` modifier.
const MAX_PREFIX_LENGTH: u16 = 9999;

/// Expression operator, selecting how variables are joined and encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `{var}`
    Simple,
    /// `{+var}`
    Reserved,
    /// `{#var}`
    Fragment,
    /// `{.var}`
    Label,
    /// `{/var}`
    PathSegment,
    /// `{;var}`
    PathParameter,
    /// `{?var}`
    Query,
    /// `{&var}`
    QueryContinuation,
}

impl Operator {
    const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Reserved),
            '#' => Some(Self::Fragment),
            '.' => Some(Self::Label),
            '/' => Some(Self::PathSegment),
            ';' => Some(Self::PathParameter),
            '?' => Some(Self::Query),
            '&' => Some(Self::QueryContinuation),
            _ => None,
        }
    }

    /// Text emitted before the first defined variable.
    #[must_use]
    pub const fn first(self) -> &'static str {
        match self {
            Self::Simple | Self::Reserved => "",
            Self::Fragment => "#",
            Self::Label => ".",
            Self::PathSegment => "/",
            Self::PathParameter => ";",
            Self::Query => "?",
            Self::QueryContinuation => "&",
        }
    }

    /// Separator emitted between defined variables.
    #[must_use]
    pub const fn separator(self) -> &'static str {
        match self {
            Self::Simple | Self::Reserved | Self::Fragment => ",",
            Self::Label => ".",
            Self::PathSegment => "/",
            Self::PathParameter => ";",
            Self::Query | Self::QueryContinuation => "&",
        }
    }

    /// Whether each value is emitted as `name=value`.
    #[must_use]
    pub const fn named(self) -> bool {
        matches!(
            self,
            Self::PathParameter | Self::Query | Self::QueryContinuation
        )
    }

    /// Suffix after the name of a named variable whose value is empty.
    #[must_use]
    pub const fn if_empty(self) -> &'static str {
        match self {
            Self::Query | Self::QueryContinuation => "=",
            _ => "",
        }
    }

    /// Whether reserved characters pass through unencoded.
    #[must_use]
    pub const fn allow_reserved(self) -> bool {
        matches!(self, Self::Reserved | Self::Fragment)
    }
}

/// Value modifier attached to a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    /// No modifier.
    None,
    /// `:N`, keep only the first N characters.
    Prefix(u16),
    /// `*`, explode composite values (scalars are unaffected).
    Explode,
}

/// A single variable inside an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarSpec {
    /// The variable name.
    pub name: String,
    /// Its value modifier.
    pub modifier: Modifier,
}

/// A parsed `{...}` expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    /// The expression operator.
    pub operator: Operator,
    /// Variables in declaration order.
    pub variables: Vec<VarSpec>,
    /// Byte range of the expression, braces included.
    pub span: Range<usize>,
}

/// One piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePart {
    /// Text copied to the output as-is.
    Literal(String),
    /// An expression substituted during expansion.
    Expression(Expression),
}

/// Parses `template` into its literal and expression parts.
///
/// A `}` outside an expression is kept as literal text.
///
/// # Errors
///
/// Returns `TemplateSyntaxError` if an expression is unterminated, nested,
/// empty, uses a reserved operator, or declares an invalid variable.
///
/// # Examples
///
/// ```
/// use urltpl_application::template::parser::{parse_template, TemplatePart};
///
/// let parts = parse_template("https://x.test/users/{id}").unwrap();
/// assert_eq!(parts.len(), 2);
/// assert!(matches!(parts[1], TemplatePart::Expression(_)));
/// ```
pub fn parse_template(template: &str) -> Result<Vec<TemplatePart>, TemplateSyntaxError> {
    let error = |position, reason| TemplateSyntaxError::new(template, position, reason);
    let mut parts = Vec::new();
    let mut pos = 0;

    while let Some(offset) = template[pos..].find('{') {
        let open = pos + offset;
        if open > pos {
            parts.push(TemplatePart::Literal(template[pos..open].to_string()));
        }

        let body_start = open + 1;
        let close = match template[body_start..].find(['{', '}']) {
            Some(i) if template.as_bytes()[body_start + i] == b'}' => body_start + i,
            Some(i) => return Err(error(body_start + i, SyntaxErrorReason::NestedExpression)),
            None => return Err(error(open, SyntaxErrorReason::UnterminatedExpression)),
        };

        let expression = parse_expression(&template[body_start..close], open..close + 1)
            .map_err(|reason| error(open, reason))?;
        parts.push(TemplatePart::Expression(expression));
        pos = close + 1;
    }

    if pos < template.len() {
        parts.push(TemplatePart::Literal(template[pos..].to_string()));
    }

    Ok(parts)
}

fn parse_expression(body: &str, span: Range<usize>) -> Result<Expression, SyntaxErrorReason> {
    let mut chars = body.chars();
    let Some(first) = chars.next() else {
        return Err(SyntaxErrorReason::EmptyExpression);
    };

    let (operator, list) = match first {
        '=' | ',' | '!' | '@' | '|' => return Err(SyntaxErrorReason::ReservedOperator(first)),
        c => Operator::from_char(c).map_or((Operator::Simple, body), |op| (op, chars.as_str())),
    };

    if list.is_empty() {
        return Err(SyntaxErrorReason::EmptyExpression);
    }

    let variables = list
        .split(',')
        .map(parse_varspec)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Expression {
        operator,
        variables,
        span,
    })
}

fn parse_varspec(spec: &str) -> Result<VarSpec, SyntaxErrorReason> {
    let (name, modifier) = if let Some((name, length)) = spec.split_once(':') {
        (name, Modifier::Prefix(parse_prefix_length(length)?))
    } else if let Some(name) = spec.strip_suffix('*') {
        (name, Modifier::Explode)
    } else {
        (spec, Modifier::None)
    };

    if !is_valid_varname(name) {
        return Err(SyntaxErrorReason::InvalidVariableName);
    }

    Ok(VarSpec {
        name: name.to_string(),
        modifier,
    })
}

fn parse_prefix_length(digits: &str) -> Result<u16, SyntaxErrorReason> {
    if digits.is_empty() || digits.len() > 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SyntaxErrorReason::InvalidPrefixLength);
    }
    match digits.parse::<u16>() {
        Ok(n) if (1..=MAX_PREFIX_LENGTH).contains(&n) => Ok(n),
        _ => Err(SyntaxErrorReason::InvalidPrefixLength),
    }
}

/// Validates a variable name: `varchar *( ["."] varchar )` where
/// `varchar = ALPHA / DIGIT / "_" / pct-encoded`.
#[must_use]
pub fn is_valid_varname(name: &str) -> bool {
    let bytes = name.as_bytes();
    if bytes.is_empty() || bytes[0] == b'.' || bytes[bytes.len() - 1] == b'.' {
        return false;
    }

    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hex = bytes.get(i + 1..i + 3);
                if !hex.is_some_and(|h| h.iter().all(u8::is_ascii_hexdigit)) {
                    return false;
                }
                i += 3;
                continue;
            }
            b'.' if bytes[i - 1] == b'.' => return false,
            b if b.is_ascii_alphanumeric() || b == b'_' || b == b'.' => {}
            _ => return false,
        }
        i += 1;
    }
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn expression(parts: &[TemplatePart], index: usize) -> &Expression {
        match &parts[index] {
            TemplatePart::Expression(expr) => expr,
            TemplatePart::Literal(text) => panic!("expected expression, found literal {text:?}"),
        }
    }

    fn reason(template: &str) -> SyntaxErrorReason {
        parse_template(template).unwrap_err().reason
    }

    #[test]
    fn test_parse_simple_expression() {
        let parts = parse_template("https://x.test/test/{id}").unwrap();
        assert_eq!(
            parts[0],
            TemplatePart::Literal("https://x.test/test/".to_string())
        );
        let expr = expression(&parts, 1);
        assert_eq!(expr.operator, Operator::Simple);
        assert_eq!(expr.variables[0].name, "id");
        assert_eq!(expr.span, 20..24);
    }

    #[test]
    fn test_parse_query_expression_list() {
        let parts = parse_template("https://x.test/test{?foo,bar}").unwrap();
        let expr = expression(&parts, 1);
        assert_eq!(expr.operator, Operator::Query);
        let names: Vec<_> = expr.variables.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["foo", "bar"]);
    }

    #[test]
    fn test_parse_modifiers() {
        let parts = parse_template("{var:3}{list*}").unwrap();
        assert_eq!(expression(&parts, 0).variables[0].modifier, Modifier::Prefix(3));
        assert_eq!(expression(&parts, 1).variables[0].modifier, Modifier::Explode);
    }

    #[test]
    fn test_no_expressions_is_single_literal() {
        let parts = parse_template("https://x.test/test/123").unwrap();
        assert_eq!(
            parts,
            vec![TemplatePart::Literal("https://x.test/test/123".to_string())]
        );
        assert!(parse_template("").unwrap().is_empty());
    }

    #[test]
    fn test_adjacent_expressions() {
        let parts = parse_template("{a}{b}").unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(expression(&parts, 1).span, 3..6);
    }

    #[test]
    fn test_unterminated_expression() {
        let err = parse_template("https://x.test/{id").unwrap_err();
        assert_eq!(err.reason, SyntaxErrorReason::UnterminatedExpression);
        assert_eq!(err.position, 15);
        assert_eq!(err.template, "https://x.test/{id");
    }

    #[test]
    fn test_nested_expression() {
        let err = parse_template("{a{b}}").unwrap_err();
        assert_eq!(err.reason, SyntaxErrorReason::NestedExpression);
        assert_eq!(err.position, 2);
    }

    #[test]
    fn test_stray_closing_brace_is_literal() {
        let parts = parse_template("a}b").unwrap();
        assert_eq!(parts, vec![TemplatePart::Literal("a}b".to_string())]);
    }

    #[test]
    fn test_malformed_expressions() {
        assert_eq!(reason("{}"), SyntaxErrorReason::EmptyExpression);
        assert_eq!(reason("{?}"), SyntaxErrorReason::EmptyExpression);
        assert_eq!(reason("{=x}"), SyntaxErrorReason::ReservedOperator('='));
        assert_eq!(reason("{|x}"), SyntaxErrorReason::ReservedOperator('|'));
        assert_eq!(reason("{a,,b}"), SyntaxErrorReason::InvalidVariableName);
        assert_eq!(reason("{a b}"), SyntaxErrorReason::InvalidVariableName);
        assert_eq!(reason("{a:0}"), SyntaxErrorReason::InvalidPrefixLength);
        assert_eq!(reason("{a:10000}"), SyntaxErrorReason::InvalidPrefixLength);
        assert_eq!(reason("{a:3*}"), SyntaxErrorReason::InvalidPrefixLength);
    }

    #[test]
    fn test_valid_varnames() {
        assert!(is_valid_varname("id"));
        assert!(is_valid_varname("user_id"));
        assert!(is_valid_varname("a.b"));
        assert!(is_valid_varname("%20x"));
        assert!(is_valid_varname("123"));
    }

    #[test]
    fn test_invalid_varnames() {
        assert!(!is_valid_varname(""));
        assert!(!is_valid_varname(".a"));
        assert!(!is_valid_varname("a."));
        assert!(!is_valid_varname("a..b"));
        assert!(!is_valid_varname("a-b"));
        assert!(!is_valid_varname("%2"));
        assert!(!is_valid_varname("%zz"));
    }
}
