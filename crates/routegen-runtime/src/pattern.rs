//! Tokenizer for the bracket parameter grammar
//!
//! Pure functional scanning of route identifier segments into typed tokens.
//! All functions are **pure**: same input → same output, no side effects.

/// A single bracket group found inside a segment
///
/// # Grammar
///
/// ```text
/// group    = "[" ["["] ["..."] name ["=" matcher] "]" ["]"]
/// name     = 1*( any char except "]" and "=" )
/// matcher  = 1*( any char except "]" )
/// ```
///
/// The second opening bracket is tolerated but carries no meaning on its own;
/// the trailing extra `]` is what marks the parameter optional. The `...`
/// prefix is recognized but does not change typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSyntax<'a> {
    pub name: &'a str,
    pub matcher: Option<&'a str>,
    pub optional: bool,
    pub catch_all: bool,
}

/// Represents the pieces a route segment is made of
///
/// # Examples
///
/// ```
/// use routegen_runtime::pattern::{tokenize_segment, SegmentToken};
///
/// let tokens = tokenize_segment("[[page=int]]");
/// assert!(matches!(tokens[0], SegmentToken::Param(p) if p.optional && p.matcher == Some("int")));
///
/// let tokens = tokenize_segment("about");
/// assert_eq!(tokens, vec![SegmentToken::Static("about")]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentToken<'a> {
    /// Literal text
    Static(&'a str),
    /// A bracket parameter group
    Param(ParamSyntax<'a>),
}

/// Splits a segment into static text and parameter groups (pure function)
///
/// Scanning is left to right. At every `[` a group match is attempted; if it
/// fails the bracket is plain text and scanning resumes one character later.
/// After a successful match scanning resumes right after the group, so
/// `[a]-[b]` yields two parameters.
///
/// # Examples
///
/// ```
/// use routegen_runtime::pattern::{tokenize_segment, SegmentToken};
///
/// let tokens = tokenize_segment("[from]-[to]");
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1], SegmentToken::Static("-"));
/// ```
pub fn tokenize_segment(segment: &str) -> Vec<SegmentToken<'_>> {
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut cursor = 0;

    while let Some(offset) = segment[cursor..].find('[') {
        let open = cursor + offset;

        match match_group(segment, open) {
            Some((param, end)) => {
                if literal_start < open {
                    tokens.push(SegmentToken::Static(&segment[literal_start..open]));
                }
                tokens.push(SegmentToken::Param(param));
                literal_start = end;
                cursor = end;
            }
            None => cursor = open + 1,
        }
    }

    if literal_start < segment.len() {
        tokens.push(SegmentToken::Static(&segment[literal_start..]));
    }

    tokens
}

/// Iterates the parameter groups of a whole route identifier, segment by segment
pub fn params_of(route_id: &str) -> impl Iterator<Item = ParamSyntax<'_>> {
    route_id
        .split('/')
        .flat_map(tokenize_segment)
        .filter_map(|token| match token {
            SegmentToken::Param(param) => Some(param),
            SegmentToken::Static(_) => None,
        })
}

/// Attempts a group match starting at the `[` located at `open`
///
/// Alternatives are tried greedy-first: a doubled opening bracket before a
/// single one, a catch-all prefix before a bare name. Returns the parsed
/// group and the byte offset just past it.
fn match_group(segment: &str, open: usize) -> Option<(ParamSyntax<'_>, usize)> {
    [(true, true), (true, false), (false, true), (false, false)]
        .into_iter()
        .find_map(|(double_open, catch_all)| try_group(segment, open, double_open, catch_all))
}

fn try_group(
    segment: &str,
    open: usize,
    double_open: bool,
    catch_all: bool,
) -> Option<(ParamSyntax<'_>, usize)> {
    let mut rest = segment[open..].strip_prefix('[')?;

    if double_open {
        rest = rest.strip_prefix('[')?;
    }

    if catch_all {
        rest = rest.strip_prefix("...")?;
    }

    let name_len = rest.find([']', '=']).unwrap_or(rest.len());
    if name_len == 0 {
        return None;
    }
    let (name, mut rest) = rest.split_at(name_len);

    let matcher = match rest.strip_prefix('=') {
        Some(after_eq) => {
            let matcher_len = after_eq.find(']').unwrap_or(after_eq.len());
            if matcher_len == 0 {
                return None;
            }
            let (matcher, after) = after_eq.split_at(matcher_len);
            rest = after;
            Some(matcher)
        }
        None => None,
    };

    rest = rest.strip_prefix(']')?;

    let optional = match rest.strip_prefix(']') {
        Some(after) => {
            rest = after;
            true
        }
        None => false,
    };

    let end = segment.len() - rest.len();
    let param = ParamSyntax {
        name,
        matcher,
        optional,
        catch_all,
    };

    Some((param, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn param<'a>(
        name: &'a str,
        matcher: Option<&'a str>,
        optional: bool,
        catch_all: bool,
    ) -> ParamSyntax<'a> {
        ParamSyntax {
            name,
            matcher,
            optional,
            catch_all,
        }
    }

    #[test]
    fn test_tokenize_static() {
        assert_eq!(tokenize_segment("about"), vec![SegmentToken::Static("about")]);
        assert!(tokenize_segment("").is_empty());
    }

    #[rstest]
    #[case("[slug]", param("slug", None, false, false))]
    #[case("[id=number]", param("id", Some("number"), false, false))]
    #[case("[[page]]", param("page", None, true, false))]
    #[case("[[page=int]]", param("page", Some("int"), true, false))]
    #[case("[...rest]", param("rest", None, false, true))]
    #[case("[[...rest]]", param("rest", None, true, true))]
    #[case("[...path=file]", param("path", Some("file"), false, true))]
    fn test_tokenize_single_group(#[case] segment: &str, #[case] expected: ParamSyntax<'static>) {
        assert_eq!(tokenize_segment(segment), vec![SegmentToken::Param(expected)]);
    }

    #[test]
    fn test_double_open_alone_is_not_optional() {
        // `[[slug]` has no trailing marker bracket
        assert_eq!(
            tokenize_segment("[[slug]"),
            vec![SegmentToken::Param(param("slug", None, false, false))]
        );
    }

    #[test]
    fn test_trailing_bracket_marks_optional() {
        assert_eq!(
            tokenize_segment("[slug]]"),
            vec![SegmentToken::Param(param("slug", None, true, false))]
        );
    }

    #[test]
    fn test_multiple_groups_in_segment() {
        assert_eq!(
            tokenize_segment("v[major=int].[minor]"),
            vec![
                SegmentToken::Static("v"),
                SegmentToken::Param(param("major", Some("int"), false, false)),
                SegmentToken::Static("."),
                SegmentToken::Param(param("minor", None, false, false)),
            ]
        );
    }

    #[test]
    fn test_unmatched_brackets_are_literal() {
        assert_eq!(tokenize_segment("[]"), vec![SegmentToken::Static("[]")]);
        assert_eq!(tokenize_segment("[x="), vec![SegmentToken::Static("[x=")]);
        assert_eq!(tokenize_segment("[id=]"), vec![SegmentToken::Static("[id=]")]);
    }

    #[test]
    fn test_bare_dots_fall_back_to_name() {
        assert_eq!(
            tokenize_segment("[...]"),
            vec![SegmentToken::Param(param("...", None, false, false))]
        );
    }

    #[test]
    fn test_params_of_route() {
        let names: Vec<&str> = params_of("/shop/[category]/[[page=int]]/[...rest]")
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["category", "page", "rest"]);
    }

    #[test]
    fn test_params_of_static_route() {
        assert_eq!(params_of("/about/team").count(), 0);
    }
}
