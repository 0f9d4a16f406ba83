//! URL extraction.
//!
//! Finds URL-like substrings and reports them as [`Span`]s in code-point
//! space. Every URL is charged a flat weight by the scanner, so only the
//! extent of each match matters here, not its structure.
//!
//! Rules:
//! - `http://` or `https://` (any case) followed by a host is a URL. Hosts
//!   after a scheme may use any letters; hosts without one are ASCII only.
//! - After a scheme any alphabetic TLD is accepted.
//! - A host without a scheme is a URL when its TLD is known and it is not
//!   glued to the preceding text (`-`, `_`, `.`, `/`).
//! - A scheme-less two-label host with a country-code TLD needs a path
//!   (`example.jp/a` matches, `example.jp` does not), except for `.co` and
//!   `.tv`.
//! - Nothing preceded by an ASCII letter or digit, `@`, `$`, or `#` is a URL.
//! - Trailing sentence punctuation and unbalanced closing brackets are not
//!   part of the URL.

use regex::{Captures, Match, Regex};
use std::sync::LazyLock;

use crate::dictionaries::tlds;
use crate::span::{CodePointMap, Span};

/// Candidate URL: a scheme with a host in any script, or a bare ASCII host,
/// then an optional port and the rest.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)(?:(?P<scheme>https?://)(?P<scheme_host>(?:[\p{L}\p{N}](?:[\p{L}\p{N}_-]*[\p{L}\p{N}])?\.)+(?P<scheme_tld>xn--[a-z0-9-]+|[a-z]{2,63}))|(?-i:(?P<host>(?:[a-zA-Z0-9](?:[a-zA-Z0-9_-]*[a-zA-Z0-9])?\.)+(?P<tld>[xX][nN]--[a-zA-Z0-9-]+|[a-zA-Z]{2,63}))))(?::[0-9]{1,5})?(?P<rest>[/?#][^\s<>"]*)?"#,
    )
    .expect("valid regex")
});

/// Characters dropped from the end of a URL.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ':', ';', '!', '?', '\'', '"', '*'];

/// Extract URLs from `text` with their code-point indices.
///
/// Spans are ordered and non-overlapping.
///
/// ```
/// use tweet_weight_core::urls::extract_urls_with_indices;
///
/// let spans = extract_urls_with_indices("see https://example.com.");
/// assert_eq!(spans.len(), 1);
/// assert_eq!((spans[0].start, spans[0].end), (4, 23));
/// assert_eq!(spans[0].text, "https://example.com");
/// ```
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn extract_urls_with_indices(text: &str) -> Vec<Span> {
    let map = CodePointMap::new(text);
    let mut spans = Vec::new();
    let mut pos = 0;

    while let Some(caps) = URL_PATTERN.captures_at(text, pos) {
        let Some(whole) = caps.get(0) else {
            break;
        };
        pos = match accept(text, &caps) {
            Some((start, end)) => {
                spans.push(map.span(text, start, end));
                whole.end()
            }
            None => resume_after_rejection(text, &caps, whole.end()),
        };
    }

    tracing::trace!(count = spans.len(), "urls extracted");
    spans
}

/// The host and TLD of a candidate, whichever alternative matched.
fn host_and_tld<'t>(caps: &Captures<'t>) -> Option<(Match<'t>, Match<'t>)> {
    caps.name("scheme_host")
        .zip(caps.name("scheme_tld"))
        .or_else(|| caps.name("host").zip(caps.name("tld")))
}

/// Where to search next after a rejected candidate.
///
/// A host whose last label is `http` or `https` followed by `://` swallowed
/// the scheme of the next URL (`Go.https://example.com`), so the search
/// resumes at that label. Otherwise it resumes after the candidate.
fn resume_after_rejection(text: &str, caps: &Captures<'_>, candidate_end: usize) -> usize {
    match host_and_tld(caps) {
        Some((_, tld))
            if (tld.as_str().eq_ignore_ascii_case("http")
                || tld.as_str().eq_ignore_ascii_case("https"))
                && text[tld.end()..].starts_with("://") =>
        {
            tld.start()
        }
        _ => candidate_end,
    }
}

/// Apply the acceptance rules to one candidate, returning its trimmed byte
/// range.
fn accept(text: &str, caps: &Captures<'_>) -> Option<(usize, usize)> {
    let whole = caps.get(0)?;
    let (host, tld) = host_and_tld(caps)?;
    let tld = tld.as_str().to_ascii_lowercase();
    let has_scheme = caps.name("scheme").is_some();

    let before = text[..whole.start()].chars().next_back();
    if before.is_some_and(|c| c.is_ascii_alphanumeric() || matches!(c, '@' | '$' | '#')) {
        return None;
    }
    if !has_scheme && before.is_some_and(|c| matches!(c, '-' | '_' | '.' | '/')) {
        return None;
    }

    let after = text[whole.end()..].chars().next();
    if after.is_some_and(|c| c.is_ascii_alphanumeric() || c == '@') {
        return None;
    }

    if !has_scheme && !tlds::is_known_tld(&tld) {
        return None;
    }

    let end = match caps.name("rest") {
        Some(rest) => trim_rest(text, rest.start(), rest.end()),
        None => whole.end(),
    };

    if !has_scheme
        && end == host.end()
        && tlds::is_country_only(&tld)
        && !tlds::SPECIAL_COUNTRY_TLDS.contains(&tld.as_str())
        && host.as_str().matches('.').count() == 1
    {
        return None;
    }

    Some((whole.start(), end))
}

/// Trim trailing punctuation and unbalanced closers from the path part
/// `text[start..end]`, returning the new end.
fn trim_rest(text: &str, start: usize, mut end: usize) -> usize {
    let rest = &text[start..end];
    let open_parens = rest.matches('(').count();
    let open_brackets = rest.matches('[').count();
    let mut close_parens = rest.matches(')').count();
    let mut close_brackets = rest.matches(']').count();

    while let Some(last) = text[start..end].chars().next_back() {
        match last {
            ')' if close_parens > open_parens => close_parens -= 1,
            ']' if close_brackets > open_brackets => close_brackets -= 1,
            c if TRAILING_PUNCTUATION.contains(&c) => {}
            _ => break,
        }
        end -= last.len_utf8();
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(text: &str) -> Vec<String> {
        extract_urls_with_indices(text)
            .into_iter()
            .map(|s| s.text)
            .collect()
    }

    #[test]
    fn scheme_url_in_sentence() {
        let spans = extract_urls_with_indices("english text 日本語 😷 https://example.com");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].start, 19);
        assert_eq!(spans[0].end, 38);
        assert_eq!(spans[0].text, "https://example.com");
    }

    #[test]
    fn scheme_is_case_insensitive() {
        assert_eq!(urls("HTTPS://Example.COM/x"), vec!["HTTPS://Example.COM/x"]);
    }

    #[test]
    fn bare_domains() {
        assert_eq!(urls("visit example.com today"), vec!["example.com"]);
        assert_eq!(urls("www.example.co.uk"), vec!["www.example.co.uk"]);
    }

    #[test]
    fn paths_queries_and_fragments() {
        assert_eq!(
            urls("go to https://example.com/a/b?c=d#e now"),
            vec!["https://example.com/a/b?c=d#e"]
        );
        assert_eq!(urls("example.com:8080/x"), vec!["example.com:8080/x"]);
    }

    #[test]
    fn trailing_punctuation_trimmed() {
        assert_eq!(urls("see example.com/page."), vec!["example.com/page"]);
        assert_eq!(urls("really? https://example.com/x!?"), vec!["https://example.com/x"]);
    }

    #[test]
    fn balanced_parentheses_kept() {
        assert_eq!(
            urls("(https://en.wikipedia.org/wiki/Rust_(language))"),
            vec!["https://en.wikipedia.org/wiki/Rust_(language)"]
        );
    }

    #[test]
    fn unknown_tld_rejected() {
        assert!(urls("config.yamlx").is_empty());
        assert!(urls("file.notatld").is_empty());
    }

    #[test]
    fn scheme_accepts_unlisted_tld() {
        assert_eq!(urls("https://build.internal/x"), vec!["https://build.internal/x"]);
        assert!(urls("build.internal/x").is_empty());
    }

    #[test]
    fn emails_and_mentions_are_not_urls() {
        assert!(urls("mail user@example.com").is_empty());
        assert!(urls("$example.com").is_empty());
        assert!(urls("#example.com").is_empty());
    }

    #[test]
    fn glued_scheme_less_host_rejected() {
        assert!(urls("x -example.com").is_empty());
        assert!(urls("a/example.com").is_empty());
        assert_eq!(urls("foo-example.com"), vec!["foo-example.com"]);
    }

    #[test]
    fn short_country_domain_needs_path() {
        assert!(urls("example.jp").is_empty());
        assert_eq!(urls("example.jp/about"), vec!["example.jp/about"]);
        assert_eq!(urls("www.example.jp"), vec!["www.example.jp"]);
        assert_eq!(urls("https://example.jp"), vec!["https://example.jp"]);
    }

    #[test]
    fn special_country_domains_allowed() {
        assert_eq!(urls("t.co"), vec!["t.co"]);
        assert_eq!(urls("example.tv"), vec!["example.tv"]);
    }

    #[test]
    fn code_point_indices_after_astral_text() {
        let spans = extract_urls_with_indices("😷😷 example.com");
        assert_eq!(spans[0].start, 3);
        assert_eq!(spans[0].end, 14);
    }

    #[test]
    fn multiple_urls_ordered() {
        let spans = extract_urls_with_indices("a.com and b.org");
        assert_eq!(spans.len(), 2);
        assert!(spans[0].end <= spans[1].start);
    }

    #[test]
    fn scheme_inside_rejected_host_is_found() {
        let spans = extract_urls_with_indices("Go.https://example.com");
        assert_eq!(spans.len(), 1);
        assert_eq!((spans[0].start, spans[0].end), (3, 22));
        assert_eq!(spans[0].text, "https://example.com");
    }

    #[test]
    fn scheme_url_may_follow_slash_or_dot() {
        assert_eq!(urls("see/https://example.com"), vec!["https://example.com"]);
        assert_eq!(urls("end.http://example.com"), vec!["http://example.com"]);
        assert!(urls("see/example.com").is_empty());
    }

    #[test]
    fn bare_host_stops_at_non_ascii_text() {
        let spans = extract_urls_with_indices("日本語example.com");
        assert_eq!(spans.len(), 1);
        assert_eq!((spans[0].start, spans[0].end), (3, 14));
        assert_eq!(spans[0].text, "example.com");
    }

    #[test]
    fn scheme_host_may_be_non_ascii() {
        assert_eq!(urls("https://日本語.jp/a"), vec!["https://日本語.jp/a"]);
    }

    #[test]
    fn long_run_of_closers_is_trimmed() {
        let text = format!("https://a.com/x{}", ")".repeat(200_000));
        assert_eq!(urls(&text), vec!["https://a.com/x"]);

        let text = format!("https://a.com/({}", "]".repeat(200_000));
        assert_eq!(urls(&text), vec!["https://a.com/("]);
    }

    #[test]
    fn no_urls() {
        assert!(urls("").is_empty());
        assert!(urls("plain words only").is_empty());
    }
}
