//! Reading multi-segment model responses.

use fabulist_core::SegmentProtocol;
use regex::Regex;
use std::sync::LazyLock;

/// Token placed between segments under [`SegmentProtocol::Separator`].
pub const SEPARATOR: &str = "|||";

static INDEX_TAG: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"\[(\d+)\]"));

/// Split on [`SEPARATOR`], trim each piece and drop empty ones.
///
/// Splitting any returned segment again yields that segment unchanged.
///
/// # Examples
///
/// ```
/// use fabulist_pipeline::split_segments;
///
/// assert_eq!(
///     split_segments(" Scene A |||\n|||Scene B "),
///     vec!["Scene A".to_string(), "Scene B".to_string()]
/// );
/// assert!(split_segments("").is_empty());
/// ```
pub fn split_segments(text: &str) -> Vec<String> {
    text.split(SEPARATOR)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse `[n]`-tagged segments as `(n, body)` pairs ordered by tag number.
///
/// Text before the first tag is ignored and empty bodies are dropped. When
/// a tag number repeats, the first non-empty body wins. Returns `None` when
/// the text has no tags at all.
pub fn parse_indexed(text: &str) -> Option<Vec<(usize, String)>> {
    let pattern = match INDEX_TAG.as_ref() {
        Ok(pattern) => pattern,
        Err(e) => {
            tracing::error!("Index tag pattern failed to compile: {}", e);
            return None;
        }
    };

    let tags: Vec<(usize, usize, usize)> = pattern
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let number = caps.get(1)?.as_str().parse::<usize>().ok()?;
            Some((number, whole.start(), whole.end()))
        })
        .collect();

    if tags.is_empty() {
        return None;
    }

    let mut segments: Vec<(usize, String)> = tags
        .iter()
        .enumerate()
        .map(|(i, &(number, _, body_start))| {
            let body_end = tags.get(i + 1).map_or(text.len(), |next| next.1);
            (number, text[body_start..body_end].trim().to_string())
        })
        .filter(|(_, body)| !body.is_empty())
        .collect();

    // Stable sort keeps repeated tags in order of appearance.
    segments.sort_by_key(|(number, _)| *number);
    let before = segments.len();
    segments.dedup_by_key(|(number, _)| *number);
    if segments.len() < before {
        tracing::warn!(
            dropped = before - segments.len(),
            "Indexed response repeated tags, keeping the first of each"
        );
    }

    Some(segments)
}

/// Read a response according to `protocol`, in order.
///
/// Under [`SegmentProtocol::Indexed`] a count different from `expected` is
/// logged, never rejected, and a response with no tags is read as
/// separator-delimited.
pub fn read_segments(protocol: SegmentProtocol, text: &str, expected: usize) -> Vec<String> {
    match protocol {
        SegmentProtocol::Separator => split_segments(text),
        SegmentProtocol::Indexed => match parse_indexed(text) {
            Some(segments) => {
                if segments.len() != expected {
                    tracing::warn!(
                        expected,
                        actual = segments.len(),
                        "Indexed response segment count mismatch"
                    );
                }
                segments.into_iter().map(|(_, body)| body).collect()
            }
            None => {
                tracing::warn!("Indexed response had no tags, falling back to separator");
                split_segments(text)
            }
        },
    }
}

/// Read a response into exactly `expected` slots, one per requested item.
///
/// Separator segments fill slots by position. Indexed segments fill slot
/// `n - 1` for tag `n`, so a skipped tag leaves its own slot empty instead
/// of shifting later answers. Tags outside `1..=expected` and extra
/// separator segments are dropped.
///
/// # Examples
///
/// ```
/// use fabulist_core::SegmentProtocol;
/// use fabulist_pipeline::read_slots;
///
/// assert_eq!(
///     read_slots(SegmentProtocol::Indexed, "[1] a\n[3] c", 3),
///     vec![Some("a".to_string()), None, Some("c".to_string())]
/// );
/// ```
pub fn read_slots(protocol: SegmentProtocol, text: &str, expected: usize) -> Vec<Option<String>> {
    let tagged = match protocol {
        SegmentProtocol::Separator => None,
        SegmentProtocol::Indexed => {
            let tagged = parse_indexed(text);
            if tagged.is_none() {
                tracing::warn!("Indexed response had no tags, falling back to separator");
            }
            tagged
        }
    };

    match tagged {
        Some(segments) => {
            let mut slots = vec![None; expected];
            for (number, body) in segments {
                match number.checked_sub(1).and_then(|index| slots.get_mut(index)) {
                    Some(slot) => *slot = Some(body),
                    None => tracing::warn!(tag = number, expected, "Ignoring out-of-range tag"),
                }
            }
            slots
        }
        None => {
            let mut slots: Vec<Option<String>> =
                split_segments(text).into_iter().map(Some).collect();
            slots.resize(expected, None);
            slots
        }
    }
}

/// Number a list of texts as `[1] a\n\n[2] b`.
pub fn number_segments(texts: &[String]) -> String {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| format!("[{}] {}", i + 1, text))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_is_idempotent() {
        let inputs = [
            "Scene A|||Scene B",
            "  |||  ||| lone  ",
            "a ||| b|||c|||",
            "no separator at all",
            "||||||",
            "x|||||y",
            "a| ||| b",
        ];
        for input in inputs {
            let once = split_segments(input);
            let twice: Vec<String> = once.iter().flat_map(|s| split_segments(s)).collect();
            assert_eq!(once, twice, "input: {:?}", input);
        }
    }

    #[test]
    fn test_split_keeps_inner_newlines() {
        assert_eq!(
            split_segments("line one\nline two|||next"),
            vec!["line one\nline two".to_string(), "next".to_string()]
        );
    }

    #[test]
    fn test_parse_indexed_orders_by_tag() {
        let parsed = parse_indexed("Here you go:\n[2] second\n[1] first\n[3]   ").unwrap();
        assert_eq!(
            parsed,
            vec![(1, "first".to_string()), (2, "second".to_string())]
        );
    }

    #[test]
    fn test_parse_indexed_inline() {
        assert_eq!(
            parse_indexed("[1] a [2] b").unwrap(),
            vec![(1, "a".to_string()), (2, "b".to_string())]
        );
        assert!(parse_indexed("a|||b").is_none());
    }

    #[test]
    fn test_read_indexed_falls_back_to_separator() {
        assert_eq!(
            read_segments(SegmentProtocol::Indexed, "a|||b", 2),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn test_read_indexed_tolerates_count_mismatch() {
        assert_eq!(
            read_segments(SegmentProtocol::Indexed, "[1] only one", 5),
            vec!["only one".to_string()]
        );
    }

    #[test]
    fn test_separator_ignores_tags() {
        assert_eq!(
            read_segments(SegmentProtocol::Separator, "[1] a [2] b", 2),
            vec!["[1] a [2] b".to_string()]
        );
    }

    #[test]
    fn test_number_segments() {
        let texts = vec!["a".to_string(), "b".to_string()];
        assert_eq!(number_segments(&texts), "[1] a\n\n[2] b");
    }

    #[test]
    fn test_parse_indexed_first_repeated_tag_wins() {
        assert_eq!(
            parse_indexed("[1] a [2] b [1] again").unwrap(),
            vec![(1, "a".to_string()), (2, "b".to_string())]
        );
    }

    #[test]
    fn test_slots_keep_gaps_in_place() {
        assert_eq!(
            read_slots(SegmentProtocol::Indexed, "[1] prompt A\n[3] prompt C", 3),
            vec![Some("prompt A".to_string()), None, Some("prompt C".to_string())]
        );
    }

    #[test]
    fn test_slots_drop_out_of_range_tags() {
        assert_eq!(
            read_slots(SegmentProtocol::Indexed, "[0] zero [2] two [9] nine", 2),
            vec![None, Some("two".to_string())]
        );
    }

    #[test]
    fn test_separator_slots_by_position() {
        assert_eq!(
            read_slots(SegmentProtocol::Separator, "a|||b|||c", 2),
            vec![Some("a".to_string()), Some("b".to_string())]
        );
        assert_eq!(
            read_slots(SegmentProtocol::Separator, "a", 3),
            vec![Some("a".to_string()), None, None]
        );
        assert_eq!(
            read_slots(SegmentProtocol::Indexed, "a|||b", 2),
            vec![Some("a".to_string()), Some("b".to_string())]
        );
    }
}
