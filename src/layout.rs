//! Associates the words of a page with the lines they belong to.
//!
//! The service returns words and lines as independent sequences over the same
//! content stream, with no back-references between them. A word belongs to a
//! line exactly when the word's span fits entirely inside one of the line's
//! spans; a line may carry several disjoint spans when its text is broken
//! across layout discontinuities.

use crate::models::{DocumentLine, DocumentPage, DocumentSpan, DocumentWord};

/// Words of `page` that lie entirely within one of `line`'s spans, in the
/// page's original word order.
///
/// A word straddling a span boundary is excluded outright; there are no
/// partial matches. A page without words or a line without spans yields an
/// empty result.
pub fn words_in_line<'a>(page: &'a DocumentPage, line: &DocumentLine) -> Vec<&'a DocumentWord> {
    page.words
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter(|word| in_spans(word, &line.spans))
        .collect()
}

/// True when the word fits inside any one of the spans. OR semantics with a
/// short-circuit on the first containing span.
fn in_spans(word: &DocumentWord, spans: &[DocumentSpan]) -> bool {
    spans.iter().any(|span| span.contains(&word.span))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(offset: usize, length: usize) -> DocumentWord {
        DocumentWord {
            content: format!("w{offset}"),
            polygon: None,
            span: DocumentSpan { offset, length },
            confidence: 0.9,
        }
    }

    fn line(spans: Vec<DocumentSpan>) -> DocumentLine {
        DocumentLine {
            content: String::new(),
            polygon: None,
            spans,
        }
    }

    fn page(words: Option<Vec<DocumentWord>>) -> DocumentPage {
        DocumentPage {
            page_number: 1,
            angle: None,
            width: 8.5,
            height: 11.0,
            unit: "inch".into(),
            words,
            lines: None,
            selection_marks: None,
            spans: vec![],
        }
    }

    fn span(offset: usize, length: usize) -> DocumentSpan {
        DocumentSpan { offset, length }
    }

    #[test]
    fn words_fully_inside_single_span_all_match() {
        let page = page(Some(vec![word(0, 5), word(5, 1), word(6, 4)]));
        let line = line(vec![span(0, 11)]);

        let matched = words_in_line(&page, &line);
        let offsets: Vec<usize> = matched.iter().map(|w| w.span.offset).collect();
        assert_eq!(offsets, vec![0, 5, 6]);
    }

    #[test]
    fn word_straddling_span_boundary_is_excluded() {
        // Second word occupies [10, 13), which overhangs the [9, 11) span.
        let page = page(Some(vec![word(0, 5), word(10, 3)]));
        let line = line(vec![span(0, 5), span(9, 2)]);

        let matched = words_in_line(&page, &line);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].span.offset, 0);
    }

    #[test]
    fn boundary_exact_containment_matches() {
        let page = page(Some(vec![word(3, 7)]));
        let line = line(vec![span(3, 7)]);
        assert_eq!(words_in_line(&page, &line).len(), 1);
    }

    #[test]
    fn word_matching_any_of_multiple_spans_is_included() {
        let page = page(Some(vec![word(0, 2), word(20, 3), word(40, 1)]));
        let line = line(vec![span(20, 5), span(0, 3)]);

        let offsets: Vec<usize> = words_in_line(&page, &line)
            .iter()
            .map(|w| w.span.offset)
            .collect();
        // Page order is preserved even though the spans arrive out of order.
        assert_eq!(offsets, vec![0, 20]);
    }

    #[test]
    fn line_with_no_spans_matches_nothing() {
        let page = page(Some(vec![word(0, 5), word(6, 4)]));
        assert!(words_in_line(&page, &line(vec![])).is_empty());
    }

    #[test]
    fn page_with_no_words_matches_nothing() {
        let line = line(vec![span(0, 100)]);
        assert!(words_in_line(&page(None), &line).is_empty());
        assert!(words_in_line(&page(Some(vec![])), &line).is_empty());
    }

    #[test]
    fn zero_length_word_on_span_edge_is_contained() {
        let page = page(Some(vec![word(5, 0)]));
        let line = line(vec![span(0, 5)]);
        assert_eq!(words_in_line(&page, &line).len(), 1);
    }

    #[test]
    fn repeated_calls_yield_identical_output() {
        let page = page(Some(vec![word(0, 5), word(10, 3), word(14, 2)]));
        let line = line(vec![span(0, 5), span(14, 2)]);

        let first: Vec<usize> = words_in_line(&page, &line)
            .iter()
            .map(|w| w.span.offset)
            .collect();
        let second: Vec<usize> = words_in_line(&page, &line)
            .iter()
            .map(|w| w.span.offset)
            .collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![0, 14]);
    }
}
