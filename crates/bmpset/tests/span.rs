use uset_bmpset::{BmpSet, Span, SpanCondition};

fn utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

// Latin letters, CJK block U+4E00..U+4E3F and U+1F600..U+1F64F
const LIST: &[u32] = &[0x41, 0x5b, 0x61, 0x7b, 0x4e00, 0x4e40, 0x1f600, 0x1f650, 0x110000];

#[test]
fn span_member_prefix() {
    let set = BmpSet::new(LIST);
    let s = utf16("abc一丁😀 tail");

    let span = set.span_counted(&s, 0, SpanCondition::Contained);
    assert_eq!(7, span.end);
    assert_eq!(6, span.code_points);

    assert_eq!(8, set.span(&s, 7, SpanCondition::NotContained));
    assert_eq!(s.len(), set.span(&s, 8, SpanCondition::Contained));
}

#[test]
fn span_back_mirrors_span() {
    let set = BmpSet::new(LIST);
    let forward = "abc一丁😀 tail";
    let backward = "tail 😀丁一cba";
    let f = utf16(forward);
    let b = utf16(backward);

    let end = set.span(&f, 0, SpanCondition::Contained);
    let start = set.span_back(&b, b.len(), SpanCondition::Contained);
    assert_eq!(end, b.len() - start);
}

#[test]
fn supplementary_counts_once() {
    let set = BmpSet::new(LIST);
    let s = utf16("😀😁😂");
    assert_eq!(
        Span {
            end: 6,
            code_points: 3
        },
        set.span_counted(&s, 0, SpanCondition::Contained)
    );
    assert_eq!(0, set.span_back(&s, 6, SpanCondition::Contained));
}

#[test]
fn supplementary_not_in_set() {
    let set = BmpSet::new(LIST);
    let s = utf16("a\u{1f650}b");
    assert_eq!(1, set.span(&s, 0, SpanCondition::Contained));
    let span = set.span_counted(&s, 1, SpanCondition::NotContained);
    assert_eq!(3, span.end);
    assert_eq!(1, span.code_points);
    assert_eq!(3, set.span_back(&s, 4, SpanCondition::Contained));
    assert_eq!(1, set.span_back(&s, 3, SpanCondition::NotContained));
}

#[test]
fn split_pair_is_two_surrogates() {
    let set = BmpSet::new(LIST);
    let s = utf16("😀");

    // The whole pair is in the set
    assert_eq!(0, set.span(&s, 0, SpanCondition::NotContained));

    // Starting on the trail unit sees a lone trail surrogate
    assert_eq!(2, set.span(&s, 1, SpanCondition::NotContained));

    // Ending on the lead unit sees a lone lead surrogate
    assert_eq!(0, set.span_back(&s, 1, SpanCondition::NotContained));
}

#[test]
fn utf8_matches_utf16() {
    let set = BmpSet::new(LIST);
    let text = "Hello 一丁 world 😀😀 ÄÖ abc";
    let units = utf16(text);

    let mut i8 = 0;
    let mut i16 = 0;
    let mut cond = SpanCondition::Contained;
    while i8 < text.len() {
        let s8 = set.span_str_counted(text, i8, cond);
        let s16 = set.span_counted(&units, i16, cond);
        assert_eq!(s8.code_points, s16.code_points, "at {i8}");

        i8 = s8.end;
        i16 = s16.end;
        cond = match cond {
            SpanCondition::Contained => SpanCondition::NotContained,
            _ => SpanCondition::Contained,
        };
    }
    assert_eq!(units.len(), i16);
}

#[test]
fn utf8_span_back() {
    let set = BmpSet::new(LIST);
    let text = "12 一丁😀";
    assert_eq!(3, set.span_back_str(text, text.len(), SpanCondition::Contained));
    assert_eq!(0, set.span_back_str(text, 3, SpanCondition::NotContained));
    assert_eq!(0, set.span_back_str(text, 0, SpanCondition::Contained));
}
