//! Property-based tests: decoded frames do not depend on chunk boundaries.

use lexidian_provider_openai::StreamDecoder;
use lexidian_types::StreamFrame;
use proptest::prelude::*;
use proptest::sample::Index;

fn data_line(text: &str) -> String {
    format!("data: {}\n", serde_json::json!({"choices": [{"text": text}]}))
}

/// Feed `bytes` split at `cuts` (byte offsets, any order) and collect frames.
fn decode_split(bytes: &[u8], cuts: &[usize]) -> Vec<StreamFrame> {
    let mut cuts: Vec<usize> = cuts.iter().copied().filter(|&c| c <= bytes.len()).collect();
    cuts.sort_unstable();
    cuts.dedup();

    let mut decoder = StreamDecoder::new();
    let mut frames = Vec::new();
    let mut start = 0;
    for cut in cuts {
        frames.extend(decoder.feed(&bytes[start..cut]));
        start = cut;
    }
    frames.extend(decoder.feed(&bytes[start..]));
    frames.extend(decoder.finish());
    frames
}

#[test]
fn single_line_split_at_every_offset() {
    let line = b"data: {\"choices\":[{\"text\":\"hi\"}]}\n";
    let whole = decode_split(line, &[]);
    assert_eq!(whole, vec![StreamFrame::TextDelta("hi".into())]);

    for offset in 0..=line.len() {
        assert_eq!(decode_split(line, &[offset]), whole, "split at {offset}");
    }
}

#[test]
fn multibyte_body_split_at_every_offset() {
    let body = format!("{}{}data: [DONE]\n", data_line("naïve"), data_line("日本語 🎉"));
    let bytes = body.as_bytes();
    let expected = vec![
        StreamFrame::TextDelta("naïve".into()),
        StreamFrame::TextDelta("日本語 🎉".into()),
        StreamFrame::End,
    ];

    for a in 0..=bytes.len() {
        assert_eq!(decode_split(bytes, &[a]), expected, "split at {a}");
    }
}

proptest! {
    #[test]
    fn n_lines_then_done_yield_n_deltas_then_end(
        texts in proptest::collection::vec(any::<String>(), 0..8),
        cuts in proptest::collection::vec(any::<Index>(), 0..12),
    ) {
        let mut body: String = texts.iter().map(|t| data_line(t)).collect();
        body.push_str("data: [DONE]\n");
        let bytes = body.as_bytes();
        let cuts: Vec<usize> = cuts.iter().map(|i| i.index(bytes.len() + 1)).collect();

        let mut expected: Vec<StreamFrame> =
            texts.iter().cloned().map(StreamFrame::TextDelta).collect();
        expected.push(StreamFrame::End);

        prop_assert_eq!(decode_split(bytes, &cuts), expected);
    }

    #[test]
    fn bytes_after_end_produce_no_frames(
        tail in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..64), 0..6),
    ) {
        let mut decoder = StreamDecoder::new();
        prop_assert_eq!(decoder.feed(b"data: [DONE]\n"), vec![StreamFrame::End]);
        for chunk in &tail {
            prop_assert!(decoder.feed(chunk).is_empty());
        }
        prop_assert!(decoder.finish().is_empty());
    }

    #[test]
    fn whitespace_only_input_produces_no_frames(
        input in "[ \t\r\n]{0,64}",
        cuts in proptest::collection::vec(any::<Index>(), 0..6),
    ) {
        let bytes = input.as_bytes();
        let cuts: Vec<usize> = cuts.iter().map(|i| i.index(bytes.len() + 1)).collect();
        prop_assert!(decode_split(bytes, &cuts).is_empty());
    }

    #[test]
    fn malformed_lines_never_stop_valid_ones(
        junk in "[a-z ]{1,20}",
        text in "[a-zA-Z0-9 ]{0,20}",
    ) {
        prop_assume!(!junk.trim().is_empty());
        let body = format!("{junk}\n{}", data_line(&text));
        let frames = decode_split(body.as_bytes(), &[]);
        prop_assert_eq!(
            frames,
            vec![
                StreamFrame::Unparseable(junk.trim().to_string()),
                StreamFrame::TextDelta(text),
            ]
        );
    }
}
