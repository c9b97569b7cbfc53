use boundstr::{bounded_append, bounded_copy, bounded_format};
use tracing::debug;

use crate::step::Step;

const FILL: u8 = b'#';

/// Replay the boundary scenarios against a buffer of `capacity` bytes.
pub fn run_all(capacity: usize) -> Vec<Step> {
    let mut buf = vec![0u8; capacity];
    let mut steps = Vec::with_capacity(6);

    let needed = bounded_copy(&mut buf, "ABCDEFGHIJKLMNO");
    steps.push(Step::capture("Exact-fit copy", &buf, needed));

    let needed = bounded_copy(&mut buf, "ABCDEFGHIJKLMNOP");
    steps.push(Step::capture("Off-by-one copy", &buf, needed));

    let big = vec![b'X'; 127];
    let needed = bounded_copy(&mut buf, &big);
    steps.push(Step::capture("Heavy truncation copy", &buf, needed));

    bounded_copy(&mut buf, "1234567890");
    let intended = bounded_append(&mut buf, "ABCDE");
    steps.push(Step::capture("After append ABCDE", &buf, intended));

    let intended = bounded_append(&mut buf, "QRSTUV");
    steps.push(Step::capture("After append QRSTUV", &buf, intended));

    buf.fill(FILL);
    if let Some(last) = buf.last_mut() {
        *last = 0;
    }
    let needed = bounded_format!(&mut buf, "id={} tag={}", 42, "near-limit");
    steps.push(Step::capture("Formatted write", &buf, needed));

    debug!(steps = steps.len(), "scenarios complete");
    steps
}

/// Copy `source` into a fresh buffer pre-filled with `fill`.
pub fn copy_once(capacity: usize, fill: u8, source: &str) -> Step {
    let mut buf = vec![fill; capacity];
    let needed = bounded_copy(&mut buf, source);
    Step::capture(format!("Copy {source:?}"), &buf, needed)
}

/// Seed a buffer with `initial`, then append each source in turn.
pub fn append_each(capacity: usize, initial: &str, sources: &[String]) -> Vec<Step> {
    let mut buf = vec![FILL; capacity];
    let needed = bounded_copy(&mut buf, initial);

    let mut steps = Vec::with_capacity(sources.len() + 1);
    steps.push(Step::capture(format!("Initial {initial:?}"), &buf, needed));
    for source in sources {
        let intended = bounded_append(&mut buf, source);
        steps.push(Step::capture(format!("After append {source:?}"), &buf, intended));
    }
    steps
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 15, false)]
    #[case(1, 16, true)]
    #[case(2, 127, true)]
    #[case(3, 15, false)]
    #[case(4, 21, true)]
    #[case(5, 20, true)]
    fn default_scenarios_report(#[case] index: usize, #[case] needed: usize, #[case] truncated: bool) {
        let steps = run_all(16);
        assert_eq!(steps.len(), 6);
        assert_eq!(steps[index].outcome.needed, needed);
        assert_eq!(steps[index].outcome.is_truncated(), truncated);
        assert_eq!(steps[index].outcome.capacity, 16);
    }

    #[test]
    fn scenarios_run_at_zero_capacity() {
        let steps = run_all(0);
        assert!(steps.iter().all(|s| s.outcome.is_truncated() && s.bytes.is_empty()));
    }

    #[test]
    fn copy_once_shows_untouched_fill() {
        let step = copy_once(8, b'.', "abc");
        assert_eq!(step.content, "abc");
        assert_eq!(step.bytes, "abc\\0....");
    }

    #[test]
    fn append_each_freezes_once_full() {
        let sources = ["abc", "def", "ghi"].map(String::from);
        let steps = append_each(6, "", &sources);
        let contents: Vec<_> = steps.iter().map(|s| s.content.as_str()).collect();
        assert_eq!(contents, ["", "abc", "abcde", "abcde"]);
        assert_eq!(steps[3].outcome.needed, 8);
    }

    #[test]
    fn scenario_text_rendering() {
        let steps = run_all(16);
        insta::assert_snapshot!(steps[5].to_string(), @r#"
        Formatted write (bufsz=16): "id=42 tag=near-"
          bytes: id=42 tag=near-\0
          needed=20  truncated? true
        "#);
    }

    #[test]
    fn steps_serialize_without_report() {
        let step = copy_once(4, b'#', "abcdef");
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "label": "Copy \"abcdef\"",
                "content": "abc",
                "bytes": "abc\\0",
                "outcome": { "needed": 6, "capacity": 4 },
            })
        );
    }
}
