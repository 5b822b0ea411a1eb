//! Integration tests for the formatted and line output shapes.
//!
//! These tests cover newline handling, space joining, level prefix
//! placement, repeat calls and unusual content (empty strings, unicode,
//! format-like text passed as data).

use std::fmt;

use verbose::{
    Level, LeveledWriter, Options, Verbose, debug, debugf, trace, tracef, verbose, verbosef,
};

fn plain(level: Level) -> LeveledWriter<Vec<u8>> {
    LeveledWriter::with_writer(level, Vec::new())
}

fn prefixed(level: Level) -> LeveledWriter<Vec<u8>> {
    LeveledWriter::with_options(level, Options::new(Vec::new()).with_level_prefix())
}

fn text(writer: LeveledWriter<Vec<u8>>) -> String {
    String::from_utf8(writer.into_inner()).expect("utf-8")
}

// ============================================================================
// Newline Handling
// ============================================================================

/// Verifies formatted output is never terminated by the writer.
#[test]
fn formatted_output_adds_no_newline() {
    let mut out = plain(Level::Trace);
    verbosef!(out, "one");
    debugf!(out, "two");
    tracef!(out, "three");
    assert_eq!(text(out), "onetwothree");
}

/// Verifies formatted output keeps newlines supplied by the caller.
#[test]
fn formatted_output_keeps_caller_newlines() {
    let mut out = plain(Level::Verbose);
    verbosef!(out, "line {}\n", 1);
    verbosef!(out, "\n");
    assert_eq!(text(out), "line 1\n\n");
}

/// Verifies line output ends with exactly one newline.
#[test]
fn line_output_ends_with_one_newline() {
    let mut out = plain(Level::Debug);
    debug!(out, "a", "b", "c");
    let output = text(out);
    assert!(output.ends_with("c\n"));
    assert!(!output.ends_with("\n\n"));
}

/// Verifies embedded newlines in items are kept and one is still appended.
#[test]
fn line_output_appends_after_embedded_newline() {
    let mut out = plain(Level::Verbose);
    verbose!(out, "ends with\n");
    assert_eq!(text(out), "ends with\n\n");
}

// ============================================================================
// Joining
// ============================================================================

/// Verifies mixed Display types are joined with single spaces.
#[test]
fn line_output_joins_mixed_types() {
    let mut out = plain(Level::Trace);
    trace!(out, "retry", 3, 'x', 1.5, true);
    assert_eq!(text(out), "retry 3 x 1.5 true\n");
}

/// Verifies a single item produces no separator.
#[test]
fn single_item_has_no_separator() {
    let mut out = plain(Level::Verbose);
    verbose!(out, "alone");
    assert_eq!(text(out), "alone\n");
}

/// Verifies items that already contain spaces are not altered.
#[test]
fn items_with_spaces_are_preserved() {
    let mut out = plain(Level::Verbose);
    verbose!(out, "a  b", " c");
    assert_eq!(text(out), "a  b  c\n");
}

/// Verifies custom Display implementations are honoured.
#[test]
fn custom_display_items() {
    struct Path<'a>(&'a str);

    impl fmt::Display for Path<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "<{}>", self.0)
        }
    }

    let mut out = plain(Level::Debug);
    debug!(out, "open", Path("/tmp/x"));
    assert_eq!(text(out), "open </tmp/x>\n");
}

// ============================================================================
// Level Prefix
// ============================================================================

/// Verifies each tier uses its own tag in both shapes.
#[test]
fn each_tier_uses_its_own_tag() {
    let mut out = prefixed(Level::Trace);
    verbosef!(out, "v");
    debugf!(out, "d");
    tracef!(out, "t");
    verbose!(out, "v");
    debug!(out, "d");
    trace!(out, "t");
    assert_eq!(
        text(out),
        "[VERBOSE] v[DEBUG] d[TRACE] t[VERBOSE] v\n[DEBUG] d\n[TRACE] t\n"
    );
}

/// Verifies the tag is the first space-joined token of a line.
#[test]
fn tag_is_first_token_of_line() {
    let mut out = prefixed(Level::Verbose);
    verbose!(out, "c", "d");
    let output = text(out);
    let tokens: Vec<&str> = output.trim_end().split(' ').collect();
    assert_eq!(tokens, ["[VERBOSE]", "c", "d"]);
}

/// Verifies the prefix appears exactly once per accepted call.
#[test]
fn prefix_appears_once_per_call() {
    let mut out = prefixed(Level::Debug);
    debugf!(out, "{}", "[DEBUG]");
    let output = text(out);
    assert_eq!(output, "[DEBUG] [DEBUG]");
    assert_eq!(output.matches("[DEBUG] ").count(), 1);
}

/// Verifies rejected calls carry no prefix either.
#[test]
fn rejected_calls_write_no_tag() {
    let mut out = prefixed(Level::Verbose);
    debug!(out, "hidden");
    tracef!(out, "hidden");
    assert_eq!(text(out), "");
}

/// Verifies no tag appears without the option.
#[test]
fn no_tag_without_option() {
    let mut out = plain(Level::Trace);
    verbosef!(out, "a");
    trace!(out, "b");
    let output = text(out);
    assert!(!output.contains('['));
    assert_eq!(output, "ab\n");
}

// ============================================================================
// Repeat Calls
// ============================================================================

/// Verifies repeating a call repeats its bytes in order.
#[test]
fn repeated_calls_concatenate() {
    let mut once = prefixed(Level::Debug);
    debug!(once, "same", 1);
    let once = text(once);

    let mut twice = prefixed(Level::Debug);
    debug!(twice, "same", 1);
    debug!(twice, "same", 1);
    assert_eq!(text(twice), once.repeat(2));
}

/// Verifies a rejected call does not affect later accepted calls.
#[test]
fn rejected_call_leaves_no_state() {
    let mut out = plain(Level::Verbose);
    verbosef!(out, "a");
    tracef!(out, "b");
    verbosef!(out, "c");
    assert_eq!(text(out), "ac");
}

// ============================================================================
// Content Edge Cases
// ============================================================================

/// Verifies printf-like sequences passed as data are written literally.
#[test]
fn format_like_data_is_literal() {
    let mut out = plain(Level::Verbose);
    verbosef!(out, "{}", "%s %d {}");
    verbose!(out, "100%");
    assert_eq!(text(out), "%s %d {}100%\n");
}

/// Verifies escaped braces render literally.
#[test]
fn escaped_braces() {
    let mut out = plain(Level::Verbose);
    verbosef!(out, "{{{}}}", 7);
    assert_eq!(text(out), "{7}");
}

/// Verifies unicode content passes through untouched.
#[test]
fn unicode_content() {
    let mut out = prefixed(Level::Trace);
    trace!(out, "données", "→", "完了");
    assert_eq!(text(out), "[TRACE] données → 完了\n");
}

/// Verifies large messages are written in full.
#[test]
fn long_line_is_written_in_full() {
    let long = "x".repeat(64 * 1024);
    let mut out = plain(Level::Verbose);
    verbose!(out, long, "end");
    let output = text(out);
    assert_eq!(output.len(), long.len() + " end\n".len());
}

// ============================================================================
// Borrowed Sinks and Trait Objects
// ============================================================================

/// Verifies output goes to a caller-owned buffer through the trait.
#[test]
fn trait_object_over_borrowed_sink() {
    let mut buffer = Vec::new();
    {
        let options = Options::new(&mut buffer).with_level_prefix();
        let mut writer = LeveledWriter::with_options(Level::Debug, options);
        let out: &mut dyn Verbose = &mut writer;
        verbosef!(out, "a");
        debug!(out, "b");
        trace!(out, "c");
    }
    assert_eq!(buffer, b"[VERBOSE] a[DEBUG] b\n");
}
