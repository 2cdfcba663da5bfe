/*!
 * Tests for cue timeline allocation
 */

use srtforge::allocator::allocate;
use srtforge::app_config::Config;
use srtforge::transcript::RawSegment;

fn default_config() -> Config {
    Config::default()
}

/// Test that an empty segment list yields no cues
#[test]
fn test_allocate_withNoSegments_shouldReturnEmpty() {
    let cues = allocate(&[], 10.0, &default_config());
    assert!(cues.is_empty());
}

/// Test the two-segment scenario: non-overlapping cues ending at the total duration
#[test]
fn test_allocate_withTwoSegments_shouldCoverFullDuration() {
    let segments = vec![
        RawSegment::new("Bonjour, comment allez-vous ?", Some(0.0), Some(2.5)),
        RawSegment::new("Je vais bien, merci !", Some(3.0), Some(5.0)),
    ];

    let cues = allocate(&segments, 5.0, &default_config());

    assert_eq!(cues.len(), 2);
    assert_eq!(cues[0].start, 0.0);
    assert!(cues[0].end <= cues[1].start);
    assert!(cues[1].end <= 5.0);
    // last cue absorbs the remaining slack
    assert_eq!(cues[1].end, 5.0);
    assert!(cues[0].lines[0].contains("Bonjour"));
}

/// Test that adjacent cues never overlap across a longer sequence
#[test]
fn test_allocate_withManySegments_shouldStayMonotonic() {
    let segments: Vec<RawSegment> = (0..8)
        .map(|i| RawSegment::new(format!("Segment number {} of the sequence.", i), None, None))
        .collect();

    let cues = allocate(&segments, 120.0, &default_config());

    assert!(!cues.is_empty());
    for pair in cues.windows(2) {
        assert!(
            pair[0].end <= pair[1].start,
            "overlap: {:?} then {:?}",
            pair[0],
            pair[1]
        );
    }
    assert!(cues.last().unwrap().end <= 120.0);
}

/// Test that the final cue is stretched to absorb slack but never
/// shrunk below its reading time when the budget allows
#[test]
fn test_allocate_withUnderrun_shouldStretchLastCue() {
    let segments = vec![RawSegment::new("Only one short segment.", None, None)];

    let cues = allocate(&segments, 30.0, &default_config());

    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].start, 0.0);
    assert_eq!(cues[0].end, 30.0);
}

/// Test that allocation stops once the total duration is exhausted,
/// silently dropping segments that do not fit
#[test]
fn test_allocate_withExhaustedBudget_shouldDropRemainingSegments() {
    // Each non-final segment costs reading (2.0) + pause (1.0) = 3.0 s
    let segments = vec![
        RawSegment::new("Hello there everyone.", None, None),
        RawSegment::new("Hello there everyone.", None, None),
        RawSegment::new("Hello there everyone.", None, None),
    ];

    let cues = allocate(&segments, 3.0, &default_config());

    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].end, 3.0);
}

/// Test that a cue overrunning the budget is compressed to fit
#[test]
fn test_allocate_withOverrunningLastCue_shouldCompressToFit() {
    // First segment: 2.0 + 1.0 = 3.0 s, leaving 1.0 s for the last
    // segment whose reading time alone is 2.0 s
    let segments = vec![
        RawSegment::new("Hi there friend.", None, None),
        RawSegment::new("Bye now.", None, None),
    ];

    let cues = allocate(&segments, 4.0, &default_config());

    assert_eq!(cues.len(), 2);
    assert_eq!(cues[1].start, 3.0);
    assert_eq!(cues[1].end, 4.0);
}

/// Test that a zero total duration collapses cues to zero length
/// without panicking or producing negative spans
#[test]
fn test_allocate_withZeroDuration_shouldEmitZeroLengthCues() {
    let segments = vec![
        RawSegment::new("First segment here.", None, None),
        RawSegment::new("Second segment here.", None, None),
    ];

    let cues = allocate(&segments, 0.0, &default_config());

    for cue in &cues {
        assert_eq!(cue.start, 0.0);
        assert_eq!(cue.end, 0.0);
    }
}

/// Test that a negative total duration is floored at zero
#[test]
fn test_allocate_withNegativeDuration_shouldFloorAtZero() {
    let segments = vec![RawSegment::new("Some text here.", None, None)];

    let cues = allocate(&segments, -5.0, &default_config());

    for cue in &cues {
        assert!(cue.end >= cue.start);
        assert_eq!(cue.duration(), 0.0);
    }
}

/// Test that one segment produces exactly one cue with at most the
/// configured line count, discarding overflow chunks
#[test]
fn test_allocate_withOverflowingSegment_shouldTruncateToLineCap() {
    let config = Config {
        max_chars_per_line: 15,
        max_lines_per_subtitle: 2,
        ..Config::default()
    };

    let segments = vec![RawSegment::new(
        "alpha beta gamma delta epsilon zeta eta theta",
        None,
        None,
    )];

    let cues = allocate(&segments, 20.0, &config);

    assert_eq!(cues.len(), 1, "a segment must never spawn multiple cues");
    assert_eq!(
        cues[0].lines,
        vec!["alpha beta".to_string(), "gamma delta".to_string()]
    );
}

/// Test that empty and whitespace-only segments are skipped entirely
#[test]
fn test_allocate_withBlankSegments_shouldSkipThem() {
    let segments = vec![
        RawSegment::new("   ", None, None),
        RawSegment::new("Actual content here.", None, None),
    ];

    let cues = allocate(&segments, 10.0, &default_config());

    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].lines[0], "Actual content here.");
}

/// Test that advisory timestamps do not drive cue timing
#[test]
fn test_allocate_withMalformedAdvisoryTiming_shouldIgnoreIt() {
    // end < start in the advisory fields must not matter
    let segments = vec![
        RawSegment::new("First one here.", Some(9.0), Some(1.0)),
        RawSegment::new("Second one here.", Some(50.0), Some(2.0)),
    ];

    let cues = allocate(&segments, 10.0, &default_config());

    assert_eq!(cues.len(), 2);
    assert_eq!(cues[0].start, 0.0);
    assert!(cues[0].end <= cues[1].start);
    assert_eq!(cues[1].end, 10.0);
}

/// Test that tone markers attached upstream survive onto the cue untouched
#[test]
fn test_allocate_withToneMarkers_shouldPassThemThrough() {
    let mut segment = RawSegment::new("I am so happy today!", None, None);
    segment.tone_markers = vec!["joy".to_string(), "emphasis".to_string()];

    let cues = allocate(&[segment], 10.0, &default_config());

    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].tone_markers, vec!["joy", "emphasis"]);
    // markers never leak into the display text
    assert!(!cues[0].text().contains("joy"));
}
