//! Tests for the match score type.

use super::*;

#[test]
fn test_creation() {
    let score = MatchScore::of(-5);
    assert_eq!(score.value(), -5);
    assert_eq!(MatchScore::default(), MatchScore::ZERO);
    assert!(MatchScore::ZERO.is_zero());
}

#[test]
fn test_comparison() {
    let s1 = MatchScore::of(-55);
    let s2 = MatchScore::of(0);
    let s3 = MatchScore::of(100);

    assert!(s3 > s2);
    assert!(s2 > s1);
    assert_eq!(s1.cmp(&s1), std::cmp::Ordering::Equal);
}

#[test]
fn test_arithmetic() {
    let s1 = MatchScore::of(30);
    let s2 = MatchScore::of(-50);

    assert_eq!(s1 + s2, MatchScore::of(-20));
    assert_eq!(s1 - s2, MatchScore::of(80));
    assert_eq!(-s1, MatchScore::of(-30));
    assert_eq!(s2.abs(), MatchScore::of(50));

    let mut total = MatchScore::ZERO;
    total += s1;
    total += s1;
    assert_eq!(total, MatchScore::of(60));
}

#[test]
fn test_arithmetic_saturates() {
    let max = MatchScore::of(i64::MAX);
    let min = MatchScore::of(i64::MIN);

    assert_eq!(max + MatchScore::of(40), max);
    assert_eq!(min - MatchScore::of(1), min);
    assert_eq!(-min, max);
    assert_eq!(min.abs(), max);

    let mut total = max;
    total += MatchScore::of(25);
    assert_eq!(total, max);

    let mixed: MatchScore = [i64::MAX, 30, -50].into_iter().map(MatchScore::of).sum();
    assert_eq!(mixed, MatchScore::of(i64::MAX - 50));
}

#[test]
fn test_sum() {
    let total: MatchScore = [30, 10, 25, 20, 15].into_iter().map(MatchScore::of).sum();
    assert_eq!(total, MatchScore::of(100));

    let empty: MatchScore = std::iter::empty::<MatchScore>().sum();
    assert_eq!(empty, MatchScore::ZERO);
}

#[test]
fn test_parse() {
    assert_eq!("42".parse::<MatchScore>().unwrap(), MatchScore::of(42));
    assert_eq!(" -50 ".parse::<MatchScore>().unwrap(), MatchScore::of(-50));
    assert_eq!("+15".parse::<MatchScore>().unwrap(), MatchScore::of(15));
    assert!(matches!(
        "ten".parse::<MatchScore>(),
        Err(crate::PlanMatchError::InvalidScore { .. })
    ));
}

#[test]
fn test_display() {
    assert_eq!(MatchScore::of(-55).to_string(), "-55");
    assert_eq!(format!("{:?}", MatchScore::of(7)), "MatchScore(7)");
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_transparent() {
    let json = serde_json::to_string(&MatchScore::of(25)).unwrap();
    assert_eq!(json, "25");
    let back: MatchScore = serde_json::from_str("-20").unwrap();
    assert_eq!(back, MatchScore::of(-20));
}
