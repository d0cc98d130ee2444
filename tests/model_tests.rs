use chrono::{Duration, TimeZone, Utc};
use orgcore::model::*;

// ==========================================================================
// ID TESTS
// ==========================================================================

#[test]
fn id_generate_creates_unique_ids() {
    let id1 = Id::<MemberRecord>::generate();
    let id2 = Id::<MemberRecord>::generate();
    assert_ne!(id1, id2);
}

#[test]
fn id_is_type_safe() {
    let member_id = Id::<MemberRecord>::generate();
    let notice_id = Id::<NoticeRecord>::generate();
    // Different types at compile time, but we can verify UUIDs differ
    assert_ne!(member_id.value, notice_id.value);
}

#[test]
fn id_ordering_is_total_and_stable() {
    let mut ids: Vec<Id<MemberRecord>> = (0..5).map(|_| Id::generate()).collect();
    let mut again = ids.clone();
    ids.sort();
    again.sort();
    assert_eq!(ids, again);
}

// ==========================================================================
// MEMBER TESTS
// ==========================================================================

#[test]
fn member_create_defaults_to_active_root() {
    let m = MemberRecord::create("Ana".into(), MemberCategory::Board);
    assert_eq!(m.name, "Ana");
    assert!(m.active);
    assert_eq!(m.parent_id, None);
    assert_eq!(m.order, 0);
}

#[test]
fn category_roundtrips_through_db_str() {
    for category in MemberCategory::ALL {
        let parsed = MemberCategory::from_db_str(category.to_db_str()).unwrap();
        assert_eq!(parsed, *category);
    }
}

#[test]
fn category_rejects_unknown_strings() {
    assert_eq!(MemberCategory::from_db_str("Volunteers"), None);
}

#[test]
fn category_display_names() {
    assert_eq!(MemberCategory::Board.display_name(), "Board of Directors");
    assert_eq!(MemberCategory::Staff.display_name(), "Staff");
}

#[test]
fn member_serde_roundtrip() {
    let mut m = MemberRecord::create("Ana".into(), MemberCategory::Board);
    m.role = Some("Chair".into());
    let json = serde_json::to_string(&m).unwrap();
    let back: MemberRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(m, back);
}

// ==========================================================================
// NOTICE TESTS
// ==========================================================================

#[test]
fn notice_create_is_active_and_unimportant() {
    let n = NoticeRecord::create("Title".into(), "Body".into(), Utc::now());
    assert!(n.active);
    assert!(!n.important);
    assert_eq!(n.expires_at, None);
}

#[test]
fn notice_without_expiry_never_expires() {
    let n = NoticeRecord::create("Title".into(), "Body".into(), Utc::now());
    assert!(!n.is_expired(Utc::now() + Duration::days(3650)));
}

#[test]
fn notice_expiry_boundary_counts_as_expired() {
    let at = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    let mut n = NoticeRecord::create("Title".into(), "Body".into(), at);
    n.expires_at = Some(at);
    assert!(n.is_expired(at));
    assert!(!n.is_expired(at - Duration::seconds(1)));
}

#[test]
fn notice_is_live_requires_active_and_unexpired() {
    let now = Utc::now();
    let mut n = NoticeRecord::create("Title".into(), "Body".into(), now);
    assert!(n.is_live(now));

    n.active = false;
    assert!(!n.is_live(now));

    n.active = true;
    n.expires_at = Some(now - Duration::hours(1));
    assert!(!n.is_live(now));
}

#[test]
fn notice_serde_roundtrip() {
    let mut n = NoticeRecord::create("Title".into(), "Body".into(), Utc::now());
    n.important = true;
    n.expires_at = Some(Utc::now() + Duration::days(7));
    let json = serde_json::to_string(&n).unwrap();
    let back: NoticeRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(n, back);
}

// ==========================================================================
// PRESS RELEASE TESTS
// ==========================================================================

#[test]
fn press_release_create_is_unfeatured() {
    let r = PressRelease::create("Gala".into(), Utc::now());
    assert_eq!(r.title, "Gala");
    assert!(!r.featured);
    assert_eq!(r.summary, None);
    assert_eq!(r.link_url, None);
}
