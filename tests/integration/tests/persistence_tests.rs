//! Repository contract tests over the local backend
//!
//! The remote backend implements the same trait with the same observable
//! behavior; these tests pin down the contract both must satisfy.

use chrono::NaiveDate;

use integration_tests::fixtures::{event_draft, news_draft, staff_draft};
use integration_tests::helpers::TestPortal;
use portal_core::{
    NewsPatch, RecordId, SchoolEvent, StaffMember, VisitorDraft, VisitorLog, News,
};

#[tokio::test]
async fn test_news_listed_newest_first() {
    let portal = TestPortal::start().unwrap();
    let repo = portal.ctx.repository::<News>();

    for title in ["A", "B", "C"] {
        repo.create(news_draft(title)).await.unwrap();
    }

    let titles: Vec<_> = repo
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|n| n.title)
        .collect();
    assert_eq!(titles, ["C", "B", "A"]);
}

#[tokio::test]
async fn test_create_synthesizes_id_and_timestamp() {
    let portal = TestPortal::start().unwrap();
    let repo = portal.ctx.repository::<News>();

    let a = repo.create(news_draft("a")).await.unwrap();
    let b = repo.create(news_draft("b")).await.unwrap();
    assert_ne!(a.id, b.id);
    assert!(b.created_at >= a.created_at);
}

#[tokio::test]
async fn test_update_applies_patch_and_ignores_missing_ids() {
    let portal = TestPortal::start().unwrap();
    let repo = portal.ctx.repository::<News>();

    let created = repo.create(news_draft("draft title")).await.unwrap();
    repo.update(
        created.id,
        NewsPatch {
            title: Some("final title".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    // missing id: silent no-op, no error, no new record
    repo.update(
        RecordId::generate(),
        NewsPatch {
            title: Some("ghost".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let all = repo.get_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "final title");
    // untouched fields survive the patch
    assert_eq!(all[0].author, "Admin");
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let portal = TestPortal::start().unwrap();
    let repo = portal.ctx.repository::<News>();

    let created = repo.create(news_draft("to delete")).await.unwrap();
    repo.delete(created.id).await.unwrap();
    repo.delete(created.id).await.unwrap();
    repo.delete(RecordId::generate()).await.unwrap();
    assert!(repo.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_mixed_sequence_net_effect() {
    let portal = TestPortal::start().unwrap();
    let repo = portal.ctx.repository::<News>();

    let keep = repo.create(news_draft("keep")).await.unwrap();
    let drop = repo.create(news_draft("drop")).await.unwrap();
    repo.update(
        keep.id,
        NewsPatch {
            title: Some("kept".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    repo.delete(drop.id).await.unwrap();
    repo.create(news_draft("latest")).await.unwrap();

    let titles: Vec<_> = repo
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|n| n.title)
        .collect();
    assert_eq!(titles, ["latest", "kept"]);
}

#[tokio::test]
async fn test_directory_collections_sort_by_name() {
    let portal = TestPortal::start().unwrap();
    let repo = portal.ctx.repository::<StaffMember>();

    for name in ["Zainal", "Ahmad", "Maya"] {
        repo.create(staff_draft(name)).await.unwrap();
    }

    let names: Vec<_> = repo
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, ["Ahmad", "Maya", "Zainal"]);
}

#[tokio::test]
async fn test_events_sort_by_event_date_ascending() {
    let portal = TestPortal::start().unwrap();
    let repo = portal.ctx.repository::<SchoolEvent>();

    let dates = [
        NaiveDate::from_ymd_opt(2026, 11, 10).unwrap(),
        NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        NaiveDate::from_ymd_opt(2026, 10, 5).unwrap(),
    ];
    for (i, date) in dates.iter().enumerate() {
        repo.create(event_draft(&format!("event-{i}"), *date)).await.unwrap();
    }

    let listed: Vec<_> = repo
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.date)
        .collect();
    assert_eq!(
        listed,
        [
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 5).unwrap(),
            NaiveDate::from_ymd_opt(2026, 11, 10).unwrap(),
        ]
    );
}

#[tokio::test]
async fn test_visitor_log_caps_at_one_hundred() {
    let portal = TestPortal::start().unwrap();
    let repo = portal.ctx.repository::<VisitorLog>();

    for i in 0..105 {
        repo.create(VisitorDraft {
            ip: "unknown".into(),
            city: format!("city-{i}"),
            network: "unknown".into(),
        })
        .await
        .unwrap();
    }

    let logs = repo.get_all().await.unwrap();
    assert_eq!(logs.len(), 100);
    // newest survive, oldest evicted
    assert!(logs.iter().any(|l| l.city == "city-104"));
    assert!(logs.iter().all(|l| l.city != "city-4"));
}

#[tokio::test]
async fn test_settings_singleton_defaults_then_updates() {
    let portal = TestPortal::start().unwrap();
    let settings_repo = portal.ctx.settings_repo();

    let first = settings_repo.get().await.unwrap();
    assert_eq!(first.school_name, "SMKN 2 Tembilahan");
    assert!(!first.has_bot_credentials());

    let mut changed = first.clone();
    changed.running_text = "Pendaftaran dibuka!".into();
    changed.telegram_bot_token = Some("123:abc".into());
    changed.telegram_chat_id = Some("@smkn2_news".into());
    settings_repo.update(&changed).await.unwrap();

    let second = settings_repo.get().await.unwrap();
    assert_eq!(second.running_text, "Pendaftaran dibuka!");
    assert!(second.has_bot_credentials());
}

#[tokio::test]
async fn test_data_survives_store_reopen() {
    let portal = TestPortal::start().unwrap();
    portal
        .ctx
        .repository::<News>()
        .create(news_draft("durable"))
        .await
        .unwrap();

    // a second context over the same directory sees the same data
    let store = portal.store.clone();
    let reopened = portal_service::Backend::Local(store).repository::<News>();
    let all = reopened.get_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "durable");
}
