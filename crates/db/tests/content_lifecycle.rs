//! Integration tests for article creation, publication, and the version ledger.
//!
//! Exercises the engine against a real database:
//! - Preview derivation on create
//! - Publish / unpublish keep `published_at` in step with `is_published`
//! - Re-publish and publish-date override timestamp rules
//! - Proposed edits stay pending; metadata applies immediately
//! - Applying a version snapshots the prior content first
//! - Listing filters, sorting, and paging
//! - Delete cascades to versions, facts, and comments

use assert_matches::assert_matches;
use chrono::{Duration, TimeZone, Utc};
use sqlx::PgPool;

use folio_core::error::CoreError;
use folio_core::identity::{ActorIdentity, ClientInfo};
use folio_core::listing::SortKey;
use folio_core::versioning::PartialFields;
use folio_db::engine::{catalog, comments, engagement, ledger, publication, EngineError};
use folio_db::models::article::{Article, ArticleFilter, CreateArticle, ProposeEdit};
use folio_db::models::comment::CreateComment;
use folio_db::repositories::{ArticleVersionRepo, LikeRepo, ViewRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_article(title: &str, body: &str) -> CreateArticle {
    CreateArticle {
        title: title.to_string(),
        body: body.to_string(),
        language: None,
        images: Some(vec!["/uploads/cover.png".to_string()]),
        publish_date_override: None,
    }
}

async fn create(pool: &PgPool, title: &str, body: &str) -> Article {
    catalog::create_article(pool, &new_article(title, body))
        .await
        .unwrap()
}

fn assert_publication_consistent(article: &Article) {
    assert_eq!(
        article.is_published,
        article.published_at.is_some(),
        "is_published and published_at must agree"
    );
    if article.is_published {
        assert_eq!(
            article.published_at,
            article.publish_date_override.or(article.first_published_at),
            "published_at must be the override, or the go-live moment without one"
        );
    }
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_article_defaults(pool: PgPool) {
    let article = create(&pool, "Greeting", "Hello world").await;

    assert!(article.id > 0);
    assert_eq!(article.preview, "Hello world");
    assert_eq!(article.language, "english");
    assert_eq!(article.images, vec!["/uploads/cover.png"]);
    assert!(!article.is_published);
    assert_eq!(article.published_at, None);
    assert_eq!(article.like_count, 0);
    assert_eq!(article.comment_count, 0);
    assert_eq!(article.view_count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_article_long_body_truncates_preview(pool: PgPool) {
    let body = "x".repeat(250);
    let article = create(&pool, "Long", &body).await;
    assert_eq!(article.preview, format!("{}...", "x".repeat(200)));
    assert_eq!(article.body, body);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_article_requires_title(pool: PgPool) {
    let result = catalog::create_article(&pool, &new_article("  ", "body")).await;
    assert_matches!(result, Err(EngineError::Core(CoreError::Validation(_))));
}

// ---------------------------------------------------------------------------
// Publication
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_publish_then_unpublish(pool: PgPool) {
    let article = create(&pool, "Greeting", "Hello world").await;

    let before = Utc::now();
    let published = publication::publish(&pool, article.id).await.unwrap();
    let after = Utc::now();

    assert!(published.is_published);
    let at = published.published_at.expect("published_at must be set");
    assert!(at >= before - Duration::seconds(1) && at <= after + Duration::seconds(1));
    assert_publication_consistent(&published);

    let unpublished = publication::unpublish(&pool, article.id).await.unwrap();
    assert!(!unpublished.is_published);
    assert_eq!(unpublished.published_at, None);
    assert_publication_consistent(&unpublished);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_republish_keeps_timestamp(pool: PgPool) {
    let article = create(&pool, "Again", "body").await;

    let first = publication::publish(&pool, article.id).await.unwrap();
    let second = publication::publish(&pool, article.id).await.unwrap();

    assert_eq!(first.published_at, second.published_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_publish_uses_override(pool: PgPool) {
    let override_at = Utc.with_ymd_and_hms(2023, 6, 1, 9, 30, 0).unwrap();
    let mut input = new_article("Backdated", "body");
    input.publish_date_override = Some(override_at);
    let article = catalog::create_article(&pool, &input).await.unwrap();

    let published = publication::publish(&pool, article.id).await.unwrap();
    assert_eq!(published.published_at, Some(override_at));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_override_moves_live_publish_date(pool: PgPool) {
    let article = create(&pool, "Live", "body").await;
    publication::publish(&pool, article.id).await.unwrap();

    let corrected_at = Utc.with_ymd_and_hms(2022, 1, 15, 0, 0, 0).unwrap();
    let corrected =
        publication::set_publish_date_override(&pool, article.id, Some(corrected_at))
            .await
            .unwrap();

    assert_eq!(corrected.published_at, Some(corrected_at));
    assert_eq!(corrected.publish_date_override, Some(corrected_at));
    assert_publication_consistent(&corrected);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_clearing_override_restores_go_live_moment(pool: PgPool) {
    let article = create(&pool, "Corrected", "body").await;
    let published = publication::publish(&pool, article.id).await.unwrap();
    let went_live = published.published_at.expect("published_at must be set");
    assert_eq!(published.first_published_at, Some(went_live));

    let corrected_at = Utc.with_ymd_and_hms(2022, 1, 15, 0, 0, 0).unwrap();
    let corrected =
        publication::set_publish_date_override(&pool, article.id, Some(corrected_at))
            .await
            .unwrap();
    assert_eq!(corrected.published_at, Some(corrected_at));
    assert_publication_consistent(&corrected);

    let cleared = publication::set_publish_date_override(&pool, article.id, None)
        .await
        .unwrap();
    assert_eq!(cleared.publish_date_override, None);
    assert_eq!(cleared.published_at, Some(went_live));
    assert_publication_consistent(&cleared);

    let republished = publication::publish(&pool, article.id).await.unwrap();
    assert_eq!(republished.published_at, Some(went_live));
    assert_publication_consistent(&republished);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_clearing_override_on_backdated_publish(pool: PgPool) {
    let override_at = Utc.with_ymd_and_hms(2023, 6, 1, 9, 30, 0).unwrap();
    let mut input = new_article("Backdated", "body");
    input.publish_date_override = Some(override_at);
    let article = catalog::create_article(&pool, &input).await.unwrap();

    let before = Utc::now();
    let published = publication::publish(&pool, article.id).await.unwrap();
    assert_eq!(published.published_at, Some(override_at));
    assert_publication_consistent(&published);

    let cleared = publication::set_publish_date_override(&pool, article.id, None)
        .await
        .unwrap();
    let at = cleared.published_at.expect("published_at must be set");
    assert!(at >= before - Duration::seconds(1));
    assert_publication_consistent(&cleared);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_override_on_draft_stays_draft(pool: PgPool) {
    let article = create(&pool, "Draft", "body").await;
    let at = Utc.with_ymd_and_hms(2022, 1, 15, 0, 0, 0).unwrap();

    let updated = publication::set_publish_date_override(&pool, article.id, Some(at))
        .await
        .unwrap();

    assert!(!updated.is_published);
    assert_eq!(updated.published_at, None);
    assert_eq!(updated.publish_date_override, Some(at));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_transitions_on_unknown_article(pool: PgPool) {
    assert_matches!(
        publication::publish(&pool, 999_999).await,
        Err(EngineError::Core(CoreError::NotFound { entity: "Article", .. }))
    );
    assert_matches!(
        publication::unpublish(&pool, 999_999).await,
        Err(EngineError::Core(CoreError::NotFound { .. }))
    );
    assert_matches!(
        publication::set_publish_date_override(&pool, 999_999, None).await,
        Err(EngineError::Core(CoreError::NotFound { .. }))
    );
}

// ---------------------------------------------------------------------------
// Version ledger
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_language_only_edit(pool: PgPool) {
    let article = create(&pool, "Hola", "Hello world").await;

    let edit = ProposeEdit {
        fields: PartialFields {
            language: Some("spanish".to_string()),
            ..Default::default()
        },
        publish_date_override: None,
    };
    let proposed = ledger::propose_edit(&pool, article.id, &edit).await.unwrap();

    assert!(proposed.version.is_pending);
    assert_eq!(proposed.version.title, "Hola");
    assert_eq!(proposed.version.body, "Hello world");
    assert_eq!(proposed.version.images, article.images);
    assert_eq!(proposed.version.language, "spanish");

    let live = catalog::get_article(&pool, article.id).await.unwrap();
    assert_eq!(live.language, "spanish");
    assert_eq!(live.title, "Hola");
    assert_eq!(live.body, "Hello world");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_content_edit_stays_pending_until_applied(pool: PgPool) {
    let article = create(&pool, "Draft title", "Draft body").await;

    let edit = ProposeEdit {
        fields: PartialFields {
            title: Some("Final title".to_string()),
            body: Some("Final body".to_string()),
            ..Default::default()
        },
        publish_date_override: None,
    };
    let proposed = ledger::propose_edit(&pool, article.id, &edit).await.unwrap();

    let live = catalog::get_article(&pool, article.id).await.unwrap();
    assert_eq!(live.title, "Draft title", "live title must not change on propose");
    assert_eq!(live.body, "Draft body");

    let applied = ledger::apply_version(&pool, article.id, proposed.version.id)
        .await
        .unwrap();
    assert_eq!(applied.title, "Final title");
    assert_eq!(applied.body, "Final body");
    assert_eq!(applied.preview, "Final body");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_apply_snapshots_prior_content(pool: PgPool) {
    let article = create(&pool, "Before", "Old body").await;
    let edit = ProposeEdit {
        fields: PartialFields {
            body: Some("New body".to_string()),
            images: Some(vec!["/uploads/new.png".to_string()]),
            ..Default::default()
        },
        publish_date_override: None,
    };
    let proposed = ledger::propose_edit(&pool, article.id, &edit).await.unwrap();

    ledger::apply_version(&pool, article.id, proposed.version.id)
        .await
        .unwrap();

    let versions = ledger::list_versions(&pool, article.id, false).await.unwrap();
    assert_eq!(versions.len(), 2, "pending edit plus one historical snapshot");

    let history = versions
        .iter()
        .find(|v| v.id != proposed.version.id)
        .expect("historical snapshot must exist");
    assert!(!history.is_pending);
    assert_eq!(history.title, "Before");
    assert_eq!(history.body, "Old body");
    assert_eq!(history.language, "english");
    assert_eq!(history.images, vec!["/uploads/cover.png"]);

    let applied = versions
        .iter()
        .find(|v| v.id == proposed.version.id)
        .unwrap();
    assert!(!applied.is_pending, "applied version must no longer be pending");

    let pending = ledger::list_versions(&pool, article.id, true).await.unwrap();
    assert!(pending.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_apply_historical_version_restores_content(pool: PgPool) {
    let article = create(&pool, "Original", "Original body").await;
    let edit = ProposeEdit {
        fields: PartialFields {
            title: Some("Rewritten".to_string()),
            body: Some("Rewritten body".to_string()),
            ..Default::default()
        },
        publish_date_override: None,
    };
    let proposed = ledger::propose_edit(&pool, article.id, &edit).await.unwrap();
    ledger::apply_version(&pool, article.id, proposed.version.id)
        .await
        .unwrap();

    let history = ledger::list_versions(&pool, article.id, false)
        .await
        .unwrap()
        .into_iter()
        .find(|v| v.title == "Original")
        .expect("snapshot of the original content must exist");

    let restored = ledger::apply_version(&pool, article.id, history.id)
        .await
        .unwrap();
    assert_eq!(restored.title, "Original");
    assert_eq!(restored.body, "Original body");
    assert_eq!(restored.preview, "Original body");

    let versions = ledger::list_versions(&pool, article.id, false).await.unwrap();
    assert_eq!(versions.len(), 3, "the restore snapshots the rewritten content");
    assert!(versions
        .iter()
        .any(|v| v.title == "Rewritten" && v.id != proposed.version.id && !v.is_pending));
    assert!(versions.iter().all(|v| !v.is_pending));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_apply_foreign_version_is_not_found(pool: PgPool) {
    let a = create(&pool, "A", "a body").await;
    let b = create(&pool, "B", "b body").await;
    let proposed = ledger::propose_edit(&pool, b.id, &ProposeEdit::default())
        .await
        .unwrap();

    let result = ledger::apply_version(&pool, a.id, proposed.version.id).await;
    assert_matches!(
        result,
        Err(EngineError::Core(CoreError::NotFound { entity: "ArticleVersion", .. }))
    );

    // Nothing was written for article A.
    let versions = ArticleVersionRepo::list_by_article(&pool, a.id, false)
        .await
        .unwrap();
    assert!(versions.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_edit_override_on_published_article(pool: PgPool) {
    let article = create(&pool, "Live", "body").await;
    publication::publish(&pool, article.id).await.unwrap();

    let at = Utc.with_ymd_and_hms(2021, 12, 24, 18, 0, 0).unwrap();
    let edit = ProposeEdit {
        fields: PartialFields::default(),
        publish_date_override: Some(at),
    };
    let proposed = ledger::propose_edit(&pool, article.id, &edit).await.unwrap();

    assert_eq!(proposed.article.publish_date_override, Some(at));
    assert_eq!(proposed.article.published_at, Some(at));
    assert!(proposed.article.is_published);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_propose_edit_unknown_article(pool: PgPool) {
    let result = ledger::propose_edit(&pool, 424_242, &ProposeEdit::default()).await;
    assert_matches!(result, Err(EngineError::Core(CoreError::NotFound { .. })));
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_filters_and_sorts(pool: PgPool) {
    let draft = create(&pool, "Draft", "body").await;
    let quiet = create(&pool, "Quiet", "body").await;
    let popular = create(&pool, "Popular", "body").await;
    publication::publish(&pool, quiet.id).await.unwrap();
    publication::publish(&pool, popular.id).await.unwrap();

    for i in 0..3 {
        let address = format!("10.0.0.{i}");
        let client = ClientInfo::new(Some(address.as_str()), None);
        let actor = ActorIdentity::resolve(None, &client);
        engagement::record_view(&pool, popular.id, &actor, &client)
            .await
            .unwrap();
    }

    let public = catalog::list_articles(
        &pool,
        &ArticleFilter {
            published_only: true,
            sort: SortKey::MostViewed,
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(public.total, 2);
    assert_eq!(public.items[0].id, popular.id);
    assert!(public.items.iter().all(|a| a.id != draft.id));

    let all = catalog::list_articles(&pool, &ArticleFilter::default())
        .await
        .unwrap();
    assert_eq!(all.total, 3);

    let paged = catalog::list_articles(
        &pool,
        &ArticleFilter {
            limit: Some(2),
            offset: Some(2),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(paged.items.len(), 1);
    assert_eq!(paged.total_pages, 2);

    let spanish = catalog::list_articles(
        &pool,
        &ArticleFilter {
            language: Some("spanish".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(spanish.total, 0);
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_cascades(pool: PgPool) {
    let article = create(&pool, "Doomed", "body").await;
    publication::publish(&pool, article.id).await.unwrap();

    let user = ActorIdentity::Authenticated(7);
    let client = ClientInfo::new(Some("192.0.2.1"), Some("agent"));
    engagement::record_view(&pool, article.id, &user, &client)
        .await
        .unwrap();
    engagement::like(&pool, article.id, &user, &client)
        .await
        .unwrap();
    comments::create_comment(
        &pool,
        article.id,
        &CreateComment {
            body: "bye".to_string(),
            ..Default::default()
        },
        &client,
    )
    .await
    .unwrap();
    ledger::propose_edit(&pool, article.id, &ProposeEdit::default())
        .await
        .unwrap();

    catalog::delete_article(&pool, article.id).await.unwrap();

    assert_matches!(
        catalog::get_article(&pool, article.id).await,
        Err(EngineError::Core(CoreError::NotFound { .. }))
    );
    assert_eq!(ViewRepo::count_for_article(&pool, article.id).await.unwrap(), 0);
    assert_eq!(LikeRepo::count_for_article(&pool, article.id).await.unwrap(), 0);
    assert!(ArticleVersionRepo::list_by_article(&pool, article.id, false)
        .await
        .unwrap()
        .is_empty());

    assert_matches!(
        catalog::delete_article(&pool, article.id).await,
        Err(EngineError::Core(CoreError::NotFound { .. }))
    );
}
