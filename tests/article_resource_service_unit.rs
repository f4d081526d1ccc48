use chrono::{DateTime, Utc};
use crossblog::application::dto::ArticleInput;
use crossblog::application::error::ApplicationError;
use crossblog::application::resources::articles::{
    ArticleResourceService, ReplaceArticleCommand, SearchArticlesQuery,
};
use crossblog::application::{FieldErrors, Payload, ResourceOutcome};
use crossblog::domain::article::Article;
use crossblog::domain::comment::Comment;
use crossblog::domain::errors::DomainError;
use std::sync::Arc;

mod support;

use support::{
    FailingRepository, FixedClock, TestStores, fixed_now, sample_article, sample_comment,
};

fn seeded() -> TestStores {
    TestStores::seeded(
        vec![
            sample_article(1, "Title One"),
            sample_article(2, "Another Title"),
            sample_article(3, "misc"),
        ],
        Vec::new(),
    )
}

fn input(title: Option<&str>) -> ArticleInput {
    ArticleInput {
        title: title.map(Into::into),
        content: Some("body".into()),
        date: None,
        published: false,
    }
}

async fn search(service: &ArticleResourceService, term: Option<&str>) -> Vec<String> {
    let outcome = service
        .search_articles(SearchArticlesQuery {
            term: term.map(Into::into),
        })
        .await
        .unwrap();
    outcome
        .into_resource()
        .unwrap()
        .articles
        .into_iter()
        .map(|article| article.title)
        .collect()
}

#[tokio::test]
async fn search_without_term_lists_everything_in_id_order() {
    let stores = seeded();
    let service = stores.article_service();

    assert_eq!(
        search(&service, None).await,
        vec!["Title One", "Another Title", "misc"]
    );
    assert_eq!(search(&service, Some("")).await.len(), 3);
}

#[tokio::test]
async fn search_matches_title_fragment_case_sensitively() {
    let stores = seeded();
    let service = stores.article_service();

    assert_eq!(
        search(&service, Some("Title")).await,
        vec!["Title One", "Another Title"]
    );
    assert!(search(&service, Some("title")).await.is_empty());
    assert!(search(&service, Some("zzz")).await.is_empty());
}

#[tokio::test]
async fn search_on_empty_store_is_ok_and_empty() {
    let stores = TestStores::empty();
    let service = stores.article_service();
    assert!(search(&service, Some("anything")).await.is_empty());
}

#[tokio::test]
async fn get_returns_article_or_not_found() {
    let stores = seeded();
    let service = stores.article_service();

    let found = service.get_article(2).await.unwrap().into_resource().unwrap();
    assert_eq!(found.id, 2);
    assert_eq!(found.title, "Another Title");
    assert_eq!(found.content, "content of Another Title");

    assert!(service.get_article(99).await.unwrap().is_not_found());
    assert!(service.get_article(0).await.unwrap().is_not_found());
    assert!(service.get_article(-4).await.unwrap().is_not_found());
}

#[tokio::test]
async fn create_stores_article_and_defaults_date_to_clock() {
    let stores = TestStores::empty();
    let service = stores.article_service();

    let outcome = service.create_article(input(Some("Hello"))).await.unwrap();
    let ResourceOutcome::Created(dto) = outcome else {
        panic!("expected Created, got {outcome:?}");
    };
    assert_eq!(dto.id, 1);
    assert_eq!(dto.title, "Hello");
    assert_eq!(dto.content, "body");
    assert_eq!(dto.date, fixed_now());
    assert_eq!(stores.articles.adds(), 1);

    let stored = service.get_article(dto.id).await.unwrap().into_resource().unwrap();
    assert_eq!(stored, dto);
}

#[tokio::test]
async fn create_keeps_supplied_date() {
    let stores = TestStores::empty();
    let service = stores.article_service();
    let date: DateTime<Utc> = "2023-05-06T07:08:09Z".parse().unwrap();

    let mut payload = input(Some("Dated"));
    payload.date = Some(date);
    payload.published = true;
    let dto = service
        .create_article(payload)
        .await
        .unwrap()
        .into_resource()
        .unwrap();

    assert_eq!(dto.date, date);
    assert!(dto.published);
}

#[tokio::test]
async fn create_rejects_missing_or_blank_title_without_writing() {
    let stores = TestStores::empty();
    let service = stores.article_service();

    for (title, message) in [
        (None, "title is required"),
        (Some(""), "title cannot be empty"),
        (Some("   "), "title cannot be empty"),
    ] {
        let outcome = service.create_article(input(title)).await.unwrap();
        let ResourceOutcome::ValidationFailed(errors) = outcome else {
            panic!("expected ValidationFailed for {title:?}, got {outcome:?}");
        };
        assert_eq!(errors.get("title"), Some(&vec![message.to_string()]));
    }

    assert_eq!(stores.articles.adds(), 0);
    assert_eq!(stores.articles.len().await, 0);
}

#[tokio::test]
async fn replace_overwrites_fields_and_keeps_id() {
    let stores = seeded();
    let service = stores.article_service();
    let date: DateTime<Utc> = "2025-02-03T04:05:06Z".parse().unwrap();

    let outcome = service
        .replace_article(ReplaceArticleCommand {
            id: 1,
            input: ArticleInput {
                title: Some("Renamed".into()),
                content: Some("rewritten".into()),
                date: Some(date),
                published: false,
            }
            .into(),
        })
        .await
        .unwrap();
    let ResourceOutcome::Ok(dto) = outcome else {
        panic!("expected Ok, got {outcome:?}");
    };
    assert_eq!(dto.id, 1);
    assert_eq!(dto.title, "Renamed");
    assert_eq!(dto.content, "rewritten");
    assert_eq!(dto.date, date);
    assert!(!dto.published);

    let stored = service.get_article(1).await.unwrap().into_resource().unwrap();
    assert_eq!(stored, dto);
    assert_eq!(stores.articles.updates(), 1);
}

#[tokio::test]
async fn replace_without_date_keeps_stored_date() {
    let stores = seeded();
    let service = stores.article_service();

    let dto = service
        .replace_article(ReplaceArticleCommand {
            id: 3,
            input: input(Some("still misc")).into(),
        })
        .await
        .unwrap()
        .into_resource()
        .unwrap();
    assert_eq!(dto.date, fixed_now());
}

#[tokio::test]
async fn replace_unknown_article_is_not_found_even_with_bad_input() {
    let stores = seeded();
    let service = stores.article_service();

    let outcome = service
        .replace_article(ReplaceArticleCommand {
            id: 42,
            input: input(None).into(),
        })
        .await
        .unwrap();
    assert!(outcome.is_not_found());
    assert_eq!(stores.articles.writes(), 0);
}

#[tokio::test]
async fn replace_with_invalid_input_leaves_article_untouched() {
    let stores = seeded();
    let service = stores.article_service();

    let outcome = service
        .replace_article(ReplaceArticleCommand {
            id: 1,
            input: input(Some("")).into(),
        })
        .await
        .unwrap();
    assert!(matches!(outcome, ResourceOutcome::ValidationFailed(_)));

    let stored = service.get_article(1).await.unwrap().into_resource().unwrap();
    assert_eq!(stored.title, "Title One");
    assert_eq!(stores.articles.updates(), 0);
}

#[tokio::test]
async fn delete_removes_article_once() {
    let stores = seeded();
    let service = stores.article_service();

    assert_eq!(service.delete_article(2).await.unwrap(), ResourceOutcome::Deleted);
    assert!(service.get_article(2).await.unwrap().is_not_found());
    assert_eq!(search(&service, None).await, vec!["Title One", "misc"]);

    assert!(service.delete_article(2).await.unwrap().is_not_found());
    assert_eq!(stores.articles.removes(), 1);
}

#[tokio::test]
async fn delete_removes_owned_comments_with_article() {
    let stores = TestStores::seeded(
        vec![sample_article(1, "parent"), sample_article(2, "other")],
        vec![
            sample_comment(1, 1, "a"),
            sample_comment(2, 2, "b"),
            sample_comment(3, 1, "c"),
        ],
    );
    let service = stores.article_service();

    assert_eq!(service.delete_article(1).await.unwrap(), ResourceOutcome::Deleted);
    assert_eq!(stores.comments.removes(), 2);
    assert_eq!(stores.comments.len().await, 1);

    let remaining = stores
        .comment_service()
        .list_comments(2)
        .await
        .unwrap()
        .into_resource()
        .unwrap();
    assert_eq!(remaining.comments.len(), 1);
    assert_eq!(remaining.comments[0].id, 2);
}

fn malformed(field: &str) -> Payload<ArticleInput> {
    Payload::Malformed(FieldErrors::from([(
        field.to_string(),
        vec!["invalid type: integer `5`, expected a string".to_string()],
    )]))
}

#[tokio::test]
async fn malformed_create_payload_is_validation_failure() {
    let stores = TestStores::empty();
    let service = stores.article_service();

    let outcome = service.create_article(malformed("title")).await.unwrap();
    let ResourceOutcome::ValidationFailed(errors) = outcome else {
        panic!("expected ValidationFailed, got {outcome:?}");
    };
    assert!(errors.contains_key("title"));
    assert_eq!(stores.articles.adds(), 0);
}

#[tokio::test]
async fn malformed_replace_payload_checks_existence_first() {
    let stores = seeded();
    let service = stores.article_service();

    let missing = service
        .replace_article(ReplaceArticleCommand {
            id: 42,
            input: malformed("title"),
        })
        .await
        .unwrap();
    assert!(missing.is_not_found());

    let known = service
        .replace_article(ReplaceArticleCommand {
            id: 1,
            input: malformed("title"),
        })
        .await
        .unwrap();
    assert!(matches!(known, ResourceOutcome::ValidationFailed(_)));
    assert_eq!(stores.articles.updates(), 0);
}

#[tokio::test]
async fn store_faults_surface_as_errors() {
    let service = ArticleResourceService::new(
        Arc::new(FailingRepository::<Article>::new()),
        Arc::new(FailingRepository::<Comment>::new()),
        Arc::new(FixedClock),
    );

    let err = service
        .search_articles(SearchArticlesQuery { term: None })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Persistence(_))
    ));
    assert!(service.get_article(1).await.is_err());
    assert!(service.create_article(input(Some("x"))).await.is_err());
}
