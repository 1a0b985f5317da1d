//! Behavior both DAO backends must share.
//!
//! Every check runs against the in-memory backend by default. The same
//! checks run against PostgreSQL with `cargo test -- --ignored` when Docker
//! is available.

mod common;

use common::{Backend, ANIMALS};
use wordgames_core::{WidgetId, WordId, WordgamesError};

macro_rules! contract {
    ($($check:ident),+ $(,)?) => {
        mod memory {
            $(
                #[tokio::test]
                async fn $check() {
                    super::$check(&super::Backend::memory()).await;
                }
            )+
        }

        mod postgres {
            $(
                #[tokio::test]
                #[ignore = "requires a Docker daemon for the PostgreSQL testcontainer"]
                async fn $check() {
                    let backend = super::Backend::postgres().await;
                    super::$check(&backend).await;
                }
            )+
        }
    };
}

contract!(
    get_missing_widget_is_none,
    create_then_get_widget,
    get_widget_is_idempotent,
    all_widgets_in_id_order,
    update_widget_keeps_id_and_timestamp,
    update_missing_widget_is_not_found,
    widget_prefix_counts,
    widget_prefix_counts_empty_table,
    widget_prefix_counts_skip_empty_name,
    widget_prefix_counts_non_ascii,
    create_then_get_word,
    get_missing_word_is_none,
    all_words_in_id_order,
    update_word,
    update_missing_word_is_not_found,
    word_prefix_counts,
    one_transaction_sees_its_own_writes,
);

async fn get_missing_widget_is_none(b: &Backend) {
    let found = b.widgets(|dao| async move { dao.get(WidgetId::new(9999)).await }).await;
    assert!(found.unwrap().is_none());
}

async fn create_then_get_widget(b: &Backend) {
    let created = b
        .widgets(|dao| async move { dao.create("sprocket").await })
        .await
        .unwrap();
    assert_eq!(created.name, "sprocket");

    let id = created.id;
    let found = b
        .widgets(move |dao| async move { dao.get(id).await })
        .await
        .unwrap();
    assert_eq!(found, Some(created));
}

async fn get_widget_is_idempotent(b: &Backend) {
    let id = b
        .widgets(|dao| async move { dao.create("cog").await })
        .await
        .unwrap()
        .id;

    let first = b.widgets(move |dao| async move { dao.get(id).await }).await.unwrap();
    let second = b.widgets(move |dao| async move { dao.get(id).await }).await.unwrap();
    assert_eq!(first, second);
}

async fn all_widgets_in_id_order(b: &Backend) {
    for name in ["zeta", "alpha", "mu"] {
        b.widgets(move |dao| async move { dao.create(name).await })
            .await
            .unwrap();
    }

    let all = b.widgets(|dao| async move { dao.get_all().await }).await.unwrap();

    let names: Vec<&str> = all.iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mu"]);
    assert!(all.windows(2).all(|pair| pair[0].id < pair[1].id));
}

async fn update_widget_keeps_id_and_timestamp(b: &Backend) {
    let created = b
        .widgets(|dao| async move { dao.create("before").await })
        .await
        .unwrap();

    let id = created.id;
    let updated = b
        .widgets(move |dao| async move { dao.update(id, "after").await })
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.name, "after");

    let found = b.widgets(move |dao| async move { dao.get(id).await }).await.unwrap();
    assert_eq!(found, Some(updated));
}

async fn update_missing_widget_is_not_found(b: &Backend) {
    let err = b
        .widgets(|dao| async move { dao.update(WidgetId::new(4242), "nobody").await })
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

async fn widget_prefix_counts(b: &Backend) {
    for animal in ANIMALS {
        b.widgets(move |dao| async move { dao.create(animal).await })
            .await
            .unwrap();
    }

    let counts = b
        .widgets(|dao| async move { dao.prefix_counts().await })
        .await
        .unwrap();

    assert_eq!(
        counts.iter().collect::<Vec<_>>(),
        vec![("E", 1), ("K", 3), ("P", 1), ("W", 2)]
    );
}

async fn widget_prefix_counts_empty_table(b: &Backend) {
    let counts = b
        .widgets(|dao| async move { dao.prefix_counts().await })
        .await
        .unwrap();
    assert!(counts.is_empty());
}

async fn widget_prefix_counts_skip_empty_name(b: &Backend) {
    b.widgets(|dao| async move {
        dao.create("").await?;
        dao.create("anvil").await
    })
    .await
    .unwrap();

    let counts = b
        .widgets(|dao| async move { dao.prefix_counts().await })
        .await
        .unwrap();
    assert_eq!(counts.iter().collect::<Vec<_>>(), vec![("A", 1)]);
}

async fn widget_prefix_counts_non_ascii(b: &Backend) {
    b.widgets(|dao| async move {
        for name in ["ßtraße", "émeu", "Émile", "kangaroo", "sardine"] {
            dao.create(name).await?;
        }
        Ok::<_, WordgamesError>(())
    })
    .await
    .unwrap();

    let counts = b
        .widgets(|dao| async move { dao.prefix_counts().await })
        .await
        .unwrap();
    assert_eq!(
        counts.iter().collect::<Vec<_>>(),
        vec![("K", 1), ("S", 1), ("SS", 1), ("É", 2)]
    );
}

async fn create_then_get_word(b: &Backend) {
    let created = b
        .words(|dao| async move { dao.create("qwerty").await })
        .await
        .unwrap();
    assert_eq!(created.word, "qwerty");

    let id = created.id;
    let found = b.words(move |dao| async move { dao.get(id).await }).await.unwrap();
    assert_eq!(found, Some(created));
}

async fn get_missing_word_is_none(b: &Backend) {
    let found = b
        .words(|dao| async move { dao.get(WordId::new(31337)).await })
        .await
        .unwrap();
    assert!(found.is_none());
}

async fn all_words_in_id_order(b: &Backend) {
    b.words(|dao| async move {
        dao.create("banana").await?;
        dao.create("apple").await
    })
    .await
    .unwrap();

    let all = b.words(|dao| async move { dao.get_all().await }).await.unwrap();
    let words: Vec<&str> = all.iter().map(|w| w.word.as_str()).collect();
    assert_eq!(words, vec!["banana", "apple"]);
}

async fn update_word(b: &Backend) {
    let created = b
        .words(|dao| async move { dao.create("teh").await })
        .await
        .unwrap();

    let id = created.id;
    let updated = b
        .words(move |dao| async move { dao.update(id, "the").await })
        .await
        .unwrap();

    assert_eq!(updated.id, id);
    assert_eq!(updated.word, "the");
    assert_eq!(updated.created_at, created.created_at);
}

async fn update_missing_word_is_not_found(b: &Backend) {
    let err = b
        .words(|dao| async move { dao.update(WordId::new(77), "ghost").await })
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

async fn word_prefix_counts(b: &Backend) {
    b.words(|dao| async move {
        for animal in ANIMALS {
            dao.create(animal).await?;
        }
        Ok::<_, WordgamesError>(())
    })
    .await
    .unwrap();

    let counts = b.words(|dao| async move { dao.prefix_counts().await }).await.unwrap();
    assert_eq!(counts.get("K"), Some(3));
    assert_eq!(counts.get("W"), Some(2));
    assert_eq!(counts.keys().collect::<Vec<_>>(), vec!["E", "K", "P", "W"]);
}

async fn one_transaction_sees_its_own_writes(b: &Backend) {
    let (created, seen) = b
        .widgets(|dao| async move {
            let created = dao.create("visible").await?;
            let seen = dao.get(created.id).await?;
            Ok::<_, WordgamesError>((created, seen))
        })
        .await
        .unwrap();
    assert_eq!(seen, Some(created));
}

/// In-memory DAOs handed out for different transactions see the same rows.
#[tokio::test]
async fn memory_daos_share_state_across_transactions() {
    let b = Backend::memory();
    let first = b.daos.widget_dao(&b.txn.begin().await.unwrap());
    let second = b.daos.widget_dao(&b.txn.begin().await.unwrap());

    let created = first.create("shared").await.unwrap();
    assert_eq!(second.get(created.id).await.unwrap(), Some(created));
}
