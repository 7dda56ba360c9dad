//! Property-based tests for owner isolation
//!
//! Uses proptest to drive random interleavings of creates and deletes from
//! several users against a real SQLite file and checks that ownership holds.


use linkshelf_core::types::*;
use linkshelf_storage::{bookmarks, StorageError};
use proptest::prelude::*;
use std::collections::HashMap;
use test_helpers::TestDb;

const USERS: [&str; 3] = ["alice", "bob", "carol"];

#[derive(Debug, Clone)]
enum Op {
    Create { user: usize, title: String },
    /// Delete the `nth` bookmark ever created, acting as `user`
    Delete { user: usize, nth: usize },
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..USERS.len(), "[A-Za-z ]{1,20}").prop_map(|(user, title)| Op::Create { user, title }),
        (0..USERS.len(), 0usize..32).prop_map(|(user, nth)| Op::Delete { user, nth }),
    ]
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to build runtime")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Property: listing never leaks another user's bookmarks, and a delete
    /// only succeeds for the owner
    #[test]
    fn ownership_is_enforced_on_every_operation(
        ops in prop::collection::vec(arbitrary_op(), 1..30)
    ) {
        runtime().block_on(async {
            let test_db = TestDb::new().await;
            let pool = test_db.pool();

            let mut created: Vec<Bookmark> = Vec::new();
            let mut alive: HashMap<BookmarkId, UserId> = HashMap::new();

            for op in ops {
                match op {
                    Op::Create { user, title } => {
                        let owner = UserId::new(USERS[user]);
                        let bookmark = bookmarks::create(
                            pool,
                            &owner,
                            CreateBookmarkData::new("https://example.com", title),
                        )
                        .await
                        .unwrap();
                        alive.insert(bookmark.id.clone(), owner);
                        created.push(bookmark);
                    }
                    Op::Delete { user, nth } => {
                        let Some(target) = created.get(nth) else { continue };
                        let actor = UserId::new(USERS[user]);
                        let result = bookmarks::delete(pool, &actor, &target.id).await;

                        let owned_and_alive = alive.get(&target.id) == Some(&actor);
                        if owned_and_alive {
                            prop_assert!(result.is_ok());
                            alive.remove(&target.id);
                        } else {
                            prop_assert!(matches!(result, Err(StorageError::NotFound(_))));
                        }
                    }
                }
            }

            for name in USERS {
                let user = UserId::new(name);
                let listed = bookmarks::list_by_user(pool, &user).await.unwrap();

                prop_assert!(listed.iter().all(|b| b.user_id == user));

                let expected = alive.values().filter(|owner| **owner == user).count();
                prop_assert_eq!(listed.len(), expected);

                prop_assert!(listed
                    .windows(2)
                    .all(|pair| pair[0].created_at >= pair[1].created_at));
            }

            Ok(())
        })?;
    }

    /// Property: a created bookmark shows up exactly once in its owner's list
    #[test]
    fn create_then_list_round_trips(
        url in "https://[a-z]{1,12}\\.example/[a-z0-9]{0,8}",
        title in "[A-Za-z0-9 ]{1,30}",
        description in proptest::option::of("[A-Za-z ]{0,40}"),
    ) {
        runtime().block_on(async {
            let test_db = TestDb::new().await;
            let pool = test_db.pool();
            let user = UserId::new("alice");

            let data = CreateBookmarkData {
                url: url.clone(),
                title: title.clone(),
                description: description.clone(),
            };
            bookmarks::create(pool, &user, data).await.unwrap();

            let listed = bookmarks::list_by_user(pool, &user).await.unwrap();
            let matching = listed
                .iter()
                .filter(|b| b.url == url && b.title == title && b.description == description)
                .count();

            prop_assert_eq!(matching, 1);
            Ok(())
        })?;
    }
}
