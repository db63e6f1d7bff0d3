//! Integration tests for quill-permissions
//!
//! Exercises the manager facade end-to-end over the in-memory repository:
//! single-object authorization, list filtering, the dependents gate and
//! audit recording.

use std::sync::Arc;

use quill_permissions::{
    AccessManager, Action, AuditDecision, Comment, DependentGate, Error, InMemoryPostRepository,
    Like, PermissionEvaluator, Post, PostPredicate, PostRepository, Subject, VisibilityLevel,
};

fn post(
    id: u64,
    author: u64,
    team: &str,
    read: VisibilityLevel,
    edit: VisibilityLevel,
) -> Post {
    Post::new(id, format!("Post {}", id), "Content", author, team)
        .unwrap()
        .with_read_level(read)
        .with_edit_level(edit)
}

fn seeded_repository() -> Arc<InMemoryPostRepository> {
    let repository = Arc::new(InMemoryPostRepository::new());
    repository
        .save_post(&post(
            1,
            42,
            "t1",
            VisibilityLevel::Public,
            VisibilityLevel::Public,
        ))
        .unwrap();
    repository
        .save_post(&post(
            2,
            42,
            "t1",
            VisibilityLevel::Authenticated,
            VisibilityLevel::Authenticated,
        ))
        .unwrap();
    repository
        .save_post(&post(3, 42, "t1", VisibilityLevel::Team, VisibilityLevel::Team))
        .unwrap();
    repository
        .save_post(&post(
            4,
            42,
            "t1",
            VisibilityLevel::Author,
            VisibilityLevel::Author,
        ))
        .unwrap();
    repository
}

// Scenario 1: public post, anonymous subject, read -> allowed.
#[test]
fn test_scenario_public_read_by_anonymous() {
    let p = post(1, 42, "t1", VisibilityLevel::Public, VisibilityLevel::Public);
    assert!(PermissionEvaluator::evaluate(
        &Subject::anonymous(),
        &p,
        Action::Read
    ));
}

// Scenario 2: team post, authenticated subject on another team -> denied.
#[test]
fn test_scenario_team_read_by_other_team() {
    let p = post(1, 42, "t1", VisibilityLevel::Team, VisibilityLevel::Team);
    assert!(!PermissionEvaluator::evaluate(
        &Subject::user(7, "t2"),
        &p,
        Action::Read
    ));
}

// Scenario 3: author post, the author reads it -> allowed.
#[test]
fn test_scenario_author_read_by_author() {
    let p = post(1, 42, "t1", VisibilityLevel::Author, VisibilityLevel::Public);
    assert!(PermissionEvaluator::evaluate(
        &Subject::user(42, "t1"),
        &p,
        Action::Read
    ));
}

// Scenario 4: authenticated post, anonymous subject -> denied.
#[test]
fn test_scenario_authenticated_read_by_anonymous() {
    let p = post(
        1,
        42,
        "t1",
        VisibilityLevel::Authenticated,
        VisibilityLevel::Public,
    );
    assert!(!PermissionEvaluator::evaluate(
        &Subject::anonymous(),
        &p,
        Action::Read
    ));
}

// Scenario 5: any post, admin subject, edit -> allowed.
#[test]
fn test_scenario_admin_edit_always_allowed() {
    for read in VisibilityLevel::ALL {
        for edit in VisibilityLevel::ALL {
            let p = post(1, 42, "t1", read, edit);
            assert!(PermissionEvaluator::evaluate(
                &Subject::admin(999, "ops"),
                &p,
                Action::Edit
            ));
        }
    }
}

// Scenario 6: public post, anonymous subject -> may not comment or like.
#[test]
fn test_scenario_anonymous_cannot_mutate_dependents() {
    let p = post(1, 42, "t1", VisibilityLevel::Public, VisibilityLevel::Public);
    assert!(!DependentGate::can_mutate(&Subject::anonymous(), &p));
}

#[test]
fn test_read_public_edit_author_independence() {
    let p = post(1, 42, "t1", VisibilityLevel::Public, VisibilityLevel::Author);

    // Anonymous may read.
    assert!(PermissionEvaluator::evaluate(
        &Subject::anonymous(),
        &p,
        Action::Read
    ));
    // Non-author, non-admin may not edit.
    assert!(!PermissionEvaluator::evaluate(
        &Subject::user(7, "t1"),
        &p,
        Action::Edit
    ));
    // The author and an admin may edit.
    assert!(PermissionEvaluator::evaluate(
        &Subject::user(42, "t1"),
        &p,
        Action::Edit
    ));
    assert!(PermissionEvaluator::evaluate(
        &Subject::admin(1, "ops"),
        &p,
        Action::Edit
    ));
}

#[test]
fn test_listing_equals_per_object_checks_for_every_subject() {
    let repository = seeded_repository();
    let manager = AccessManager::new(repository.clone());

    let subjects = [
        Subject::anonymous(),
        Subject::user(42, "t1"),
        Subject::user(7, "t1"),
        Subject::user(7, "t2"),
        Subject::admin(1, "ops"),
    ];

    for subject in &subjects {
        for action in [Action::Read, Action::Edit] {
            let listed: Vec<u64> = manager
                .list_visible(subject, action)
                .unwrap()
                .iter()
                .map(|p| p.id)
                .collect();

            let predicate = PostPredicate::for_subject(subject, action);
            let checked: Vec<u64> = repository
                .list_posts(&PostPredicate::for_subject(&Subject::admin(0, "ops"), action))
                .unwrap()
                .iter()
                .filter(|p| PermissionEvaluator::evaluate(subject, p, action))
                .map(|p| p.id)
                .collect();

            assert_eq!(listed, checked, "listing diverged for {}", subject.describe());

            // And the predicate agrees row by row.
            for p in repository
                .list_posts(&PostPredicate::for_subject(&Subject::admin(0, "ops"), action))
                .unwrap()
            {
                assert_eq!(
                    predicate.matches(&p),
                    PermissionEvaluator::evaluate(subject, &p, action)
                );
            }
        }
    }
}

#[test]
fn test_expected_visibility_per_subject() {
    let repository = seeded_repository();
    let manager = AccessManager::new(repository);

    let ids = |subject: &Subject| -> Vec<u64> {
        manager
            .list_visible(subject, Action::Read)
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect()
    };

    assert_eq!(ids(&Subject::anonymous()), vec![1]);
    assert_eq!(ids(&Subject::user(7, "t2")), vec![1, 2]);
    assert_eq!(ids(&Subject::user(7, "t1")), vec![1, 2, 3]);
    assert_eq!(ids(&Subject::user(42, "t1")), vec![1, 2, 3, 4]);
    assert_eq!(ids(&Subject::admin(1, "ops")), vec![1, 2, 3, 4]);
}

#[test]
fn test_forbidden_and_missing_are_distinct_outcomes() {
    let manager = AccessManager::new(seeded_repository());

    let forbidden = manager.authorize(&Subject::user(7, "t2"), 4, Action::Read);
    assert!(matches!(forbidden, Err(Error::PermissionDenied { .. })));

    let missing = manager.authorize(&Subject::user(7, "t2"), 99, Action::Read);
    assert!(matches!(missing, Err(Error::PostNotFound { id: 99 })));

    let forbidden_dependent = manager.authorize_dependent(&Subject::anonymous(), 1);
    assert!(matches!(
        forbidden_dependent,
        Err(Error::PermissionDenied { .. })
    ));

    let missing_dependent = manager.authorize_dependent(&Subject::user(7, "t2"), 99);
    assert!(matches!(
        missing_dependent,
        Err(Error::PostNotFound { id: 99 })
    ));
}

#[test]
fn test_comment_flow_through_the_gate() {
    let repository = seeded_repository();
    let manager = AccessManager::new(repository.clone());
    let subject = Subject::user(7, "t1");

    // Team post: teammate may comment.
    let parent = manager.authorize_dependent(&subject, 3).unwrap();
    repository
        .add_comment(&Comment::new(parent.id, subject.id().unwrap(), "Nice"))
        .unwrap();
    assert_eq!(repository.comments_for(3).unwrap().len(), 1);

    // Deletion targets the most recent comment on the post.
    let last = repository.last_comment(3).unwrap().unwrap();
    assert!(repository.remove_comment(&last.id).unwrap());
    assert!(repository.comments_for(3).unwrap().is_empty());

    // A stranger to the team cannot reach the comment path at all.
    let denied = manager.authorize_dependent(&Subject::user(8, "t2"), 3);
    assert!(matches!(denied, Err(Error::PermissionDenied { .. })));
}

#[test]
fn test_like_flow_through_the_gate() {
    let repository = seeded_repository();
    let manager = AccessManager::new(repository.clone());
    let subject = Subject::user(7, "t2");

    let parent = manager.authorize_dependent(&subject, 1).unwrap();
    assert!(repository
        .add_like(&Like::new(parent.id, subject.id().unwrap()))
        .unwrap());
    // Liking twice is refused by the repository.
    assert!(!repository
        .add_like(&Like::new(parent.id, subject.id().unwrap()))
        .unwrap());

    assert!(repository.remove_like(1, 7).unwrap());
    assert!(!repository.remove_like(1, 7).unwrap());
}

#[test]
fn test_audit_log_records_each_decision() {
    let manager = AccessManager::new(seeded_repository());

    manager
        .authorize(&Subject::user(42, "t1"), 4, Action::Edit)
        .unwrap();
    let _ = manager.authorize(&Subject::anonymous(), 4, Action::Read);
    let _ = manager.authorize(&Subject::user(42, "t1"), 99, Action::Read);

    let entries = manager.audit().entries().unwrap();
    // Not-found produces no decision, so only two entries.
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0].subject, "user:42");
    assert_eq!(entries[0].post_id, 4);
    assert_eq!(entries[0].action, Action::Edit);
    assert_eq!(entries[0].decision, AuditDecision::Allowed);

    assert_eq!(entries[1].subject, "anonymous");
    assert_eq!(entries[1].decision, AuditDecision::Denied);
}

#[test]
fn test_corrupted_level_denies_but_does_not_error() {
    let repository = seeded_repository();
    let corrupted = Post::new(9, "Corrupted", "", 42, "t1")
        .unwrap()
        .with_raw_levels("everyone", "everyone");
    repository.save_post(&corrupted).unwrap();

    let manager = AccessManager::new(repository);

    // Non-admins are denied, not errored.
    let denied = manager.authorize(&Subject::user(42, "t1"), 9, Action::Read);
    assert!(matches!(denied, Err(Error::PermissionDenied { .. })));

    // The corrupted row never shows up in listings for non-admins.
    let listed: Vec<u64> = manager
        .list_visible(&Subject::user(42, "t1"), Action::Read)
        .unwrap()
        .iter()
        .map(|p| p.id)
        .collect();
    assert!(!listed.contains(&9));

    // Admins still get through.
    assert!(manager
        .authorize(&Subject::admin(1, "ops"), 9, Action::Edit)
        .is_ok());
}

#[test]
fn test_deleting_a_post_cascades_to_dependents() {
    let repository = seeded_repository();
    repository.add_comment(&Comment::new(1, 7, "First")).unwrap();
    assert!(repository.add_like(&Like::new(1, 7)).unwrap());

    assert!(repository.delete_post(1).unwrap());
    assert!(repository.get_post(1).unwrap().is_none());
    assert!(repository.comments_for(1).unwrap().is_empty());
    assert!(repository.likes_for(1).unwrap().is_empty());
}
