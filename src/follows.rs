use crate::database::repositories::FollowRepository;
use crate::database::Database;
use crate::error::{EngineError, EngineResult};
use crate::utils::now_utc_iso;

/// Directed follower -> followee edges. Duplicate follows and absent
/// unfollows are no-op successes; only a self-follow is an error.
#[derive(Clone)]
pub struct FollowService {
    database: Database,
}

impl FollowService {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    pub fn follow(&self, follower_id: &str, followee_id: &str) -> EngineResult<()> {
        if follower_id == followee_id {
            return Err(EngineError::validation("users may not follow themselves"));
        }
        let created_at = now_utc_iso();
        self.database.with_repositories(|repos| {
            repos.follows().add_edge(follower_id, followee_id, &created_at)
        })?;
        Ok(())
    }

    pub fn unfollow(&self, follower_id: &str, followee_id: &str) -> EngineResult<()> {
        self.database
            .with_repositories(|repos| repos.follows().remove_edge(follower_id, followee_id))?;
        Ok(())
    }

    pub fn is_following(&self, follower_id: &str, followee_id: &str) -> EngineResult<bool> {
        Ok(self
            .database
            .with_repositories(|repos| repos.follows().exists(follower_id, followee_id))?)
    }

    pub fn followees(&self, follower_id: &str) -> EngineResult<Vec<String>> {
        Ok(self
            .database
            .with_repositories(|repos| repos.follows().followees_of(follower_id))?)
    }

    pub fn followers(&self, followee_id: &str) -> EngineResult<Vec<String>> {
        Ok(self
            .database
            .with_repositories(|repos| repos.follows().followers_of(followee_id))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> FollowService {
        FollowService::new(Database::in_memory().expect("in-memory db"))
    }

    #[test]
    fn self_follow_is_rejected() {
        let service = setup();
        let err = service.follow("alice", "alice").unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
        assert!(!service.is_following("alice", "alice").unwrap());
    }

    #[test]
    fn double_follow_leaves_one_edge() {
        let service = setup();
        service.follow("alice", "bob").unwrap();
        service.follow("alice", "bob").unwrap();
        assert!(service.is_following("alice", "bob").unwrap());
        assert_eq!(service.followees("alice").unwrap(), vec!["bob"]);
        assert_eq!(service.followers("bob").unwrap(), vec!["alice"]);
    }

    #[test]
    fn double_unfollow_is_a_no_op() {
        let service = setup();
        service.follow("alice", "bob").unwrap();
        service.unfollow("alice", "bob").unwrap();
        service.unfollow("alice", "bob").unwrap();
        assert!(!service.is_following("alice", "bob").unwrap());
        assert!(service.followees("alice").unwrap().is_empty());
    }

    #[test]
    fn edges_are_directed() {
        let service = setup();
        service.follow("alice", "bob").unwrap();
        assert!(service.is_following("alice", "bob").unwrap());
        assert!(!service.is_following("bob", "alice").unwrap());
    }
}
