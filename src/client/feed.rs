use uuid::Uuid;

use crate::client::api::{error_message, ApiClient, ClientError};
use crate::models::PostResponse;

const FETCH_FALLBACK: &str = "No pudimos obtener las publicaciones.";
const CREATE_FALLBACK: &str = "No pudimos crear la publicación.";
const LIKE_FALLBACK: &str = "No pudimos registrar el like.";
const UNLIKE_FALLBACK: &str = "No pudimos quitar el like.";

/// Client-side feed container. Holds only confirmed server state: no
/// optimistic updates, and a failed mutation leaves the list untouched
/// except for the error message.
pub struct FeedStore {
    api: ApiClient,
    posts: Vec<PostResponse>,
    is_loading: bool,
    error: Option<String>,
}

impl FeedStore {
    pub fn new(api: ApiClient) -> Self {
        FeedStore {
            api,
            posts: Vec::new(),
            is_loading: false,
            error: None,
        }
    }

    pub fn posts(&self) -> &[PostResponse] {
        &self.posts
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn replace_entry(&mut self, updated: PostResponse) {
        for post in self.posts.iter_mut() {
            if post.id == updated.id {
                *post = updated;
                return;
            }
        }
    }

    /// Fetch replaces the whole list.
    pub async fn fetch_feed(&mut self, token: &str) {
        self.is_loading = true;
        self.error = None;

        match self.api.get_feed(token).await {
            Ok(posts) => {
                self.posts = posts;
                self.is_loading = false;
            }
            Err(e) => {
                self.error = Some(error_message(&e, FETCH_FALLBACK));
                self.is_loading = false;
            }
        }
    }

    /// The confirmed new post is prepended; no re-fetch of the feed.
    pub async fn create_post(&mut self, token: &str, message: &str) -> Option<PostResponse> {
        match self.api.create_post(token, message).await {
            Ok(post) => {
                self.posts.insert(0, post.clone());
                Some(post)
            }
            Err(e) => {
                self.error = Some(error_message(&e, CREATE_FALLBACK));
                None
            }
        }
    }

    /// `liked` is the current state as the UI sees it: true means the
    /// click asks to remove the like. The confirmed entry replaces the
    /// matching one in place.
    pub async fn toggle_like(
        &mut self,
        token: &str,
        post_id: Uuid,
        liked: bool,
    ) -> Option<PostResponse> {
        let result = if liked {
            self.api.unlike_post(token, post_id).await
        } else {
            self.api.like_post(token, post_id).await
        };

        match result {
            Ok(updated) => {
                self.replace_entry(updated.clone());
                Some(updated)
            }
            Err(e) => {
                let fallback = if liked { UNLIKE_FALLBACK } else { LIKE_FALLBACK };
                self.error = Some(error_message(&e, fallback));
                None
            }
        }
    }

    pub fn reset(&mut self) {
        self.posts.clear();
        self.error = None;
        self.is_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PostAuthor;
    use chrono::Utc;

    fn unreachable_api() -> ApiClient {
        ApiClient::new("http://127.0.0.1:1")
    }

    fn entry(id: Uuid, likes: i64, liked_by_me: bool) -> PostResponse {
        PostResponse {
            id,
            message: "Hola mundo".to_string(),
            published_at: Utc::now(),
            author: PostAuthor {
                id: Uuid::new_v4(),
                alias: "anar".to_string(),
                name: "Ana Romero".to_string(),
            },
            likes,
            liked_by_me,
        }
    }

    #[test]
    fn replace_entry_swaps_only_the_matching_post() {
        let mut store = FeedStore::new(unreachable_api());
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        store.posts = vec![entry(first, 0, false), entry(second, 3, false)];

        store.replace_entry(entry(second, 4, true));

        assert_eq!(store.posts[0].likes, 0);
        assert_eq!(store.posts[1].likes, 4);
        assert!(store.posts[1].liked_by_me);
    }

    #[test]
    fn replace_entry_with_unknown_id_is_a_noop() {
        let mut store = FeedStore::new(unreachable_api());
        store.posts = vec![entry(Uuid::new_v4(), 1, false)];

        store.replace_entry(entry(Uuid::new_v4(), 9, true));

        assert_eq!(store.posts.len(), 1);
        assert_eq!(store.posts[0].likes, 1);
    }

    #[tokio::test]
    async fn failed_fetch_keeps_previous_posts_and_sets_error() {
        let mut store = FeedStore::new(unreachable_api());
        store.posts = vec![entry(Uuid::new_v4(), 2, true)];

        store.fetch_feed("some-token").await;

        assert_eq!(store.posts.len(), 1, "prior state must survive a failure");
        assert_eq!(store.error(), Some(FETCH_FALLBACK));
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn failed_toggle_leaves_list_untouched() {
        let mut store = FeedStore::new(unreachable_api());
        let id = Uuid::new_v4();
        store.posts = vec![entry(id, 2, false)];

        let result = store.toggle_like("some-token", id, false).await;

        assert!(result.is_none());
        assert_eq!(store.posts[0].likes, 2);
        assert!(!store.posts[0].liked_by_me);
        assert_eq!(store.error(), Some(LIKE_FALLBACK));
    }

    #[test]
    fn reset_clears_everything() {
        let mut store = FeedStore::new(unreachable_api());
        store.posts = vec![entry(Uuid::new_v4(), 0, false)];
        store.error = Some("boom".to_string());

        store.reset();

        assert!(store.posts().is_empty());
        assert!(store.error().is_none());
        assert!(!store.is_loading());
    }
}
