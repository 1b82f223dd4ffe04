use crate::post::post_model::Post;
use tokio::sync::RwLock;

/// In-memory, append-only collection of posts.
///
/// Lives as long as the server process; nothing is written to disk.
#[derive(Debug, Default)]
pub struct PostStore {
    posts: RwLock<Vec<Post>>,
}

impl PostStore {
    pub fn new() -> Self {
        PostStore {
            posts: RwLock::new(Vec::new()),
        }
    }

    /// Append a post to the end of the collection and return the new size.
    pub async fn append(&self, post: Post) -> usize {
        let mut posts = self.posts.write().await;
        posts.push(post);
        posts.len()
    }

    /// Every post appended so far, oldest first.
    pub async fn list(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }
}
