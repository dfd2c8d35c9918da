use std::sync::Arc;

use models::{Comment, LoginInput, Post, User};
use tracing::{debug, info, instrument, warn};

use super::errors::BlogError;
use crate::repository::{upsert_by_id, CollectionRepository, Upsert, POSTS_KEY, USERS_KEY};
use crate::storage::KvStore;

/// Blog operations over the `posts` and `users` collections.
///
/// Each call loads the collection it needs, mutates it in memory and saves it
/// back. Nothing is kept between calls.
#[derive(Clone)]
pub struct BlogService {
    posts: CollectionRepository<Post>,
    users: CollectionRepository<User>,
}

impl BlogService {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            posts: CollectionRepository::new(Arc::clone(&store), POSTS_KEY),
            users: CollectionRepository::new(store, USERS_KEY),
        }
    }

    /// All posts in stored order.
    pub async fn list_posts(&self) -> Result<Vec<Post>, BlogError> {
        Ok(self.posts.load_or_init(Vec::new()).await?)
    }

    /// Insert the post, or replace the stored post with the same id.
    ///
    /// # Examples
    /// ```
    /// use service::blog::BlogService;
    /// use service::storage::InMemoryKvStore;
    /// use std::sync::Arc;
    /// let svc = BlogService::new(Arc::new(InMemoryKvStore::new()));
    /// let post: models::Post = serde_json::from_str(
    ///     r#"{"id":1,"username":"ana","title":"t","content":"c","date":"2024-01-01"}"#,
    /// ).unwrap();
    /// let saved = tokio_test::block_on(svc.upsert_post(post.clone())).unwrap();
    /// assert_eq!(saved, post);
    /// assert_eq!(tokio_test::block_on(svc.list_posts()).unwrap().len(), 1);
    /// ```
    #[instrument(skip(self, post), fields(post_id = post.id))]
    pub async fn upsert_post(&self, post: Post) -> Result<Post, BlogError> {
        let mut posts = self.posts.load_or_init(Vec::new()).await?;
        match upsert_by_id(&mut posts, post.clone()) {
            Upsert::Replaced(idx) => debug!(idx, "post replaced"),
            Upsert::Appended(idx) => debug!(idx, "post appended"),
        }
        self.posts.save(&posts).await?;
        Ok(post)
    }

    /// Append a new user unless the username is already taken.
    #[instrument(skip(self, user), fields(username = %user.username))]
    pub async fn register(&self, user: User) -> Result<User, BlogError> {
        let mut users = self.users.load_or_init(Vec::new()).await?;
        if users.iter().any(|u| u.username == user.username) {
            debug!("username taken");
            return Err(BlogError::UsernameTaken(user.username));
        }
        users.push(user.clone());
        self.users.save(&users).await?;
        info!(user_id = user.id, "user_registered");
        Ok(user)
    }

    /// Stored record of the user whose username and password both match.
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn login(&self, input: LoginInput) -> Result<User, BlogError> {
        let users = self.users.load_or_init(Vec::new()).await?;
        match users.into_iter().find(|u| u.matches_credentials(&input.username, &input.password)) {
            Some(user) => Ok(user),
            None => {
                warn!("login rejected");
                Err(BlogError::InvalidCredentials)
            }
        }
    }

    /// Append the comment to the post it points at and return that post.
    ///
    /// The posts collection is saved even when no post matches; the result is
    /// then `None`.
    #[instrument(skip(self, comment), fields(post_id = comment.post_id))]
    pub async fn add_comment(&self, comment: Comment) -> Result<Option<Post>, BlogError> {
        let mut posts = self.posts.load_or_init(Vec::new()).await?;
        let mut affected: Option<usize> = None;
        for (idx, post) in posts.iter_mut().enumerate() {
            if post.id == comment.post_id {
                post.push_comment(comment.clone());
                affected.get_or_insert(idx);
            }
        }
        self.posts.save(&posts).await?;
        if affected.is_none() {
            debug!("comment target not found");
        }
        Ok(affected.map(|idx| posts.swap_remove(idx)))
    }

    /// Replace the stored user with the same id and echo the submitted record.
    ///
    /// An unknown id leaves the collection as it was; it is still saved.
    #[instrument(skip(self, user), fields(user_id = user.id))]
    pub async fn update_user(&self, user: User) -> Result<User, BlogError> {
        let users = self.users.load_or_init(Vec::new()).await?;
        let users: Vec<User> = users
            .into_iter()
            .map(|u| if u.id == user.id { user.clone() } else { u })
            .collect();
        self.users.save(&users).await?;
        Ok(user)
    }
}
