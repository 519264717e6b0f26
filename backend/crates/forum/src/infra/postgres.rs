//! PostgreSQL Repository Implementations
//!
//! Thread creation and its optional first post share one transaction so a
//! thread with a body can never exist without its seed post.

use chrono::{DateTime, Utc};
use kernel::id::{ForumId, PostId, ThreadId, UserId};
use kernel::page::PageParams;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{
    Author, Forum, ForumWithMeta, Post, PostWithAuthor, Thread, ThreadDetail, ThreadWithMeta,
};
use crate::domain::repository::ForumRepository;
use crate::error::ForumResult;

const FORUM_WITH_META_SELECT: &str = r#"
SELECT
    f.id AS f_id, f.title AS f_title, f.slug AS f_slug,
    f.description AS f_description, f.created_by AS f_created_by,
    f.created_at AS f_created_at, f.updated_at AS f_updated_at,
    u.id AS u_id, u.email AS u_email, u.display_name AS u_display_name,
    (SELECT COUNT(*) FROM threads t WHERE t.forum_id = f.id) AS thread_count
FROM forums f
JOIN users u ON u.id = f.created_by
"#;

const THREAD_WITH_META_SELECT: &str = r#"
SELECT
    t.id AS t_id, t.forum_id AS t_forum_id, t.author_id AS t_author_id,
    t.title AS t_title, t.body AS t_body,
    t.created_at AS t_created_at, t.updated_at AS t_updated_at,
    u.id AS u_id, u.email AS u_email, u.display_name AS u_display_name,
    (SELECT COUNT(*) FROM posts p WHERE p.thread_id = t.id) AS post_count
FROM threads t
JOIN users u ON u.id = t.author_id
"#;

const POST_WITH_AUTHOR_SELECT: &str = r#"
SELECT
    p.id AS p_id, p.thread_id AS p_thread_id, p.author_id AS p_author_id,
    p.body AS p_body, p.created_at AS p_created_at, p.updated_at AS p_updated_at,
    u.id AS u_id, u.email AS u_email, u.display_name AS u_display_name
FROM posts p
JOIN users u ON u.id = p.author_id
"#;

/// PostgreSQL-backed forum repository
#[derive(Clone)]
pub struct PgForumRepository {
    pool: PgPool,
}

impl PgForumRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ForumRepository for PgForumRepository {
    // ------------------------------------------------------------------
    // Forums
    // ------------------------------------------------------------------

    async fn list_forums(&self, page: PageParams) -> ForumResult<(Vec<ForumWithMeta>, i64)> {
        let rows = sqlx::query_as::<_, ForumWithMetaRow>(&format!(
            "{FORUM_WITH_META_SELECT} ORDER BY f.created_at DESC LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM forums")
            .fetch_one(&self.pool)
            .await?;

        Ok((
            rows.into_iter().map(ForumWithMetaRow::into_meta).collect(),
            total,
        ))
    }

    async fn find_forum(&self, id: &ForumId) -> ForumResult<Option<Forum>> {
        let row = sqlx::query_as::<_, ForumRow>(
            r#"
            SELECT id, title, slug, description, created_by, created_at, updated_at
            FROM forums
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ForumRow::into_forum))
    }

    async fn find_forum_with_meta(&self, id: &ForumId) -> ForumResult<Option<ForumWithMeta>> {
        let row = sqlx::query_as::<_, ForumWithMetaRow>(&format!(
            "{FORUM_WITH_META_SELECT} WHERE f.id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ForumWithMetaRow::into_meta))
    }

    async fn slug_exists(&self, slug: &str) -> ForumResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM forums WHERE slug = $1)")
                .bind(slug)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn create_forum(&self, forum: &Forum) -> ForumResult<()> {
        sqlx::query(
            r#"
            INSERT INTO forums (id, title, slug, description, created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(forum.id.as_uuid())
        .bind(&forum.title)
        .bind(&forum.slug)
        .bind(&forum.description)
        .bind(forum.created_by.as_uuid())
        .bind(forum.created_at)
        .bind(forum.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_forum(&self, forum: &Forum) -> ForumResult<()> {
        sqlx::query(
            r#"
            UPDATE forums SET
                title = $2,
                description = $3,
                updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(forum.id.as_uuid())
        .bind(&forum.title)
        .bind(&forum.description)
        .bind(forum.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // ------------------------------------------------------------------
    // Threads
    // ------------------------------------------------------------------

    async fn list_threads(
        &self,
        forum_id: &ForumId,
        page: PageParams,
    ) -> ForumResult<(Vec<ThreadWithMeta>, i64)> {
        let rows = sqlx::query_as::<_, ThreadWithMetaRow>(&format!(
            r#"{THREAD_WITH_META_SELECT}
            WHERE t.forum_id = $1
            ORDER BY t.created_at DESC
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(forum_id.as_uuid())
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await?;

        let total =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM threads WHERE forum_id = $1")
                .bind(forum_id.as_uuid())
                .fetch_one(&self.pool)
                .await?;

        Ok((
            rows.into_iter().map(ThreadWithMetaRow::into_meta).collect(),
            total,
        ))
    }

    async fn find_thread(&self, id: &ThreadId) -> ForumResult<Option<Thread>> {
        let row = sqlx::query_as::<_, ThreadRow>(
            r#"
            SELECT id, forum_id, author_id, title, body, created_at, updated_at
            FROM threads
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ThreadRow::into_thread))
    }

    async fn find_thread_detail(&self, id: &ThreadId) -> ForumResult<Option<ThreadDetail>> {
        let row = sqlx::query_as::<_, ThreadDetailRow>(
            r#"
            SELECT
                t.id AS t_id, t.forum_id AS t_forum_id, t.author_id AS t_author_id,
                t.title AS t_title, t.body AS t_body,
                t.created_at AS t_created_at, t.updated_at AS t_updated_at,
                f.id AS f_id, f.title AS f_title, f.slug AS f_slug,
                f.description AS f_description, f.created_by AS f_created_by,
                f.created_at AS f_created_at, f.updated_at AS f_updated_at,
                u.id AS u_id, u.email AS u_email, u.display_name AS u_display_name
            FROM threads t
            JOIN forums f ON f.id = t.forum_id
            JOIN users u ON u.id = t.author_id
            WHERE t.id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ThreadDetailRow::into_detail))
    }

    async fn create_thread_with_first_post(
        &self,
        thread: &Thread,
        first_post: Option<&Post>,
    ) -> ForumResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO threads (id, forum_id, author_id, title, body, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(thread.id.as_uuid())
        .bind(thread.forum_id.as_uuid())
        .bind(thread.author_id.as_uuid())
        .bind(&thread.title)
        .bind(&thread.body)
        .bind(thread.created_at)
        .bind(thread.updated_at)
        .execute(&mut *tx)
        .await?;

        if let Some(post) = first_post {
            sqlx::query(
                r#"
                INSERT INTO posts (id, thread_id, author_id, body, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(post.id.as_uuid())
            .bind(post.thread_id.as_uuid())
            .bind(post.author_id.as_uuid())
            .bind(&post.body)
            .bind(post.created_at)
            .bind(post.updated_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    // ------------------------------------------------------------------
    // Posts
    // ------------------------------------------------------------------

    async fn list_posts(
        &self,
        thread_id: &ThreadId,
        page: PageParams,
    ) -> ForumResult<(Vec<PostWithAuthor>, i64)> {
        let rows = sqlx::query_as::<_, PostWithAuthorRow>(&format!(
            r#"{POST_WITH_AUTHOR_SELECT}
            WHERE p.thread_id = $1
            ORDER BY p.created_at ASC
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(thread_id.as_uuid())
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await?;

        let total =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts WHERE thread_id = $1")
                .bind(thread_id.as_uuid())
                .fetch_one(&self.pool)
                .await?;

        Ok((
            rows.into_iter()
                .map(PostWithAuthorRow::into_post_with_author)
                .collect(),
            total,
        ))
    }

    async fn find_post(&self, id: &PostId) -> ForumResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, thread_id, author_id, body, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn find_post_with_author(&self, id: &PostId) -> ForumResult<Option<PostWithAuthor>> {
        let row = sqlx::query_as::<_, PostWithAuthorRow>(&format!(
            "{POST_WITH_AUTHOR_SELECT} WHERE p.id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostWithAuthorRow::into_post_with_author))
    }

    async fn create_post(&self, post: &Post) -> ForumResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, thread_id, author_id, body, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(post.id.as_uuid())
        .bind(post.thread_id.as_uuid())
        .bind(post.author_id.as_uuid())
        .bind(&post.body)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_post(&self, post: &Post) -> ForumResult<()> {
        sqlx::query("UPDATE posts SET body = $2, updated_at = $3 WHERE id = $1")
            .bind(post.id.as_uuid())
            .bind(&post.body)
            .bind(post.updated_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    // ------------------------------------------------------------------
    // Authors
    // ------------------------------------------------------------------

    async fn find_author(&self, user_id: &UserId) -> ForumResult<Option<Author>> {
        let row = sqlx::query_as::<_, AuthorRow>(
            "SELECT id AS u_id, email AS u_email, display_name AS u_display_name FROM users WHERE id = $1",
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AuthorRow::into_author))
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct AuthorRow {
    u_id: Uuid,
    u_email: String,
    u_display_name: Option<String>,
}

impl AuthorRow {
    fn into_author(self) -> Author {
        Author {
            id: UserId::from_uuid(self.u_id),
            email: self.u_email,
            display_name: self.u_display_name,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ForumRow {
    id: Uuid,
    title: String,
    slug: String,
    description: Option<String>,
    created_by: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ForumRow {
    fn into_forum(self) -> Forum {
        Forum {
            id: ForumId::from_uuid(self.id),
            title: self.title,
            slug: self.slug,
            description: self.description,
            created_by: UserId::from_uuid(self.created_by),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ForumWithMetaRow {
    #[sqlx(flatten)]
    forum: ForumAliasedRow,
    #[sqlx(flatten)]
    creator: AuthorRow,
    thread_count: i64,
}

impl ForumWithMetaRow {
    fn into_meta(self) -> ForumWithMeta {
        ForumWithMeta {
            forum: self.forum.into_forum(),
            creator: self.creator.into_author(),
            thread_count: self.thread_count,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ThreadRow {
    id: Uuid,
    forum_id: Uuid,
    author_id: Uuid,
    title: String,
    body: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ThreadRow {
    fn into_thread(self) -> Thread {
        Thread {
            id: ThreadId::from_uuid(self.id),
            forum_id: ForumId::from_uuid(self.forum_id),
            author_id: UserId::from_uuid(self.author_id),
            title: self.title,
            body: self.body,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ThreadWithMetaRow {
    t_id: Uuid,
    t_forum_id: Uuid,
    t_author_id: Uuid,
    t_title: String,
    t_body: Option<String>,
    t_created_at: DateTime<Utc>,
    t_updated_at: DateTime<Utc>,
    #[sqlx(flatten)]
    author: AuthorRow,
    post_count: i64,
}

impl ThreadWithMetaRow {
    fn into_meta(self) -> ThreadWithMeta {
        ThreadWithMeta {
            thread: Thread {
                id: ThreadId::from_uuid(self.t_id),
                forum_id: ForumId::from_uuid(self.t_forum_id),
                author_id: UserId::from_uuid(self.t_author_id),
                title: self.t_title,
                body: self.t_body,
                created_at: self.t_created_at,
                updated_at: self.t_updated_at,
            },
            author: self.author.into_author(),
            post_count: self.post_count,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ThreadDetailRow {
    t_id: Uuid,
    t_forum_id: Uuid,
    t_author_id: Uuid,
    t_title: String,
    t_body: Option<String>,
    t_created_at: DateTime<Utc>,
    t_updated_at: DateTime<Utc>,
    #[sqlx(flatten)]
    forum: ForumAliasedRow,
    #[sqlx(flatten)]
    author: AuthorRow,
}

impl ThreadDetailRow {
    fn into_detail(self) -> ThreadDetail {
        ThreadDetail {
            thread: Thread {
                id: ThreadId::from_uuid(self.t_id),
                forum_id: ForumId::from_uuid(self.t_forum_id),
                author_id: UserId::from_uuid(self.t_author_id),
                title: self.t_title,
                body: self.t_body,
                created_at: self.t_created_at,
                updated_at: self.t_updated_at,
            },
            forum: self.forum.into_forum(),
            author: self.author.into_author(),
        }
    }
}

/// Forum columns under `f_` aliases (for joined selects)
#[derive(sqlx::FromRow)]
struct ForumAliasedRow {
    f_id: Uuid,
    f_title: String,
    f_slug: String,
    f_description: Option<String>,
    f_created_by: Uuid,
    f_created_at: DateTime<Utc>,
    f_updated_at: DateTime<Utc>,
}

impl ForumAliasedRow {
    fn into_forum(self) -> Forum {
        Forum {
            id: ForumId::from_uuid(self.f_id),
            title: self.f_title,
            slug: self.f_slug,
            description: self.f_description,
            created_by: UserId::from_uuid(self.f_created_by),
            created_at: self.f_created_at,
            updated_at: self.f_updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    thread_id: Uuid,
    author_id: Uuid,
    body: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            id: PostId::from_uuid(self.id),
            thread_id: ThreadId::from_uuid(self.thread_id),
            author_id: UserId::from_uuid(self.author_id),
            body: self.body,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PostWithAuthorRow {
    p_id: Uuid,
    p_thread_id: Uuid,
    p_author_id: Uuid,
    p_body: String,
    p_created_at: DateTime<Utc>,
    p_updated_at: DateTime<Utc>,
    #[sqlx(flatten)]
    author: AuthorRow,
}

impl PostWithAuthorRow {
    fn into_post_with_author(self) -> PostWithAuthor {
        PostWithAuthor {
            post: Post {
                id: PostId::from_uuid(self.p_id),
                thread_id: ThreadId::from_uuid(self.p_thread_id),
                author_id: UserId::from_uuid(self.p_author_id),
                body: self.p_body,
                created_at: self.p_created_at,
                updated_at: self.p_updated_at,
            },
            author: self.author.into_author(),
        }
    }
}
