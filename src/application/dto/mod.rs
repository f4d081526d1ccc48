pub mod articles;
pub mod comments;

pub use articles::{ArticleDto, ArticleInput, ArticleListResponse, ArticleSummaryDto};
pub use comments::{CommentDto, CommentInput, CommentListResponse, CommentSummaryDto};
