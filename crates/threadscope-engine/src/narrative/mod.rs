//! Deterministic text generation for a single analyzed post.
//!
//! Every sentence comes from an exhaustive `match` over [`Theme`],
//! [`FocusArea`] or [`Community`], so each generator can be tested for
//! every identifier it handles. All three generators are total: they return
//! non-empty text even when nothing matched.
//!
//! [`Theme`]: threadscope_core::Theme
//! [`FocusArea`]: threadscope_core::FocusArea

mod response;
mod takeaways;
mod targeting;

pub use response::suggested_response;
pub use takeaways::{takeaways, MAX_TAKEAWAYS};
pub use targeting::targeting_insights;

use threadscope_core::{Community, Post};

use crate::profile::CompanyProfile;
use crate::themes::ThemeMatch;

/// Everything the generators read for one post.
#[derive(Debug, Clone, Copy)]
pub struct NarrativeContext<'a> {
    pub post: &'a Post,
    pub themes: &'a ThemeMatch,
    pub profile: &'a CompanyProfile,
    /// Whether a non-blank company description was supplied.
    pub has_description: bool,
}

impl NarrativeContext<'_> {
    fn community(&self) -> Option<Community> {
        Community::from_label(&self.post.community)
    }

    /// `r/<label>` for display, tolerating labels that already carry the prefix.
    fn community_display(&self) -> String {
        let label = self.post.community.trim();
        let bare = label.strip_prefix("r/").unwrap_or(label);
        if bare.is_empty() {
            "an unlabeled community".to_string()
        } else {
            format!("r/{bare}")
        }
    }
}
