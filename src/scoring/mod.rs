//! Score model: deterministic mapping from raw signals to category scores
//!
//! Every scorer is a pure function over a raw signal subset. Absence of a
//! field is always "criterion not met", never an error, so any collector
//! payload shape produces a bounded score.

mod labels;
mod seo;

pub use labels::{content_rating, performance_rating, seo_health_status, technical_health};
pub use seo::{
    score_headings, score_images, score_links, score_meta_tags, score_mobile, score_overall,
    seo_scores, OVERALL_WEIGHTS,
};
