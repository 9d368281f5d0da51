pub mod document;
pub mod error;
pub mod extract;
pub mod handle;
pub mod reconcile;
pub mod report;
pub mod sheet;

pub use document::{Document, Link};
pub use error::{FollowbackError, Result};
pub use extract::{FollowerSet, extract_followers};
pub use handle::{canonical, is_valid_handle};
pub use reconcile::{check_followers, compute_non_mutual};
pub use report::{Report, ReportConfig, profile_url};
pub use sheet::{FetchConfig, TargetCache, parse_target_csv, sheet_csv_url};
#[cfg(feature = "fetch")]
pub use sheet::fetch_target_list;
