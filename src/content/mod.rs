pub mod front_matter;
pub mod post_list;
pub mod post_record;

pub use post_list::PostList;
pub use post_record::PostRecord;
