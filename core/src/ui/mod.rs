pub mod book_view;
pub mod geom;
pub mod page_content;
pub mod palette;
pub mod view;

pub use book_view::BookView;
pub use geom::Rect;
pub use view::{UiContext, View};
