// Standalone components
pub mod alert;
pub mod badge;
pub mod button;
pub mod card;
pub mod detail_list;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod skeleton;
pub mod textarea;

// Depends on skeleton
pub mod loading_screen;

pub use alert::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use detail_list::*;
pub use form_select::*;
pub use input::*;
pub use loading_screen::*;
pub use page_header::*;
pub use skeleton::*;
pub use textarea::*;
