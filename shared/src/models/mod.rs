//! Data Models
//!
//! One file per resource, each with the entity plus `Create`/`Update`
//! payload structs.

pub mod booking;
pub mod category;
pub mod dining_table;
pub mod menu_item;
pub mod restaurant;
pub mod setting;
pub mod social_link;

pub use booking::{Booking, BookingCreate, BookingStatus};
pub use category::{MenuCategory, MenuCategoryCreate, MenuCategoryUpdate};
pub use dining_table::{DiningTable, DiningTableCreate, DiningTableUpdate};
pub use menu_item::{MenuItem, MenuItemCreate, MenuItemUpdate};
pub use restaurant::{Restaurant, RestaurantUpdate};
pub use setting::Setting;
pub use social_link::{SocialLink, SocialLinkCreate, SocialLinkUpdate};
