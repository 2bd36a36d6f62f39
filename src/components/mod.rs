//! UI Components
//!
//! Building blocks of the CreatePoint form.

mod page_header;
mod contact_fields;
mod location_fields;
mod items_grid;
mod point_map;

pub use page_header::PageHeader;
pub use contact_fields::ContactFields;
pub use location_fields::LocationFields;
pub use items_grid::ItemsGrid;
pub use point_map::PointMap;
