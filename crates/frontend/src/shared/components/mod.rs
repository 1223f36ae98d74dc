pub mod form_field;
pub mod icon_picker;
pub mod page_header;
pub mod resource_list;

pub use form_field::FormField;
pub use icon_picker::IconPicker;
pub use page_header::PageHeader;
pub use resource_list::ResourceList;
