pub mod progress;
pub mod state;
pub mod table;

pub use progress::{
    OperationStatus, ProgressSpinner, display_error, display_status, format_error, format_status,
    highlight_enabled,
};
pub use state::{Applied, DisplayState, ShownImage, StatusMessage};
pub use table::{photo_table, profiles_table};
