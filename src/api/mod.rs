pub mod edit;
pub mod upload;

pub use edit::{__path_handle_remove_background, __path_handle_resize, __path_handle_set_padding};
pub use edit::{
    handle_remove_background, handle_resize, handle_set_padding, EditErrorResponse,
    ImageResponse, RemoveBackgroundForm, ResizeForm, SetPaddingForm,
};
pub use upload::UploadForm;
