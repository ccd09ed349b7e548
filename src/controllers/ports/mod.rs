pub mod image_presenter;
