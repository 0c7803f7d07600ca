pub mod image_resize;
