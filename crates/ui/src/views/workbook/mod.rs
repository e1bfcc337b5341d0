mod audio;
mod pages;
mod print;
mod scripts;
mod stores;
mod view;

pub use view::WorkbookView;
