//! HTML-представления страниц. Идентификаторы элементов — контракт с шаблоном хост-страницы.

pub mod detail;
pub mod format;
pub mod gallery;
pub mod html;
pub mod listing;

pub use gallery::{Gallery, Slide};
