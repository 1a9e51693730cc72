//! Карусель на странице события.
//!
//! Слайд и его индикатор — одно значение [`Slide`], поэтому список слайдов и
//! разметка (элементы карусели + индикаторы) не могут разойтись.

use maud::{html, Markup};

use crate::models::ImageSet;

pub const CAROUSEL_ID: &str = "mainCarousel";

const SLIDE_STYLE: &str = "height: 400px; object-fit: contain; background-color: #f8f9fa;";

#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub url: String,
    pub active: bool,
}

/// Слайды одной сессии страницы события.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gallery {
    slides: Vec<Slide>,
    controls_visible: bool,
}

impl Gallery {
    /// Галерея из одного активного слайда — превью или заглушки.
    pub fn seeded(preview_url: &str) -> Self {
        let mut gallery = Gallery::default();
        gallery.add_slide(preview_url, true);
        gallery
    }

    pub fn add_slide(&mut self, url: &str, active: bool) {
        self.slides.push(Slide { url: url.to_string(), active });
    }

    /// Очищает слайды вместе с индикаторами и прячет стрелки.
    pub fn reset(&mut self) {
        self.slides.clear();
        self.controls_visible = false;
    }

    /// Заменяет превью реальными картинками. Пустой набор оставляет галерею как есть.
    pub fn rebuild(&mut self, images: &ImageSet) -> bool {
        if images.is_empty() {
            return false;
        }

        self.reset();
        for (idx, url) in images.urls().iter().enumerate() {
            self.add_slide(url, idx == 0);
        }
        self.update_controls();
        true
    }

    fn update_controls(&mut self) {
        if self.slides.len() > 1 {
            self.controls_visible = true;
        }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    pub fn render(&self) -> Markup {
        let target = format!("#{}", CAROUSEL_ID);
        let hidden = !self.controls_visible;

        html! {
            div.carousel.slide id=(CAROUSEL_ID) data-bs-ride="false" {
                div #carousel-indicators .carousel-indicators {
                    @for (idx, slide) in self.slides.iter().enumerate() {
                        button type="button" data-bs-target=(target) data-bs-slide-to=(idx)
                            .active[slide.active] aria-current=[slide.active.then_some("true")]
                            aria-label={ "Slide " (idx + 1) } {}
                    }
                }
                div #carousel-inner .carousel-inner {
                    @for (idx, slide) in self.slides.iter().enumerate() {
                        div.carousel-item.active[slide.active] {
                            img src=(slide.url) ."d-block" ."w-100" style=(SLIDE_STYLE) alt={ "Слайд " (idx + 1) };
                        }
                    }
                }
                button #btn-prev .carousel-control-prev .d-none[hidden] type="button" data-bs-target=(target) data-bs-slide="prev" {
                    span.carousel-control-prev-icon aria-hidden="true" {}
                    span.visually-hidden { "Назад" }
                }
                button #btn-next .carousel-control-next .d-none[hidden] type="button" data-bs-target=(target) data-bs-slide="next" {
                    span.carousel-control-next-icon aria-hidden="true" {}
                    span.visually-hidden { "Вперед" }
                }
            }
        }
    }
}
