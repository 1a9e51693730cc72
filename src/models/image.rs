use serde::Deserialize;

use super::Paginated;

/// Одна картинка галереи: объект `{"image": url, ...}` или просто строка с URL.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ImageEntry {
    Object { image: String },
    Url(String),
}

impl ImageEntry {
    pub fn into_url(self) -> String {
        match self {
            ImageEntry::Object { image } => image,
            ImageEntry::Url(url) => url,
        }
    }
}

/// Ответ `GET /api/events/{id}/images/`.
///
/// Эндпоинт исторически отдает две формы: конверт пагинации и
/// `{preview_image_url, images}`. Обе нормализуются в [`ImageSet`] на границе клиента.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ImagesResponse {
    Paginated(Paginated<ImageEntry>),
    Gallery {
        #[serde(default)]
        preview_image_url: Option<String>,
        images: Vec<ImageEntry>,
    },
}

/// Упорядоченный набор URL картинок; первая считается активной.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageSet {
    urls: Vec<String>,
}

impl ImageSet {
    pub fn new(urls: Vec<String>) -> Self {
        let urls = urls.into_iter().filter(|url| !url.is_empty()).collect();
        Self { urls }
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

impl From<ImagesResponse> for ImageSet {
    fn from(response: ImagesResponse) -> Self {
        let entries = match response {
            ImagesResponse::Paginated(page) => page.results,
            ImagesResponse::Gallery { images, .. } => images,
        };
        ImageSet::new(entries.into_iter().map(ImageEntry::into_url).collect())
    }
}
