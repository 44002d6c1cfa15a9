use serde::Deserialize;

/// Metadata for one comic as published in its `info.0.json` document.
///
/// Fields the API omits decode to empty/zero values; `number == 0` means the
/// document carried no `num`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Comic {
    pub title: String,
    #[serde(rename = "img")]
    pub image_url: String,
    #[serde(rename = "alt")]
    pub caption: String,
    #[serde(rename = "num")]
    pub number: u32,
}

impl Comic {
    /// Title line as printed above the image, optionally prefixed with `#<n>`.
    pub fn heading(&self, with_number: bool) -> String {
        if with_number {
            format!("#{} {}", self.number, self.title)
        } else {
            self.title.clone()
        }
    }
}
