//! Cover art validation state store

/// Expected width:height ratio for an image field, e.g. 4:3.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AspectRatio {
    pub width: u32,
    pub height: u32,
}

impl AspectRatio {
    /// Parse a spec like `"4:3"`. Zero terms and malformed specs are None.
    pub fn parse(spec: &str) -> Option<AspectRatio> {
        let (width, height) = spec.split_once(':')?;
        let width: u32 = width.trim().parse().ok()?;
        let height: u32 = height.trim().parse().ok()?;
        if width == 0 || height == 0 {
            return None;
        }
        Some(AspectRatio { width, height })
    }

    /// Exact rational match, no floating point.
    pub fn matches(&self, width: u32, height: u32) -> bool {
        width as u64 * self.height as u64 == height as u64 * self.width as u64
    }

    pub fn display(&self) -> String {
        format!("{}:{}", self.width, self.height)
    }
}

/// Validation status of a cover field.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ArtworkStatus {
    /// No image chosen yet, or the field was cleared
    #[default]
    Unchecked,
    Valid,
    /// Dimensions of the image that failed the check
    Invalid { width: u32, height: u32 },
}

/// State for one image field with an expected ratio.
#[derive(Clone, Debug, PartialEq)]
pub struct CoverField {
    pub expected: AspectRatio,
    pub status: ArtworkStatus,
    /// Object URL of the chosen file, for the preview
    pub preview_url: Option<String>,
}

impl CoverField {
    pub fn new(expected: AspectRatio) -> Self {
        Self {
            expected,
            status: ArtworkStatus::Unchecked,
            preview_url: None,
        }
    }

    /// A file was chosen and its dimensions measured.
    pub fn image_loaded(&mut self, width: u32, height: u32, preview_url: Option<String>) {
        self.status = if self.expected.matches(width, height) {
            ArtworkStatus::Valid
        } else {
            ArtworkStatus::Invalid { width, height }
        };
        self.preview_url = preview_url;
    }

    /// The field was cleared.
    pub fn cleared(&mut self) {
        self.status = ArtworkStatus::Unchecked;
        self.preview_url = None;
    }

    /// Whether submission should be blocked on this field.
    pub fn is_invalid(&self) -> bool {
        matches!(self.status, ArtworkStatus::Invalid { .. })
    }
}
